//! Shared fixtures for integration tests

#![allow(dead_code)]

use nether_font::{Font, FontDescriptor};

/// Monospace font: "a", "b", " " advance 10, line height 20.
/// "x" lives on atlas 2 and "y" on atlas 5.
pub const MONO_FONT_JSON: &str = r#"{
    "line_height": 20,
    "glyphs": [
        { "codepoint": 97, "x": 0,  "y": 0, "width": 8, "height": 16, "x_advance": 10 },
        { "codepoint": 98, "x": 8,  "y": 0, "width": 8, "height": 16, "x_advance": 10 },
        { "codepoint": 32, "x": 16, "y": 0, "width": 1, "height": 1,  "x_advance": 10 },
        { "codepoint": 120, "atlas": 2, "x": 0, "y": 0, "width": 8, "height": 16, "x_advance": 10 },
        { "codepoint": 121, "atlas": 5, "x": 0, "y": 0, "width": 8, "height": 16, "x_advance": 10 }
    ]
}"#;

/// Proportional font with kerning and placement offsets
pub const KERNED_FONT_TOML: &str = r#"
line_height = 14

[[glyphs]]
codepoint = 65 # A
x = 0
y = 0
width = 9
height = 12
y_offset = 1
x_advance = 10

[[glyphs]]
codepoint = 86 # V
x = 10
y = 0
width = 9
height = 12
x_offset = -1
y_offset = 1
x_advance = 10

[[glyphs]]
codepoint = 84 # T
x = 20
y = 0
width = 8
height = 12
x_advance = 8

[[glyphs]]
codepoint = 111 # o
x = 30
y = 0
width = 6
height = 8
y_offset = 4
x_advance = 7

[[kerning]]
first = 65
second = 86
amount = -2

[[kerning]]
first = 86
second = 65
amount = -2

[[kerning]]
first = 84
second = 111
amount = -1
"#;

pub fn mono_font() -> Font {
    let descriptor: FontDescriptor = serde_json::from_str(MONO_FONT_JSON).unwrap();
    descriptor.build().unwrap()
}

pub fn kerned_font() -> Font {
    let descriptor: FontDescriptor = toml::from_str(KERNED_FONT_TOML).unwrap();
    descriptor.build().unwrap()
}
