//! Nether-Font: bitmap font text for Nethercore
//!
//! Turns a string into positioned glyph quads for a texture-mapped
//! rasterizer that draws fixed-point textured rectangles.
//!
//! # Pipeline
//!
//! ```text
//! FontDescriptor ──build──► Font (SymbolTable + KerningTable + line height)
//!                             │
//!          ┌──────────────────┴──────────────────┐
//!   single-byte, no wrap                    UTF-8, word wrap
//!   measure / immediate::render        TextLayout::layout
//!                                               │
//!                                        DrawListBuilder ──► CommandSink
//! ```
//!
//! Glyph and kerning tables use open addressing with a bounded probe count,
//! so lookups cost at most `max_collisions + 1` slot reads.
//!
//! # Limits
//!
//! - Font codepoints are limited to `0..=0x7FFF`
//! - Characters outside the 16-bit range decode to an unsupported sentinel
//! - No shaping: ligatures, bidi and combining marks are not handled
//!
//! # Usage
//!
//! ```
//! use nether_font::{DrawCommand, DrawListBuilder, FontDescriptor, Glyph, TextLayout};
//!
//! let glyph = |ch: char, x: u16| Glyph {
//!     codepoint: ch as u16,
//!     atlas: 0,
//!     x,
//!     y: 0,
//!     width: 8,
//!     height: 8,
//!     x_offset: 0,
//!     y_offset: 0,
//!     x_advance: 9,
//! };
//! let font = FontDescriptor {
//!     line_height: 10,
//!     glyphs: vec![glyph('h', 0), glyph('i', 8), glyph(' ', 16)],
//!     ..Default::default()
//! }
//! .build()
//! .unwrap();
//!
//! let mut layout = TextLayout::new();
//! let status = layout.layout(&font, "hi hi".as_bytes(), 20);
//! assert!(!status.is_truncated());
//! assert_eq!(layout.height(), 20);
//!
//! let mut commands: Vec<DrawCommand<&str>> = Vec::new();
//! DrawListBuilder::new(&["font.png"])
//!     .offset(4, 4)
//!     .build(&layout, &mut commands)
//!     .unwrap();
//! assert_eq!(commands.len(), 1 + layout.len());
//! ```

pub mod command;
pub mod config;
pub mod draw_list;
pub mod error;
pub mod font;
pub mod glyph;
pub mod immediate;
pub mod layout;
pub mod measure;
pub mod tables;
pub mod utf8;

pub use command::{
    COMMANDS_PER_QUAD, CommandSink, DrawCommand, RENDER_TILE, Rgba, SAMPLE_STEP, SUBPIXEL_SCALE,
    TEXEL_SCALE, TextureRect,
};
pub use config::{DrawSettings, LayoutSettings, TextConfig};
pub use draw_list::DrawListBuilder;
pub use error::{ConfigError, FontError};
pub use font::{Font, FontDescriptor};
pub use glyph::{Codepoint, Glyph, KerningPair, MAX_CODEPOINT};
pub use layout::{AtlasSet, LayoutStatus, PlacedGlyph, TextLayout};
pub use measure::{TextSize, measure};
pub use tables::{KerningTable, SymbolTable};
pub use utf8::{UNSUPPORTED_CODEPOINT, Utf8Decoder};

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::font::Font;
    use crate::glyph::{Glyph, KerningPair};
    use crate::tables::{KerningTable, SymbolTable, capacity_for};

    /// 8x16 glyph with no offsets, source rect derived from the character
    pub fn glyph(ch: char, atlas: u8, advance: i16) -> Glyph {
        let code = ch as u16;
        Glyph {
            codepoint: code,
            atlas,
            x: (code % 16) * 8,
            y: (code / 16) * 16,
            width: 8,
            height: 16,
            x_offset: 0,
            y_offset: 0,
            x_advance: advance,
        }
    }

    pub fn font(line_height: u16, glyphs: Vec<Glyph>, kerning: Vec<KerningPair>) -> Font {
        let symbols = SymbolTable::build(glyphs.iter().copied(), capacity_for(glyphs.len()), 1)
            .unwrap();
        let kerning = if kerning.is_empty() {
            KerningTable::empty()
        } else {
            KerningTable::build(kerning.iter().copied(), capacity_for(kerning.len()), 31).unwrap()
        };
        Font::new(symbols, kerning, line_height)
    }

    /// "a", "b" and " ", advance 10, line height 20, atlas 0
    pub fn fixed_font() -> Font {
        font(
            20,
            vec![glyph('a', 0, 10), glyph('b', 0, 10), glyph(' ', 0, 10)],
            vec![],
        )
    }

    /// "A" and "V" (offset 1, 2), advance 10, line height 12, "AV" kerns -3
    pub fn kerned_font() -> Font {
        let v = Glyph {
            x_offset: 1,
            y_offset: 2,
            ..glyph('V', 0, 10)
        };
        font(
            12,
            vec![glyph('A', 0, 10), v],
            vec![KerningPair::new('A' as u16, 'V' as u16, -3)],
        )
    }

    /// "a" and " " on atlas 0, "c" on atlas 2, "e" on atlas 5
    pub fn multi_atlas_font() -> Font {
        font(
            20,
            vec![
                glyph('a', 0, 10),
                glyph(' ', 0, 10),
                glyph('c', 2, 10),
                glyph('e', 5, 10),
            ],
            vec![],
        )
    }
}
