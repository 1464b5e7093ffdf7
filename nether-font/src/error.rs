//! Error types for font table construction, draw list building and config loading

use std::path::PathBuf;

use crate::glyph::Codepoint;

/// Errors raised while building font tables or emitting draw lists.
///
/// Lookup misses, malformed UTF-8 and layout buffer overflow are not errors;
/// they degrade to fewer glyphs being placed.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Table capacity {capacity} must be a power of two between 1 and 65536")]
    InvalidCapacity { capacity: usize },

    #[error("{table} table is full ({capacity} slots)")]
    TableFull {
        table: &'static str,
        capacity: usize,
    },

    #[error("Codepoint U+{codepoint:04X} is outside the font range (max U+7FFF)")]
    CodepointOutOfRange { codepoint: Codepoint },

    #[error("Duplicate glyph for U+{0:04X}")]
    DuplicateGlyph(Codepoint),

    #[error("Duplicate kerning pair U+{first:04X} U+{second:04X}")]
    DuplicateKerningPair { first: Codepoint, second: Codepoint },

    #[error("Layout references atlas {atlas} but only {available} atlas resources were supplied")]
    MissingAtlas { atlas: u8, available: usize },
}

/// Errors raised while loading or saving a [`TextConfig`](crate::config::TextConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse text config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize text config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
