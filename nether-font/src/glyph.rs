//! Glyph metrics and kerning pairs
//!
//! These are produced by the font asset pipeline and never change at layout time.
//! Both derive serde and bitcode so they can live inside font descriptors and
//! packed data.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Character code stored in font tables.
///
/// The decoder produces the full 16-bit range, but fonts only hold codepoints
/// up to [`MAX_CODEPOINT`]. Anything above it never matches a table entry.
pub type Codepoint = u16;

/// Highest codepoint a font table accepts (signed 16-bit range of the legacy format)
pub const MAX_CODEPOINT: Codepoint = 0x7FFF;

/// Glyphs with this codepoint are line-break opportunities
pub const SPACE: Codepoint = b' ' as Codepoint;

/// Ends the current line
pub const NEWLINE: Codepoint = b'\n' as Codepoint;

/// Glyph metrics within a font atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Glyph {
    /// Character this glyph draws
    pub codepoint: Codepoint,

    /// Index of the atlas texture holding the bitmap
    #[serde(default)]
    pub atlas: u8,

    /// X position in atlas (texels)
    pub x: u16,

    /// Y position in atlas (texels)
    pub y: u16,

    /// Width in atlas (texels)
    pub width: u16,

    /// Height in atlas (texels)
    pub height: u16,

    /// Horizontal render offset from the pen
    #[serde(default)]
    pub x_offset: i16,

    /// Vertical render offset from the line top
    #[serde(default)]
    pub y_offset: i16,

    /// Horizontal advance (to next glyph)
    pub x_advance: i16,
}

/// Advance adjustment applied between two adjacent glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct KerningPair {
    /// Codepoint on the left
    pub first: Codepoint,

    /// Codepoint on the right
    pub second: Codepoint,

    /// Signed pen adjustment applied before drawing `second`
    pub amount: i16,
}

impl KerningPair {
    pub const fn new(first: Codepoint, second: Codepoint, amount: i16) -> Self {
        Self {
            first,
            second,
            amount,
        }
    }
}
