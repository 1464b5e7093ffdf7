//! Draw commands handed to the rasterizer
//!
//! The rasterizer is opaque to this crate; text only needs three primitives
//! from it: bind an atlas, set a tint and draw a textured rectangle.
//!
//! Rectangles use the legacy fixed-point encoding:
//! - Destination coordinates at 4x subpixel precision ([`SUBPIXEL_SCALE`])
//! - Source coordinates at 32x texel precision ([`TEXEL_SCALE`])
//! - A constant sample step ([`SAMPLE_STEP`]) regardless of glyph size

use serde::{Deserialize, Serialize};

/// Destination fixed-point scale (10.2)
pub const SUBPIXEL_SCALE: i32 = 4;

/// Source fixed-point scale (10.5)
pub const TEXEL_SCALE: i32 = 32;

/// Texel step per destination pixel in both axes (1.0 in 5.10)
pub const SAMPLE_STEP: u16 = 0x400;

/// Tile descriptor every glyph samples through
pub const RENDER_TILE: u8 = 0;

/// Display-list slots occupied by one textured rectangle
pub const COMMANDS_PER_QUAD: usize = 3;

/// RGBA8 tint colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a 0xRRGGBBAA colour
    pub const fn from_rgba32(color: u32) -> Self {
        Self::new(
            (color >> 24) as u8,
            (color >> 16) as u8,
            (color >> 8) as u8,
            color as u8,
        )
    }

    pub const fn to_rgba32(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Textured rectangle in rasterizer fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRect {
    /// Top-left corner (4x subpixel)
    pub x0: i32,
    pub y0: i32,
    /// Bottom-right corner (4x subpixel)
    pub x1: i32,
    pub y1: i32,
    pub tile: u8,
    /// Source origin (32x texel)
    pub s: i32,
    pub t: i32,
    pub dsdx: u16,
    pub dtdy: u16,
}

impl TextureRect {
    /// Rectangle of `width` x `height` pixels at `(x, y)` sampling from
    /// `(source_x, source_y)` in the atlas.
    ///
    /// Corners outside the fixed-point range clamp to its edges.
    pub fn new(x: i32, y: i32, width: u16, height: u16, source_x: u16, source_y: u16) -> Self {
        Self {
            x0: x.saturating_mul(SUBPIXEL_SCALE),
            y0: y.saturating_mul(SUBPIXEL_SCALE),
            x1: x.saturating_add(i32::from(width)).saturating_mul(SUBPIXEL_SCALE),
            y1: y.saturating_add(i32::from(height)).saturating_mul(SUBPIXEL_SCALE),
            tile: RENDER_TILE,
            s: i32::from(source_x) * TEXEL_SCALE,
            t: i32::from(source_y) * TEXEL_SCALE,
            dsdx: SAMPLE_STEP,
            dtdy: SAMPLE_STEP,
        }
    }

    /// Destination origin in whole pixels
    pub fn origin(&self) -> (i32, i32) {
        (self.x0 / SUBPIXEL_SCALE, self.y0 / SUBPIXEL_SCALE)
    }
}

/// One rasterizer instruction
///
/// `R` is whatever the host uses to bind an atlas texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand<R> {
    BindAtlas(R),
    SetTint(Rgba),
    TextureRect(TextureRect),
}

impl<R> DrawCommand<R> {
    /// Display-list slots this command occupies
    pub fn slots(&self) -> usize {
        match self {
            Self::TextureRect(_) => COMMANDS_PER_QUAD,
            Self::BindAtlas(_) | Self::SetTint(_) => 1,
        }
    }
}

/// Append-only destination for draw commands
pub trait CommandSink<R> {
    fn push(&mut self, command: DrawCommand<R>);
}

impl<R> CommandSink<R> for Vec<DrawCommand<R>> {
    fn push(&mut self, command: DrawCommand<R>) {
        Vec::push(self, command);
    }
}

/// Total display-list slots used by `commands`
pub fn slot_count<R>(commands: &[DrawCommand<R>]) -> usize {
    commands.iter().map(DrawCommand::slots).sum()
}
