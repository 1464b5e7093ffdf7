//! Word-wrapping text layout
//!
//! [`TextLayout`] is reusable scratch storage: each [`layout`](TextLayout::layout)
//! call overwrites the previous result. Glyphs are stored in text order, not
//! line order, together with the overall size and the set of atlases used.
//!
//! # Wrapping
//!
//! After each glyph is placed the pen is checked against the maximum width.
//! On overflow the layout looks back along the current line (excluding the
//! glyph just placed and the first glyph of the line) for the nearest space:
//!
//! - Space found: it and every glyph after it move to a new line, shifted
//!   left so the space starts at x = 0.
//! - No space: the overflowing glyph stays where it is and the next glyph
//!   starts a new line.

mod atlas_set;


pub use atlas_set::AtlasSet;

use tracing::{debug, trace};

use crate::font::Font;
use crate::glyph::{Codepoint, NEWLINE, SPACE};
use crate::measure::TextSize;
use crate::utf8::Utf8Decoder;

/// Glyph buffer size used by [`TextLayout::new`]
pub const DEFAULT_CAPACITY: usize = 256;

/// Glyph position produced by layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    /// Position relative to the layout origin
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
    /// Line may break here (the glyph is a space)
    pub can_break: bool,
    /// Source position in the atlas (texels)
    pub source_x: u16,
    pub source_y: u16,
    pub atlas: u8,
}

/// Whether a layout consumed all of its input
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
    Complete,
    /// The glyph buffer filled up; input after `consumed` bytes was dropped
    Truncated { consumed: usize },
}

impl LayoutStatus {
    pub fn is_truncated(self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Bounded sequence of placed glyphs plus aggregate metrics
#[derive(Debug, Clone)]
pub struct TextLayout {
    glyphs: Vec<PlacedGlyph>,
    capacity: usize,
    width: i32,
    height: i32,
    atlases: AtlasSet,
}

impl TextLayout {
    /// Layout holding [`DEFAULT_CAPACITY`] glyphs
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Layout holding at most `capacity` glyphs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: Vec::with_capacity(capacity),
            capacity,
            width: 0,
            height: 0,
            atlases: AtlasSet::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Placed glyphs in text order
    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> TextSize {
        TextSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Atlases referenced by at least one placed glyph
    pub fn atlases(&self) -> &AtlasSet {
        &self.atlases
    }

    /// Placed glyphs sampling from `atlas`, in text order
    pub fn glyphs_in_atlas(&self, atlas: u8) -> impl Iterator<Item = &PlacedGlyph> + '_ {
        self.glyphs.iter().filter(move |g| g.atlas == atlas)
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.width = 0;
        self.height = 0;
        self.atlases.clear();
    }

    /// Lay out UTF-8 `text`, wrapping lines wider than `max_width`.
    ///
    /// Replaces any previous result. Stops early once the glyph buffer is
    /// full and reports how much input was consumed.
    pub fn layout(&mut self, font: &Font, text: &[u8], max_width: i32) -> LayoutStatus {
        self.clear();

        let line_height = i32::from(font.line_height());
        let mut decoder = Utf8Decoder::new(text);
        let mut curr: Codepoint = 0;
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut widest = 0;
        // First glyph of the current line
        let mut line_start = 0;

        while self.glyphs.len() < self.capacity {
            let Some(codepoint) = decoder.next() else {
                break;
            };
            let prev = std::mem::replace(&mut curr, codepoint);

            if curr == NEWLINE {
                widest = widest.max(x);
                x = 0;
                y = y.saturating_add(line_height);
                line_start = self.glyphs.len();
                continue;
            }

            let Some(glyph) = font.glyph(curr) else {
                continue;
            };

            x = x.saturating_add(font.kerning(prev, curr));

            let placed = self.glyphs.len();
            self.glyphs.push(PlacedGlyph {
                x: x.saturating_add(i32::from(glyph.x_offset)),
                y: y.saturating_add(i32::from(glyph.y_offset)),
                width: glyph.width,
                height: glyph.height,
                can_break: curr == SPACE,
                source_x: glyph.x,
                source_y: glyph.y,
                atlas: glyph.atlas,
            });
            self.atlases.insert(glyph.atlas);
            x = x.saturating_add(i32::from(glyph.x_advance));

            if x <= max_width {
                continue;
            }

            match self.find_break(line_start, placed) {
                Some(at) => {
                    let shift = self.glyphs[at].x;
                    widest = widest.max(shift);
                    for moved in &mut self.glyphs[at..] {
                        moved.x = moved.x.saturating_sub(shift);
                        moved.y = moved.y.saturating_add(line_height);
                    }
                    x = x.saturating_sub(shift);
                    line_start = at;
                    trace!("Wrapped {} glyphs at space {}", placed + 1 - at, at);
                }
                None => {
                    widest = widest.max(x);
                    x = 0;
                    line_start = placed + 1;
                    trace!("Forced break after glyph {}", placed);
                }
            }
            y = y.saturating_add(line_height);
        }

        self.width = widest.max(x);
        self.height = y.saturating_add(line_height);

        if decoder.is_finished() {
            LayoutStatus::Complete
        } else {
            debug!(
                "Layout truncated at {} glyphs after {} of {} bytes",
                self.glyphs.len(),
                decoder.position(),
                text.len()
            );
            LayoutStatus::Truncated {
                consumed: decoder.position(),
            }
        }
    }

    /// Nearest breakable glyph strictly between the line start and `placed`
    fn find_break(&self, line_start: usize, placed: usize) -> Option<usize> {
        (line_start + 1..placed)
            .rev()
            .find(|&i| self.glyphs[i].can_break)
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new()
    }
}
