//! Atlas-batched draw list emission
//!
//! Each atlas used by a layout is bound exactly once, in ascending index
//! order, followed by every glyph sampling from it in text order.

use tracing::debug;

use crate::command::{CommandSink, DrawCommand, Rgba, TextureRect};
use crate::error::FontError;
use crate::layout::TextLayout;

/// Turns a [`TextLayout`] into draw commands.
///
/// `atlases[i]` is the resource bound for atlas index `i`.
#[derive(Debug, Clone)]
pub struct DrawListBuilder<'a, R> {
    atlases: &'a [R],
    offset_x: i32,
    offset_y: i32,
    tint: Option<Rgba>,
}

impl<'a, R: Clone> DrawListBuilder<'a, R> {
    pub fn new(atlases: &'a [R]) -> Self {
        Self {
            atlases,
            offset_x: 0,
            offset_y: 0,
            tint: None,
        }
    }

    /// Screen position of the layout origin
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Tint set after each atlas bind; `None` leaves the current colour alone
    pub fn tint(mut self, tint: Option<Rgba>) -> Self {
        self.tint = tint;
        self
    }

    /// Emit the draw list for `layout` into `sink`.
    ///
    /// Returns the number of commands pushed. Fails without pushing anything
    /// if the layout uses an atlas with no resource.
    pub fn build(
        &self,
        layout: &TextLayout,
        sink: &mut impl CommandSink<R>,
    ) -> Result<usize, FontError> {
        if let Some(atlas) = layout
            .atlases()
            .iter()
            .find(|&atlas| usize::from(atlas) >= self.atlases.len())
        {
            return Err(FontError::MissingAtlas {
                atlas,
                available: self.atlases.len(),
            });
        }

        let mut emitted = 0;
        for atlas in layout.atlases().iter() {
            sink.push(DrawCommand::BindAtlas(
                self.atlases[usize::from(atlas)].clone(),
            ));
            emitted += 1;

            if let Some(tint) = self.tint {
                sink.push(DrawCommand::SetTint(tint));
                emitted += 1;
            }

            for glyph in layout.glyphs_in_atlas(atlas) {
                sink.push(DrawCommand::TextureRect(TextureRect::new(
                    self.offset_x.saturating_add(glyph.x),
                    self.offset_y.saturating_add(glyph.y),
                    glyph.width,
                    glyph.height,
                    glyph.source_x,
                    glyph.source_y,
                )));
                emitted += 1;
            }
        }

        debug!(
            "Draw list: {} commands for {} glyphs across {} atlases",
            emitted,
            layout.len(),
            layout.atlases().len()
        );
        Ok(emitted)
    }
}
