//! Immediate-mode text drawing
//!
//! Emits one textured rect per mapped byte straight into a command sink with
//! no wrapping, layout buffer or atlas binding. The caller binds the atlas
//! beforehand, so this only suits single-atlas fonts.

use crate::command::{COMMANDS_PER_QUAD, CommandSink, DrawCommand, TextureRect};
use crate::font::Font;
use crate::glyph::{Codepoint, NEWLINE};
use crate::measure::single_byte_codepoints;

/// Draw `text` with its first line starting at `(x, y)`.
///
/// `'\n'` returns the pen to `x` and moves down one line.
pub fn render<R>(font: &Font, text: &[u8], x: i32, y: i32, sink: &mut impl CommandSink<R>) {
    let line_height = i32::from(font.line_height());
    let mut prev: Codepoint = 0;
    let mut pen_x = x;
    let mut pen_y = y;

    for curr in single_byte_codepoints(text) {
        if curr == NEWLINE {
            pen_x = x;
            pen_y = pen_y.saturating_add(line_height);
        } else if let Some(glyph) = font.glyph(curr) {
            pen_x = pen_x.saturating_add(font.kerning(prev, curr));
            sink.push(DrawCommand::TextureRect(TextureRect::new(
                pen_x.saturating_add(i32::from(glyph.x_offset)),
                pen_y.saturating_add(i32::from(glyph.y_offset)),
                glyph.width,
                glyph.height,
                glyph.x,
                glyph.y,
            )));
            pen_x = pen_x.saturating_add(i32::from(glyph.x_advance));
        }
        prev = curr;
    }
}

/// Display-list slots [`render`] will use for `text`
pub fn count_commands(font: &Font, text: &[u8]) -> usize {
    single_byte_codepoints(text)
        .filter(|&cp| cp != NEWLINE && font.glyph(cp).is_some())
        .count()
        * COMMANDS_PER_QUAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::slot_count;
    use crate::test_utils::{fixed_font, font, glyph, kerned_font};

    fn origins(commands: &[DrawCommand<()>]) -> Vec<(i32, i32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::TextureRect(rect) => Some(rect.origin()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_newline_returns_to_start_x() {
        let font = fixed_font();
        let mut commands: Vec<DrawCommand<()>> = Vec::new();
        render(&font, b"ab\nb", 5, 7, &mut commands);

        assert_eq!(origins(&commands), vec![(5, 7), (15, 7), (5, 27)]);
    }

    #[test]
    fn test_count_matches_emitted_slots() {
        let font = fixed_font();
        for text in [&b"aa bb"[..], b"", b"\n\n", b"a?b\nzz a", b"\xC3\xA9 ab"] {
            let mut commands: Vec<DrawCommand<()>> = Vec::new();
            render(&font, text, 0, 0, &mut commands);

            assert_eq!(count_commands(&font, text), slot_count(&commands));
            assert!(commands.iter().all(|c| matches!(c, DrawCommand::TextureRect(_))));
        }
    }

    #[test]
    fn test_pen_clamps_on_long_newline_runs() {
        let tall = font(u16::MAX, vec![glyph('a', 0, 10)], vec![]);
        let mut text = vec![b'\n'; 40_000];
        text.push(b'a');

        let mut commands: Vec<DrawCommand<()>> = Vec::new();
        render(&tall, &text, 0, 0, &mut commands);

        assert_eq!(commands.len(), 1);
        let DrawCommand::TextureRect(rect) = &commands[0] else {
            panic!("expected a rect, got {:?}", commands[0]);
        };
        assert_eq!((rect.x0, rect.x1), (0, 32));
        assert_eq!((rect.y0, rect.y1), (i32::MAX, i32::MAX));
    }

    #[test]
    fn test_render_applies_kerning_and_offsets() {
        let font = kerned_font();
        let mut commands: Vec<DrawCommand<()>> = Vec::new();
        render(&font, b"AV", 0, 0, &mut commands);

        // V has offsets (1, 2) and kerns -3 after A
        assert_eq!(origins(&commands), vec![(0, 0), (8, 2)]);
    }
}
