//! Non-wrapping text measurement
//!
//! Works on raw bytes: each byte is looked up as a codepoint on its own, so
//! multi-byte UTF-8 is measured per byte. Use
//! [`TextLayout`](crate::layout::TextLayout) for UTF-8 text.

use crate::font::Font;
use crate::glyph::{Codepoint, NEWLINE};

/// Width and height of a block of text in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

/// Single-byte iterator shared by the measurer and the immediate renderer.
///
/// Stops at the first `0x00` byte.
pub(crate) fn single_byte_codepoints(text: &[u8]) -> impl Iterator<Item = Codepoint> + '_ {
    text.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| Codepoint::from(b))
}

/// Measure `text` without wrapping.
///
/// Width is the widest line, height is the line count times the line height.
/// Unmapped bytes take no space but still count as the previous character for
/// kerning.
pub fn measure(font: &Font, text: &[u8]) -> TextSize {
    let line_height = i32::from(font.line_height());
    let mut prev: Codepoint = 0;
    let mut x: i32 = 0;
    let mut y: i32 = 0;
    let mut width = 0;

    for curr in single_byte_codepoints(text) {
        if curr == NEWLINE {
            width = width.max(x);
            x = 0;
            y = y.saturating_add(line_height);
        } else if let Some(glyph) = font.glyph(curr) {
            x = x
                .saturating_add(font.kerning(prev, curr))
                .saturating_add(i32::from(glyph.x_advance));
        }
        prev = curr;
    }

    TextSize {
        width: width.max(x),
        height: y.saturating_add(line_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_font, font, glyph, kerned_font};

    #[test]
    fn test_measure_single_line() {
        let font = fixed_font();
        assert_eq!(
            measure(&font, b"ab a"),
            TextSize {
                width: 40,
                height: 20
            }
        );
    }

    #[test]
    fn test_measure_takes_widest_line() {
        let font = fixed_font();
        let size = measure(&font, b"a\nbbb\nbb");
        assert_eq!(size.width, 30);
        assert_eq!(size.height, 60);
    }

    #[test]
    fn test_unmapped_bytes_take_no_space() {
        let font = fixed_font();
        assert_eq!(measure(&font, b"a?z!b").width, 20);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let font = fixed_font();
        assert_eq!(
            measure(&font, b""),
            TextSize {
                width: 0,
                height: 20
            }
        );
    }

    #[test]
    fn test_stops_at_nul() {
        let font = fixed_font();
        assert_eq!(measure(&font, b"aa\0aaaa").width, 20);
    }

    #[test]
    fn test_height_saturates_on_long_newline_runs() {
        let tall = font(u16::MAX, vec![glyph('a', 0, 10)], vec![]);
        let mut text = vec![b'\n'; 40_000];
        text.push(b'a');

        assert_eq!(
            measure(&tall, &text),
            TextSize {
                width: 10,
                height: i32::MAX
            }
        );
    }

    #[test]
    fn test_kerning_uses_previous_byte() {
        let font = kerned_font();
        // A V kerns by -3
        assert_eq!(measure(&font, b"AV").width, 17);
        // An unmapped byte between them breaks the pair
        assert_eq!(measure(&font, b"A#V").width, 20);
        // Newline becomes prev too
        assert_eq!(measure(&font, b"A\nV").width, 10);
    }
}
