//! Resynchronizing UTF-8 decoder
//!
//! Produces one 16-bit codepoint per step. Malformed input never stops
//! decoding: stray continuation bytes are skipped and anything that can't be
//! represented yields [`UNSUPPORTED_CODEPOINT`].
//!
//! Input ends at the end of the slice or at the first `0x00` byte, whichever
//! comes first.

use std::iter::FusedIterator;

use crate::glyph::Codepoint;

/// Sentinel returned for 4-byte sequences and invalid lead bytes
pub const UNSUPPORTED_CODEPOINT: Codepoint = 0;

const TERMINATOR: u8 = 0;

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Single-pass codepoint cursor over a byte string
#[derive(Debug, Clone)]
pub struct Utf8Decoder<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Utf8Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// True once no further codepoint will be produced
    pub fn is_finished(&self) -> bool {
        let rest = &self.bytes[self.cursor.min(self.bytes.len())..];
        rest.iter()
            .find(|&&b| !is_continuation(b))
            .is_none_or(|&b| b == TERMINATOR)
    }

    fn byte(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied().filter(|&b| b != TERMINATOR)
    }

    /// Check that a `len`-byte sequence at the cursor is not cut short.
    ///
    /// On truncation the cursor moves to the terminator so decoding ends.
    fn complete(&mut self, len: usize) -> bool {
        for offset in 1..len {
            if self.byte(self.cursor + offset).is_none() {
                self.cursor += offset;
                return false;
            }
        }
        true
    }

    fn continuation(&self, offset: usize) -> u16 {
        u16::from(self.bytes[self.cursor + offset] & 0x3F)
    }
}

impl Iterator for Utf8Decoder<'_> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        while self.bytes.get(self.cursor).is_some_and(|&b| is_continuation(b)) {
            self.cursor += 1;
        }

        let lead = self.byte(self.cursor)?;

        let (len, codepoint) = match lead {
            0x00..=0x7F => (1, u16::from(lead)),
            0xC0..=0xDF => {
                if !self.complete(2) {
                    return Some(UNSUPPORTED_CODEPOINT);
                }
                (2, (u16::from(lead & 0x1F) << 6) | self.continuation(1))
            }
            0xE0..=0xEF => {
                if !self.complete(3) {
                    return Some(UNSUPPORTED_CODEPOINT);
                }
                let codepoint = (u16::from(lead & 0x0F) << 12)
                    | (self.continuation(1) << 6)
                    | self.continuation(2);
                (3, codepoint)
            }
            0xF0..=0xF7 => {
                if !self.complete(4) {
                    return Some(UNSUPPORTED_CODEPOINT);
                }
                (4, UNSUPPORTED_CODEPOINT)
            }
            // 0x80..=0xBF is skipped above
            _ => (1, UNSUPPORTED_CODEPOINT),
        };

        self.cursor += len;
        Some(codepoint)
    }
}

impl FusedIterator for Utf8Decoder<'_> {}
