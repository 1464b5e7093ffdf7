//! Codepoint -> glyph table

use tracing::debug;

use super::{Vacancy, capacity_mask, find_vacancy, probe_sequence, symbol_hash};
use crate::error::FontError;
use crate::glyph::{Codepoint, Glyph, MAX_CODEPOINT};

/// Open-addressing map from codepoint to [`Glyph`]
///
/// Read-only after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    slots: Vec<Option<Glyph>>,
    multiplier: u32,
    mask: u32,
    max_collisions: u32,
}

impl SymbolTable {
    /// Build a table by inserting `glyphs` into `capacity` slots.
    ///
    /// `max_collisions` becomes the longest probe distance any insert needed,
    /// so every inserted glyph is reachable by [`lookup`](Self::lookup).
    pub fn build(
        glyphs: impl IntoIterator<Item = Glyph>,
        capacity: usize,
        multiplier: u32,
    ) -> Result<Self, FontError> {
        let mask = capacity_mask(capacity)?;
        let mut slots = vec![None; capacity];
        let mut max_collisions = 0;

        for glyph in glyphs {
            if glyph.codepoint > MAX_CODEPOINT {
                return Err(FontError::CodepointOutOfRange {
                    codepoint: glyph.codepoint,
                });
            }

            let start = symbol_hash(glyph.codepoint, multiplier, mask);
            match find_vacancy(&slots, start, mask, |g: &Glyph| g.codepoint == glyph.codepoint) {
                Vacancy::Free { slot, distance } => {
                    slots[slot] = Some(glyph);
                    max_collisions = max_collisions.max(distance);
                }
                Vacancy::Duplicate => return Err(FontError::DuplicateGlyph(glyph.codepoint)),
                Vacancy::Full => {
                    return Err(FontError::TableFull {
                        table: "symbol",
                        capacity,
                    });
                }
            }
        }

        let table = Self {
            slots,
            multiplier,
            mask,
            max_collisions,
        };
        debug!(
            "Built symbol table: {} glyphs in {} slots, max collisions {}",
            table.len(),
            capacity,
            max_collisions
        );
        Ok(table)
    }

    /// Adopt a prebuilt slot array as handed over by an asset loader.
    ///
    /// Entries are not re-hashed; anything placed further than
    /// `max_collisions` from its home slot is simply unreachable.
    pub fn from_slots(
        slots: Vec<Option<Glyph>>,
        multiplier: u32,
        max_collisions: u32,
    ) -> Result<Self, FontError> {
        let mask = capacity_mask(slots.len())?;
        if let Some(glyph) = slots.iter().flatten().find(|g| g.codepoint > MAX_CODEPOINT) {
            return Err(FontError::CodepointOutOfRange {
                codepoint: glyph.codepoint,
            });
        }

        Ok(Self {
            slots,
            multiplier,
            mask,
            max_collisions,
        })
    }

    /// Find the glyph for `codepoint`
    pub fn lookup(&self, codepoint: Codepoint) -> Option<&Glyph> {
        self.probe(codepoint).0.and_then(|slot| self.slots[slot].as_ref())
    }

    /// Number of slots a lookup of `codepoint` examines
    pub fn probe_len(&self, codepoint: Codepoint) -> usize {
        self.probe(codepoint).1
    }

    fn probe(&self, codepoint: Codepoint) -> (Option<usize>, usize) {
        let start = symbol_hash(codepoint, self.multiplier, self.mask);
        let mut examined = 0;

        for slot in probe_sequence(start, self.mask, self.max_collisions) {
            examined += 1;
            match &self.slots[slot] {
                None => return (None, examined),
                Some(glyph) if glyph.codepoint == codepoint => return (Some(slot), examined),
                Some(_) => {}
            }
        }

        (None, examined)
    }

    /// Total slot count (a power of two)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored glyphs
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn max_collisions(&self) -> u32 {
        self.max_collisions
    }

    /// Iterate stored glyphs in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.slots.iter().flatten()
    }
}
