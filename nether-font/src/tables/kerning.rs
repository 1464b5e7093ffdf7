//! Ordered codepoint pair -> advance adjustment table

use tracing::debug;

use super::{Vacancy, capacity_mask, find_vacancy, kerning_hash, probe_sequence};
use crate::error::FontError;
use crate::glyph::{Codepoint, KerningPair, MAX_CODEPOINT};

/// Open-addressing map from `(first, second)` to a signed advance adjustment
///
/// A pair stored with amount 0 and a missing pair both resolve to 0. The
/// zero-amount pair still occupies its slot, so it never hides entries that
/// probed past it.
#[derive(Debug, Clone)]
pub struct KerningTable {
    slots: Vec<Option<KerningPair>>,
    multiplier: u32,
    mask: u32,
    max_collisions: u32,
}

impl KerningTable {
    /// Table with a single empty slot; every lookup returns 0
    pub fn empty() -> Self {
        Self {
            slots: vec![None],
            multiplier: 0,
            mask: 0,
            max_collisions: 0,
        }
    }

    /// Build a table by inserting `pairs` into `capacity` slots
    pub fn build(
        pairs: impl IntoIterator<Item = KerningPair>,
        capacity: usize,
        multiplier: u32,
    ) -> Result<Self, FontError> {
        let mask = capacity_mask(capacity)?;
        let mut slots = vec![None; capacity];
        let mut max_collisions = 0;

        for pair in pairs {
            check_range(&pair)?;

            let start = kerning_hash(pair.first, pair.second, multiplier, mask);
            let same = |p: &KerningPair| p.first == pair.first && p.second == pair.second;
            match find_vacancy(&slots, start, mask, same) {
                Vacancy::Free { slot, distance } => {
                    slots[slot] = Some(pair);
                    max_collisions = max_collisions.max(distance);
                }
                Vacancy::Duplicate => {
                    return Err(FontError::DuplicateKerningPair {
                        first: pair.first,
                        second: pair.second,
                    });
                }
                Vacancy::Full => {
                    return Err(FontError::TableFull {
                        table: "kerning",
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
            "Built kerning table: {} pairs in {} slots, max collisions {}",
            table.len(),
            capacity,
            max_collisions
        );
        Ok(table)
    }

    /// Adopt a prebuilt slot array as handed over by an asset loader
    pub fn from_slots(
        slots: Vec<Option<KerningPair>>,
        multiplier: u32,
        max_collisions: u32,
    ) -> Result<Self, FontError> {
        let mask = capacity_mask(slots.len())?;
        for pair in slots.iter().flatten() {
            check_range(pair)?;
        }

        Ok(Self {
            slots,
            multiplier,
            mask,
            max_collisions,
        })
    }

    /// Adjustment between `first` and `second`, 0 when no pair is stored
    pub fn lookup(&self, first: Codepoint, second: Codepoint) -> i16 {
        let start = kerning_hash(first, second, self.multiplier, self.mask);

        for slot in probe_sequence(start, self.mask, self.max_collisions) {
            match &self.slots[slot] {
                None => return 0,
                Some(pair) if pair.first == first && pair.second == second => return pair.amount,
                Some(_) => {}
            }
        }

        0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn max_collisions(&self) -> u32 {
        self.max_collisions
    }
}

fn check_range(pair: &KerningPair) -> Result<(), FontError> {
    match [pair.first, pair.second].into_iter().find(|&cp| cp > MAX_CODEPOINT) {
        Some(codepoint) => Err(FontError::CodepointOutOfRange { codepoint }),
        None => Ok(()),
    }
}

impl Default for KerningTable {
    fn default() -> Self {
        Self::empty()
    }
}
