//! Open-addressing font tables
//!
//! Symbols and kerning pairs live in fixed-capacity slot arrays built once by
//! the asset pipeline and read many times during layout.
//!
//! # Probing
//!
//! - Capacity is a power of two; the hash is masked with `capacity - 1`
//! - Collisions probe linearly (`index`, `index + 1`, ...) wrapping at the end
//! - Every lookup examines at most `max_collisions + 1` slots
//! - An empty slot ends the search
//!
//! Slots carry an explicit occupied/empty tag (`Option`), so an entry whose
//! payload happens to be zero is still an entry.

mod kerning;
mod symbol;


pub use kerning::KerningTable;
pub use symbol::SymbolTable;

use crate::error::FontError;
use crate::glyph::Codepoint;

/// Largest table capacity accepted (one slot per 16-bit codepoint)
pub const MAX_TABLE_CAPACITY: usize = 1 << 16;

/// Default symbol hash multiplier (odd, so masked products stay a bijection)
pub const DEFAULT_SYMBOL_MULTIPLIER: u32 = 0x9E37_79B1;

/// Default kerning hash multiplier (odd)
pub const DEFAULT_KERNING_MULTIPLIER: u32 = 0x85EB_CA6B;

#[inline]
pub(crate) fn symbol_hash(codepoint: Codepoint, multiplier: u32, mask: u32) -> u32 {
    u32::from(codepoint).wrapping_mul(multiplier) & mask
}

#[inline]
pub(crate) fn kerning_hash(first: Codepoint, second: Codepoint, multiplier: u32, mask: u32) -> u32 {
    u32::from(first)
        .wrapping_mul(multiplier)
        .wrapping_add(u32::from(second))
        & mask
}

/// Slot indices visited by a lookup starting at `start`.
///
/// Yields `max_collisions + 1` indices (never more than the table holds),
/// wrapped to the table with `mask`.
#[inline]
pub(crate) fn probe_sequence(start: u32, mask: u32, max_collisions: u32) -> impl Iterator<Item = usize> {
    let steps = max_collisions.min(mask);
    (0..=steps).map(move |step| (start.wrapping_add(step) & mask) as usize)
}

/// Validate a slot array length and return its mask
pub(crate) fn capacity_mask(capacity: usize) -> Result<u32, FontError> {
    if capacity == 0 || capacity > MAX_TABLE_CAPACITY || !capacity.is_power_of_two() {
        return Err(FontError::InvalidCapacity { capacity });
    }
    Ok((capacity - 1) as u32)
}

/// Outcome of searching for an insertion slot
pub(crate) enum Vacancy {
    /// Free slot found `distance` steps past the home slot
    Free { slot: usize, distance: u32 },
    /// An entry with the same key already exists
    Duplicate,
    /// Every slot is taken
    Full,
}

/// Find where a new entry hashing to `start` goes, scanning the whole table.
pub(crate) fn find_vacancy<T>(
    slots: &[Option<T>],
    start: u32,
    mask: u32,
    same_key: impl Fn(&T) -> bool,
) -> Vacancy {
    for distance in 0..=mask {
        let slot = (start.wrapping_add(distance) & mask) as usize;
        match &slots[slot] {
            None => return Vacancy::Free { slot, distance },
            Some(existing) if same_key(existing) => return Vacancy::Duplicate,
            Some(_) => {}
        }
    }
    Vacancy::Full
}

/// Smallest power-of-two capacity keeping the load factor at or below one half
pub fn capacity_for(entries: usize) -> usize {
    entries
        .saturating_mul(2)
        .max(1)
        .checked_next_power_of_two()
        .map_or(MAX_TABLE_CAPACITY, |capacity| capacity.min(MAX_TABLE_CAPACITY))
}
