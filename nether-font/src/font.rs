//! Font asset: symbol table, kerning table and line height
//!
//! A [`Font`] is immutable once built. [`FontDescriptor`] is the serializable
//! form handed over by the asset pipeline (JSON/TOML while authoring, bitcode
//! when packed).

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FontError;
use crate::glyph::{Codepoint, Glyph, KerningPair};
use crate::tables::{
    DEFAULT_KERNING_MULTIPLIER, DEFAULT_SYMBOL_MULTIPLIER, KerningTable, SymbolTable, capacity_for,
};

/// Bitmap font ready for layout
#[derive(Debug, Clone)]
pub struct Font {
    symbols: SymbolTable,
    kerning: KerningTable,
    line_height: u16,
}

impl Font {
    pub fn new(symbols: SymbolTable, kerning: KerningTable, line_height: u16) -> Self {
        Self {
            symbols,
            kerning,
            line_height,
        }
    }

    /// Find the glyph for a codepoint
    #[inline]
    pub fn glyph(&self, codepoint: Codepoint) -> Option<&Glyph> {
        self.symbols.lookup(codepoint)
    }

    /// Pen adjustment between two adjacent codepoints
    #[inline]
    pub fn kerning(&self, prev: Codepoint, curr: Codepoint) -> i32 {
        i32::from(self.kerning.lookup(prev, curr))
    }

    /// Vertical distance between lines in pixels
    #[inline]
    pub fn line_height(&self) -> u16 {
        self.line_height
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn kerning_table(&self) -> &KerningTable {
        &self.kerning
    }
}

/// Serializable font description
///
/// Capacities default to the smallest power of two with a load factor of at
/// most one half; multipliers default to the crate constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct FontDescriptor {
    /// Line height in pixels
    pub line_height: u16,

    /// Glyph metrics
    #[serde(default)]
    pub glyphs: Vec<Glyph>,

    /// Kerning pairs
    #[serde(default)]
    pub kerning: Vec<KerningPair>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_multiplier: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerning_capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerning_multiplier: Option<u32>,
}

impl FontDescriptor {
    /// Build the lookup tables
    pub fn build(&self) -> Result<Font, FontError> {
        let symbol_capacity = self
            .symbol_capacity
            .map_or_else(|| capacity_for(self.glyphs.len()), |c| c as usize);
        let symbols = SymbolTable::build(
            self.glyphs.iter().copied(),
            symbol_capacity,
            self.symbol_multiplier.unwrap_or(DEFAULT_SYMBOL_MULTIPLIER),
        )?;

        let kerning = if self.kerning.is_empty() && self.kerning_capacity.is_none() {
            KerningTable::empty()
        } else {
            let kerning_capacity = self
                .kerning_capacity
                .map_or_else(|| capacity_for(self.kerning.len()), |c| c as usize);
            KerningTable::build(
                self.kerning.iter().copied(),
                kerning_capacity,
                self.kerning_multiplier.unwrap_or(DEFAULT_KERNING_MULTIPLIER),
            )?
        };

        debug!(
            "Font built: {} glyphs, {} kerning pairs, line height {}",
            symbols.len(),
            kerning.len(),
            self.line_height
        );
        Ok(Font::new(symbols, kerning, self.line_height))
    }
}

impl TryFrom<&FontDescriptor> for Font {
    type Error = FontError;

    fn try_from(descriptor: &FontDescriptor) -> Result<Self, Self::Error> {
        descriptor.build()
    }
}
