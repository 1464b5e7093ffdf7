//! Set of atlas indices referenced by a layout

const WORDS: usize = 4;

/// Bit set with one flag per `u8` atlas index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AtlasSet {
    bits: [u64; WORDS],
}

impl AtlasSet {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn insert(&mut self, atlas: u8) {
        self.bits[usize::from(atlas) / 64] |= 1u64 << (atlas % 64);
    }

    #[inline]
    pub fn contains(&self, atlas: u8) -> bool {
        self.bits[usize::from(atlas) / 64] & (1u64 << (atlas % 64)) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    /// Highest index in the set
    pub fn max(&self) -> Option<u8> {
        self.iter().last()
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().enumerate().flat_map(|(word, &bits)| {
            (0..64u32)
                .filter(move |bit| bits & (1u64 << bit) != 0)
                .map(move |bit| (word * 64) as u8 + bit as u8)
        })
    }
}

impl FromIterator<u8> for AtlasSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for atlas in iter {
            set.insert(atlas);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_ascending() {
        let set: AtlasSet = [200, 5, 0, 63, 64, 2, 5, 255].into_iter().collect();

        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 5, 63, 64, 200, 255]);
        assert_eq!(set.len(), 7);
        assert_eq!(set.max(), Some(255));
        assert!(set.contains(64));
        assert!(!set.contains(65));
    }

    #[test]
    fn test_clear() {
        let mut set = AtlasSet::new();
        assert!(set.is_empty());
        assert_eq!(set.max(), None);

        set.insert(31);
        assert!(!set.is_empty());
        set.clear();
        assert!(set.is_empty());
    }
}
