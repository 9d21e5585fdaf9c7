use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::types::{Base, SubstitutionPair, SUBSTITUTION_ORDER};

/// Occurrence counts for the twelve substitution pairs.
///
/// Counts only ever grow while a tally runs; the finished table is handed
/// out by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountTable {
    counts: [u64; 12],
}

impl CountTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, pair: SubstitutionPair) {
        self.counts[pair.index()] += 1;
    }

    #[must_use]
    pub fn count(&self, pair: SubstitutionPair) -> u64 {
        self.counts[pair.index()]
    }

    /// Count for (pattern, mismatch). Identity pairs are never counted and return 0.
    #[must_use]
    pub fn get(&self, pattern: Base, mismatch: Base) -> u64 {
        SubstitutionPair::new(pattern, mismatch).map_or(0, |pair| self.count(pair))
    }

    /// Pairs and counts in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (SubstitutionPair, u64)> + '_ {
        SUBSTITUTION_ORDER
            .iter()
            .map(move |pair| (*pair, self.count(*pair)))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl Serialize for CountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SUBSTITUTION_ORDER.len()))?;
        for (pair, count) in self.iter() {
            map.serialize_entry(&pair.label(), &count)?;
        }
        map.end()
    }
}
