use serde::{Deserialize, Serialize};

/// A nucleotide base.
///
/// Only uppercase `A`, `T`, `G` and `C` are recognised; anything else in a
/// sequence (lowercase, gaps, ambiguity codes) has no `Base` and never counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    T,
    G,
    C,
}

impl Base {
    /// All bases, in the order substitution groups are reported.
    pub const ALL: [Base; 4] = [Base::A, Base::T, Base::G, Base::C];

    /// Decode a single ASCII byte.
    #[must_use]
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'T' => Some(Self::T),
            b'G' => Some(Self::G),
            b'C' => Some(Self::C),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::G => 'G',
            Self::C => 'C',
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered (pattern, mismatch) pair of distinct bases.
///
/// The pattern base is looked for in the non-reference sequences, the mismatch
/// base in the comparison sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionPair {
    pattern: Base,
    mismatch: Base,
}

/// The twelve substitution pairs in reporting order.
pub const SUBSTITUTION_ORDER: [SubstitutionPair; 12] = [
    SubstitutionPair::of(Base::A, Base::T),
    SubstitutionPair::of(Base::A, Base::G),
    SubstitutionPair::of(Base::A, Base::C),
    SubstitutionPair::of(Base::T, Base::G),
    SubstitutionPair::of(Base::T, Base::C),
    SubstitutionPair::of(Base::T, Base::A),
    SubstitutionPair::of(Base::G, Base::C),
    SubstitutionPair::of(Base::G, Base::A),
    SubstitutionPair::of(Base::G, Base::T),
    SubstitutionPair::of(Base::C, Base::A),
    SubstitutionPair::of(Base::C, Base::T),
    SubstitutionPair::of(Base::C, Base::G),
];

impl SubstitutionPair {
    const fn of(pattern: Base, mismatch: Base) -> Self {
        Self { pattern, mismatch }
    }

    /// Build a pair, or `None` for an identity pair such as (A, A).
    #[must_use]
    pub fn new(pattern: Base, mismatch: Base) -> Option<Self> {
        (pattern != mismatch).then_some(Self { pattern, mismatch })
    }

    #[must_use]
    pub fn pattern(self) -> Base {
        self.pattern
    }

    #[must_use]
    pub fn mismatch(self) -> Base {
        self.mismatch
    }

    /// Position of this pair in [`SUBSTITUTION_ORDER`].
    #[must_use]
    pub fn index(self) -> usize {
        use Base::{A, C, G, T};
        match (self.pattern, self.mismatch) {
            (A, T) => 0,
            (A, G) => 1,
            (A, C) => 2,
            (T, G) => 3,
            (T, C) => 4,
            (T, A) => 5,
            (G, C) => 6,
            (G, A) => 7,
            (G, T) => 8,
            (C, A) => 9,
            (C, T) => 10,
            (C, G) => 11,
            // Identity pairs cannot be built through `new`
            (A, A) | (T, T) | (G, G) | (C, C) => unreachable!("identity substitution pair"),
        }
    }

    /// Two-letter label, e.g. `"AT"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", self.pattern, self.mismatch)
    }
}

impl std::fmt::Display for SubstitutionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.pattern, self.mismatch)
    }
}

/// Which sequence the non-reference records are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonSource {
    /// Bases of the record whose identifier equals the reference token
    #[default]
    Record,
    /// The reference token itself, read as a sequence of bases
    Token,
}

impl std::fmt::Display for ComparisonSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record => write!(f, "record"),
            Self::Token => write!(f, "token"),
        }
    }
}

/// Which non-reference records each pattern group iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopBounds {
    /// Every pattern group covers every non-reference record
    #[default]
    Symmetric,
    /// T and C pattern groups skip the last non-reference record
    Legacy,
}

impl LoopBounds {
    /// Number of leading records the group for `pattern` covers.
    #[must_use]
    pub fn records_for(self, pattern: Base, record_count: usize) -> usize {
        match (self, pattern) {
            (Self::Legacy, Base::T | Base::C) => record_count.saturating_sub(1),
            _ => record_count,
        }
    }
}

impl std::fmt::Display for LoopBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symmetric => write!(f, "symmetric"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_ascii() {
        assert_eq!(Base::from_ascii(b'A'), Some(Base::A));
        assert_eq!(Base::from_ascii(b'C'), Some(Base::C));
        assert_eq!(Base::from_ascii(b'a'), None);
        assert_eq!(Base::from_ascii(b'N'), None);
        assert_eq!(Base::from_ascii(b'-'), None);
    }

    #[test]
    fn test_identity_pair_rejected() {
        for base in Base::ALL {
            assert!(SubstitutionPair::new(base, base).is_none());
        }
    }

    #[test]
    fn test_order_indices_match_positions() {
        for (i, pair) in SUBSTITUTION_ORDER.iter().enumerate() {
            assert_eq!(pair.index(), i, "{pair}");
            assert_eq!(SubstitutionPair::new(pair.pattern, pair.mismatch), Some(*pair));
        }
        assert_eq!(SUBSTITUTION_ORDER[0].label(), "AT");
        assert_eq!(SUBSTITUTION_ORDER[11].label(), "CG");
    }

    #[test]
    fn test_legacy_bounds_skip_last_for_t_and_c() {
        assert_eq!(LoopBounds::Legacy.records_for(Base::A, 3), 3);
        assert_eq!(LoopBounds::Legacy.records_for(Base::G, 3), 3);
        assert_eq!(LoopBounds::Legacy.records_for(Base::T, 3), 2);
        assert_eq!(LoopBounds::Legacy.records_for(Base::C, 3), 2);
        assert_eq!(LoopBounds::Legacy.records_for(Base::T, 0), 0);
        assert_eq!(LoopBounds::Symmetric.records_for(Base::T, 3), 3);
    }
}
