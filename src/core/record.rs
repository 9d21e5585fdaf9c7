use serde::{Deserialize, Serialize};

use crate::core::types::Base;

/// One identifier/sequence pair from an alignment file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Text of the `>` line with the marker stripped
    pub identifier: String,

    /// The single sequence line following the marker, unmodified
    pub bases: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>, bases: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            bases: bases.into(),
        }
    }

    /// Sequence length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Decoded bases; unrecognised characters yield `None`.
    pub fn decoded(&self) -> impl Iterator<Item = Option<Base>> + '_ {
        self.bases.bytes().map(Base::from_ascii)
    }
}
