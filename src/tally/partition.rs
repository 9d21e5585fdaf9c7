use tracing::warn;

use crate::core::record::Record;

/// Records split by whether their identifier equals the reference token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedSet<'a> {
    pub reference_records: Vec<&'a Record>,
    pub other_records: Vec<&'a Record>,
}

impl<'a> PartitionedSet<'a> {
    /// Split `records` on exact, case-sensitive identifier equality with `reference`.
    ///
    /// Both halves keep input order.
    #[must_use]
    pub fn split(records: &'a [Record], reference: &str) -> Self {
        let (reference_records, other_records): (Vec<_>, Vec<_>) =
            records.iter().partition(|r| r.identifier == reference);

        if reference_records.len() > 1 {
            warn!(
                reference,
                matches = reference_records.len(),
                "reference identifier matches more than one record; using the first"
            );
        }

        Self {
            reference_records,
            other_records,
        }
    }

    /// Bases of the first record matching the reference identifier
    #[must_use]
    pub fn reference_bases(&self) -> Option<&'a str> {
        self.reference_records.first().map(|r| r.bases.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reference_records.len() + self.other_records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
