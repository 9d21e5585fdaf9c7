//! Partitioning and substitution tallying.
//!
//! A tally runs in two steps:
//!
//! 1. [`PartitionedSet::split`] separates records whose identifier equals the
//!    reference token from all other records.
//! 2. [`counter::tally`] compares every base of every other record against every
//!    base of the comparison sequence and counts the twelve substitution pairs.
//!
//! The comparison sequence is chosen by [`ComparisonSource`]: by default the bases
//! of the matched reference record, or the reference token itself.
//!
//! ## Example
//!
//! ```rust
//! use ref_tally::core::{Base, Record};
//! use ref_tally::tally::{run, TallyOptions};
//!
//! let records = vec![Record::new("ref", "TG"), Record::new("s1", "AT")];
//! let report = run(&records, "ref", TallyOptions::default()).unwrap();
//!
//! assert_eq!(report.counts.get(Base::A, Base::T), 1);
//! assert_eq!(report.counts.get(Base::A, Base::G), 1);
//! ```

pub mod counter;
pub mod partition;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::counts::CountTable;
use crate::core::record::Record;
use crate::core::types::{ComparisonSource, LoopBounds};

pub use partition::PartitionedSet;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error(
        "Sequence length mismatch: record '{identifier}' has {found} bases, expected {expected}"
    )]
    LengthMismatch {
        identifier: String,
        expected: usize,
        found: usize,
    },

    #[error("Comparison sequence is empty")]
    EmptyComparisonSequence,
}

/// Options controlling what a tally compares against and which records it covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TallyOptions {
    pub comparison: ComparisonSource,
    pub bounds: LoopBounds,
}

/// Result of a tally together with what it was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyReport {
    pub reference: String,
    pub comparison: ComparisonSource,
    pub bounds: LoopBounds,
    pub reference_records: usize,
    pub other_records: usize,
    /// Length of the sequence the other records were compared against
    pub comparison_length: usize,
    pub counts: CountTable,
}

/// Partition `records` on `reference` and tally the non-reference records.
///
/// When counting against the reference record and no record carries the
/// reference identifier, the counts are all zero.
///
/// # Errors
///
/// Returns a [`TallyError`] if the records cannot be compared; see [`counter::tally`].
pub fn run(
    records: &[Record],
    reference: &str,
    options: TallyOptions,
) -> Result<TallyReport, TallyError> {
    let set = PartitionedSet::split(records, reference);

    info!(
        reference,
        reference_records = set.reference_records.len(),
        other_records = set.other_records.len(),
        "partitioned records"
    );

    if set.other_records.is_empty() {
        warn!("no non-reference records to compare");
    }

    let comparison = match options.comparison {
        ComparisonSource::Token => Some(reference),
        ComparisonSource::Record => {
            let bases = set.reference_bases();
            if bases.is_none() {
                warn!(reference, "no record has the reference identifier");
            }
            bases
        }
    };

    let counts = match comparison {
        Some(sequence) => counter::tally(&set.other_records, sequence, options.bounds)?,
        None => CountTable::new(),
    };

    Ok(TallyReport {
        reference: reference.to_string(),
        comparison: options.comparison,
        bounds: options.bounds,
        reference_records: set.reference_records.len(),
        other_records: set.other_records.len(),
        comparison_length: comparison.map_or(0, str::len),
        counts,
    })
}
