//! Centralized validation and helper functions.

use crate::core::record::Record;

/// Maximum number of records allowed in a single alignment file (DOS protection)
pub const MAX_RECORDS: usize = 1_000_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(records.len()).is_some() {
///     return Err(...);
/// }
/// records.push(new_record); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Find the first record whose length differs from the first record's.
///
/// Returns the offending record together with the expected length, or None
/// when all records share one length (including the empty and single-record cases).
///
/// # Examples
///
/// ```
/// use ref_tally::core::Record;
/// use ref_tally::utils::validation::find_length_mismatch;
///
/// let a = Record::new("a", "ACGT");
/// let b = Record::new("b", "TTTT");
/// let c = Record::new("c", "TT");
/// assert!(find_length_mismatch(&[&a, &b]).is_none());
///
/// let (record, expected) = find_length_mismatch(&[&a, &c]).unwrap();
/// assert_eq!(record.identifier, "c");
/// assert_eq!(expected, 4);
/// ```
#[must_use]
pub fn find_length_mismatch<'a>(records: &[&'a Record]) -> Option<(&'a Record, usize)> {
    let expected = records.first()?.len();
    records
        .iter()
        .find(|r| r.len() != expected)
        .map(|r| (*r, expected))
}
