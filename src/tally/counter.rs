//! Exhaustive substitution counting.
//!
//! Every pattern base in every covered non-reference record is paired with every
//! base of the comparison sequence, regardless of position. Cost is
//! O(records x record length x comparison length).

use tracing::debug;

use crate::core::counts::CountTable;
use crate::core::record::Record;
use crate::core::types::{Base, LoopBounds, SubstitutionPair};
use crate::tally::TallyError;
use crate::utils::validation::find_length_mismatch;

/// Count substitution pairs between `others` and `comparison`.
///
/// An empty `others` always yields an all-zero table.
///
/// # Errors
///
/// Returns `TallyError::EmptyComparisonSequence` if `comparison` is empty while
/// there are records to compare, or `TallyError::LengthMismatch` if the records
/// do not all share the first record's length.
pub fn tally(
    others: &[&Record],
    comparison: &str,
    bounds: LoopBounds,
) -> Result<CountTable, TallyError> {
    let mut table = CountTable::new();

    if others.is_empty() {
        return Ok(table);
    }

    if comparison.is_empty() {
        return Err(TallyError::EmptyComparisonSequence);
    }

    if let Some((record, expected)) = find_length_mismatch(others) {
        return Err(TallyError::LengthMismatch {
            identifier: record.identifier.clone(),
            expected,
            found: record.len(),
        });
    }

    let mismatches: Vec<Base> = comparison.bytes().filter_map(Base::from_ascii).collect();

    for pattern in Base::ALL {
        let covered = bounds.records_for(pattern, others.len());

        for record in &others[..covered] {
            for base in record.decoded().flatten().filter(|&b| b == pattern) {
                for &mismatch in &mismatches {
                    if let Some(pair) = SubstitutionPair::new(base, mismatch) {
                        table.increment(pair);
                    }
                }
            }
        }

        debug!(%pattern, records = covered, "pattern group counted");
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(others: &[Record], comparison: &str, bounds: LoopBounds) -> CountTable {
        let refs: Vec<&Record> = others.iter().collect();
        tally(&refs, comparison, bounds).unwrap()
    }

    #[test]
    fn test_single_record_example() {
        let others = vec![Record::new("s1", "AT")];
        let table = count(&others, "TG", LoopBounds::Symmetric);

        assert_eq!(table.get(Base::A, Base::T), 1);
        assert_eq!(table.get(Base::A, Base::G), 1);
        assert_eq!(table.get(Base::A, Base::C), 0);
        // T in the record against G in the comparison
        assert_eq!(table.get(Base::T, Base::G), 1);
        assert_eq!(table.get(Base::T, Base::C), 0);
        assert_eq!(table.get(Base::T, Base::A), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_counts_are_position_independent() {
        let others = vec![Record::new("s1", "AAC"), Record::new("s2", "GAA")];
        let table = count(&others, "TTG", LoopBounds::Symmetric);

        // Four A's against two T's and one G
        assert_eq!(table.get(Base::A, Base::T), 8);
        assert_eq!(table.get(Base::A, Base::G), 4);
        assert_eq!(table.get(Base::C, Base::T), 2);
        assert_eq!(table.get(Base::C, Base::G), 1);
        assert_eq!(table.get(Base::G, Base::T), 2);
        assert_eq!(table.get(Base::G, Base::A), 0);
        assert_eq!(table.total(), 17);
    }

    #[test]
    fn test_total_within_triple_loop_bound() {
        let others = vec![
            Record::new("s1", "ACGTAC"),
            Record::new("s2", "TTGACA"),
            Record::new("s3", "GGCCAT"),
        ];
        let comparison = "ATGCAGT";
        for bounds in [LoopBounds::Symmetric, LoopBounds::Legacy] {
            let table = count(&others, comparison, bounds);
            let bound = (others.len() * others[0].len() * comparison.len()) as u64;
            assert!(table.total() <= bound, "{bounds}: {} > {bound}", table.total());
        }
    }

    #[test]
    fn test_non_acgt_symbols_never_count() {
        let others = vec![Record::new("s1", "a-NT")];
        let table = count(&others, "AnG-", LoopBounds::Symmetric);

        assert_eq!(table.get(Base::T, Base::A), 1);
        assert_eq!(table.get(Base::T, Base::G), 1);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_identical_inputs_give_identical_tables() {
        let others = vec![Record::new("s1", "ACGT"), Record::new("s2", "TGCA")];
        let first = count(&others, "GATTACA", LoopBounds::Symmetric);
        let second = count(&others, "GATTACA", LoopBounds::Symmetric);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_others_is_zero_regardless_of_comparison() {
        for comparison in ["", "ACGT", "NNNN"] {
            for bounds in [LoopBounds::Symmetric, LoopBounds::Legacy] {
                let table = tally(&[], comparison, bounds).unwrap();
                assert!(table.is_zero());
            }
        }
    }

    #[test]
    fn test_empty_comparison_rejected() {
        let others = vec![Record::new("s1", "ACGT")];
        let refs: Vec<&Record> = others.iter().collect();
        assert!(matches!(
            tally(&refs, "", LoopBounds::Symmetric),
            Err(TallyError::EmptyComparisonSequence)
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let others = vec![
            Record::new("s1", "ACGT"),
            Record::new("s2", "ACGT"),
            Record::new("short", "AC"),
        ];
        let refs: Vec<&Record> = others.iter().collect();
        match tally(&refs, "ACGT", LoopBounds::Symmetric) {
            Err(TallyError::LengthMismatch {
                identifier,
                expected,
                found,
            }) => {
                assert_eq!(identifier, "short");
                assert_eq!(expected, 4);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_legacy_bounds_skip_last_record_for_t_and_c() {
        let others = vec![Record::new("s1", "AAAA"), Record::new("s2", "TCGA")];
        let symmetric = count(&others, "ACGT", LoopBounds::Symmetric);
        let legacy = count(&others, "ACGT", LoopBounds::Legacy);

        // The last record's T and C contribute only with symmetric bounds
        for mismatch in [Base::G, Base::C, Base::A] {
            assert_eq!(symmetric.get(Base::T, mismatch), 1);
            assert_eq!(legacy.get(Base::T, mismatch), 0);
        }
        for mismatch in [Base::A, Base::T, Base::G] {
            assert_eq!(symmetric.get(Base::C, mismatch), 1);
            assert_eq!(legacy.get(Base::C, mismatch), 0);
        }

        // A and G groups cover every record either way
        for pattern in [Base::A, Base::G] {
            for mismatch in Base::ALL {
                assert_eq!(
                    symmetric.get(pattern, mismatch),
                    legacy.get(pattern, mismatch)
                );
            }
        }
        assert_eq!(legacy.get(Base::A, Base::T), 5);
        assert_eq!(legacy.get(Base::G, Base::C), 1);
    }

    #[test]
    fn test_legacy_bounds_single_record_drops_t_and_c() {
        let others = vec![Record::new("s1", "ATGC")];
        let legacy = count(&others, "ATGC", LoopBounds::Legacy);

        assert_eq!(legacy.get(Base::A, Base::T), 1);
        assert_eq!(legacy.get(Base::G, Base::A), 1);
        assert_eq!(legacy.get(Base::T, Base::A), 0);
        assert_eq!(legacy.get(Base::C, Base::A), 0);
        assert_eq!(legacy.total(), 6);
    }
}
