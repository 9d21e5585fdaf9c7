//! Core data types for substitution tallying.
//!
//! - [`Record`]: an identifier and its sequence line from the alignment file
//! - [`Base`]: the closed set of nucleotides that can be counted
//! - [`SubstitutionPair`]: an ordered (pattern, mismatch) pair of distinct bases
//! - [`CountTable`]: the twelve substitution counts produced by a tally
//! - [`ComparisonSource`], [`LoopBounds`]: tally options
//!
//! ## Reporting order
//!
//! | Pattern | Mismatches |
//! |---------|------------|
//! | A       | T, G, C    |
//! | T       | G, C, A    |
//! | G       | C, A, T    |
//! | C       | A, T, G    |

pub mod counts;
pub mod record;
pub mod types;

pub use counts::CountTable;
pub use record::Record;
pub use types::{Base, ComparisonSource, LoopBounds, SubstitutionPair, SUBSTITUTION_ORDER};
