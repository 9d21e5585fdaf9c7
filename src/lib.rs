//! # ref-tally
//!
//! A library for tallying nucleotide substitution patterns of aligned sequences
//! against a reference sequence.
//!
//! Given an alignment file and a reference identifier, `ref-tally` splits the
//! records into the reference and everything else, then compares every base of
//! every non-reference sequence with every base of the reference sequence and
//! counts the twelve (pattern, mismatch) substitution pairs.
//!
//! Comparisons are exhaustive, not column-matched: a sequence `AT` against a
//! reference `TG` counts one A/T, one A/G and one T/G.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_tally::core::Base;
//! use ref_tally::parsing::parse_alignment_file;
//! use ref_tally::tally::{run, TallyOptions};
//! use std::path::Path;
//!
//! let records = parse_alignment_file(Path::new("alignment.fa")).unwrap();
//! let report = run(&records, "ref", TallyOptions::default()).unwrap();
//!
//! for (pair, count) in report.counts.iter() {
//!     println!("{}: {}", pair.label(), count);
//! }
//! println!("A->G: {}", report.counts.get(Base::A, Base::G));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, bases, substitution pairs, and the count table
//! - [`parsing`]: Alignment file parser
//! - [`tally`]: Partitioning and substitution counting
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod tally;
pub mod utils;

// Re-export commonly used types for convenience
pub use self::core::counts::CountTable;
pub use self::core::record::Record;
pub use self::core::types::*;
pub use tally::{TallyError, TallyOptions, TallyReport};
