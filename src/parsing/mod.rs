//! Parser for alignment files.
//!
//! An alignment file is FASTA-like text where every `>` marker line is followed by
//! exactly one sequence line:
//!
//! ```text
//! >ref
//! ACGTACGT
//! >sample1
//! ACGAACGT
//! ```
//!
//! Sequences are never folded across lines; a record's bases are exactly the
//! one line after its marker. Plain and gzip/bgzip compressed files are accepted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_tally::parsing::alignment::parse_alignment_file;
//! use std::path::Path;
//!
//! let records = parse_alignment_file(Path::new("alignment.fa")).unwrap();
//! for record in &records {
//!     println!("{}: {} bases", record.identifier, record.len());
//! }
//! ```

pub mod alignment;

pub use alignment::{parse_alignment_file, parse_alignment_reader, ParseError};
