//! Command-line interface for ref-tally.
//!
//! ## Usage
//!
//! ```text
//! # Tally substitutions against the record named "ref"
//! ref-tally -a alignment.fa -s ref
//!
//! # Compare against the literal token instead of the matched record
//! ref-tally -a alignment.fa -s ACGTACGT --compare-against token
//!
//! # JSON output for scripting
//! ref-tally -a alignment.fa.gz -s ref --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::core::types::{ComparisonSource, LoopBounds};
use crate::tally::TallyOptions;

pub mod output;
pub mod tally;

#[derive(Parser)]
#[command(name = "ref-tally")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Tally nucleotide substitution patterns against a reference sequence")]
#[command(
    long_about = "ref-tally compares every non-reference sequence of an alignment file against a reference sequence and counts how often each of the twelve nucleotide substitution pairs occurs.\n\nRecords whose identifier equals --refsequence are the reference; all other records are compared, every base against every base of the reference."
)]
pub struct Cli {
    /// Alignment file (FASTA-like, one sequence line per record; .gz/.bgz accepted)
    #[arg(short, long, value_name = "PATH")]
    pub alignment: PathBuf,

    /// Reference identifier, also used as the comparison sequence with --compare-against token
    #[arg(short = 's', long = "refsequence", value_name = "VALUE")]
    pub refsequence: String,

    /// What the non-reference sequences are compared against
    #[arg(long, value_enum, default_value = "record")]
    pub compare_against: CompareAgainst,

    /// Skip the last non-reference record when counting T and C pattern bases
    #[arg(long)]
    pub legacy_bounds: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    #[must_use]
    pub fn tally_options(&self) -> TallyOptions {
        TallyOptions {
            comparison: self.compare_against.into(),
            bounds: if self.legacy_bounds {
                LoopBounds::Legacy
            } else {
                LoopBounds::Symmetric
            },
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CompareAgainst {
    /// Bases of the record whose identifier equals --refsequence
    Record,
    /// The --refsequence value itself
    Token,
}

impl From<CompareAgainst> for ComparisonSource {
    fn from(value: CompareAgainst) -> Self {
        match value {
            CompareAgainst::Record => Self::Record,
            CompareAgainst::Token => Self::Token,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ref-tally", "-a", "aln.fa", "-s", "ref"]).unwrap();
        assert_eq!(cli.alignment, PathBuf::from("aln.fa"));
        assert_eq!(cli.refsequence, "ref");
        assert_eq!(cli.tally_options(), TallyOptions::default());
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "ref-tally",
            "--alignment",
            "aln.fa",
            "--refsequence",
            "ACGT",
            "--compare-against",
            "token",
            "--legacy-bounds",
            "--format",
            "json",
        ])
        .unwrap();
        let options = cli.tally_options();
        assert_eq!(options.comparison, ComparisonSource::Token);
        assert_eq!(options.bounds, LoopBounds::Legacy);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_missing_required_flags() {
        assert!(Cli::try_parse_from(["ref-tally", "-a", "aln.fa"]).is_err());
        assert!(Cli::try_parse_from(["ref-tally", "-s", "ref"]).is_err());
    }
}
