//! Parser for alignment files.
//!
//! Supported extensions:
//! - `.gz`, `.bgz` (gzip/bgzip compressed)
//! - anything else is read as plain text

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::record::Record;
use crate::utils::validation::{check_record_limit, MAX_RECORDS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Invalid alignment format: {0}")]
    InvalidFormat(String),

    #[error("Too many records: {0} exceeds maximum allowed ({max})", max = MAX_RECORDS)]
    TooManyRecords(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse an alignment file into records, in file order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read,
/// `ParseError::MalformedRecord` if markers and sequence lines do not alternate,
/// `ParseError::InvalidFormat` if no records are found, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_alignment_file(path: &Path) -> Result<Vec<Record>, ParseError> {
    let file = std::fs::File::open(path)?;

    let records = if is_gzipped(path) {
        parse_alignment_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_alignment_reader(BufReader::new(file))?
    };

    debug!(
        path = %path.display(),
        records = records.len(),
        "parsed alignment file"
    );
    Ok(records)
}

/// Parse alignment text from any buffered reader.
///
/// Each `>` line opens a record and the next line is its sequence, kept
/// verbatim apart from a trailing `\r`. An empty line directly after a marker
/// is an empty sequence; blank lines anywhere else are ignored. Bytes that are
/// not valid UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// See [`parse_alignment_file`].
pub fn parse_alignment_reader<R: BufRead>(reader: R) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    // Identifier waiting for its sequence line, with the line it was read from
    let mut pending: Option<(String, usize)> = None;

    for (index, line) in reader.split(b'\n').enumerate() {
        let raw = line?;
        let line_number = index + 1;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw);

        if let Some(identifier) = bytes.strip_prefix(b">") {
            if let Some((previous, at)) = pending.take() {
                return Err(missing_sequence(&previous, at));
            }
            pending = Some((String::from_utf8_lossy(identifier).into_owned(), line_number));
            continue;
        }

        let Some((identifier, _)) = pending.take() else {
            if bytes.is_empty() {
                continue;
            }
            return Err(ParseError::MalformedRecord {
                line: line_number,
                message: "sequence line without a preceding '>' identifier".to_string(),
            });
        };

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        records.push(Record::new(identifier, String::from_utf8_lossy(bytes)));
    }

    if let Some((identifier, at)) = pending {
        return Err(missing_sequence(&identifier, at));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No records found in alignment file".to_string(),
        ));
    }

    Ok(records)
}

fn missing_sequence(identifier: &str, line: usize) -> ParseError {
    ParseError::MalformedRecord {
        line,
        message: format!("identifier '{identifier}' has no sequence line"),
    }
}
