//! Shared CSV plumbing for the table readers.

use std::fs::File;
use std::path::Path;

use rulecast_core::config::IngestConfig;
use rulecast_core::errors::IngestError;
use serde::Serialize;

/// Row counts for one table load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub loaded: usize,
    pub skipped: usize,
}

pub(crate) fn csv_reader<R: std::io::Read>(
    config: &IngestConfig,
    input: R,
) -> Result<csv::Reader<R>, IngestError> {
    let delimiter = config
        .delimiter_byte()
        .ok_or(IngestError::InvalidDelimiter {
            delimiter: config.delimiter,
        })?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input))
}

pub(crate) fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn csv_error(e: csv::Error) -> IngestError {
    IngestError::Csv {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        reason: e.to_string(),
    }
}

/// Locate a column by case-insensitive header name.
pub(crate) fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

pub(crate) fn require_column(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, IngestError> {
    find_column(headers, name).ok_or(IngestError::MissingColumn { column: name })
}

/// Fetch a cell, treating a short row as malformed.
pub(crate) fn cell<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    column: &str,
) -> Result<&'r str, String> {
    record
        .get(index)
        .ok_or_else(|| format!("row has no `{column}` field"))
}

pub(crate) fn line_of(record: &csv::StringRecord, fallback: u64) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(fallback)
}
