//! Errors at the tabular input boundary.

use super::error_code::{self, RulecastErrorCode};

/// Errors raised while reading rule or frequency tables.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("CSV error at line {line}: {reason}")]
    Csv { line: u64, reason: String },

    #[error("required column `{column}` is missing")]
    MissingColumn { column: &'static str },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("delimiter {delimiter:?} is not a single ASCII character")]
    InvalidDelimiter { delimiter: char },
}

impl RulecastErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            Self::MalformedRow { .. } => error_code::MALFORMED_ROW,
            Self::Io { .. } | Self::Csv { .. } | Self::InvalidDelimiter { .. } => {
                error_code::INGEST_ERROR
            }
        }
    }
}
