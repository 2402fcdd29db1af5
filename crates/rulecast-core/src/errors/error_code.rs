//! Stable error codes for the command-line boundary.

/// Every error enum implements this to provide a structured code string.
pub trait RulecastErrorCode {
    /// Returns the error code (e.g., "PREDICT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const RULE_INVALID: &str = "RULE_INVALID";
pub const SET_LITERAL_ERROR: &str = "SET_LITERAL_ERROR";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const MALFORMED_ROW: &str = "MALFORMED_ROW";
pub const INVALID_TOP_N: &str = "INVALID_TOP_N";
pub const METRIC_UNAVAILABLE: &str = "METRIC_UNAVAILABLE";
pub const EXPLORE_ERROR: &str = "EXPLORE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
