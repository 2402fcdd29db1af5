use super::error_code::{self, RulecastErrorCode};

/// Invalid arguments to rule filtering and frequency analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExploreError {
    #[error("invalid {field} range: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("top_k must be a positive integer, got {k}")]
    InvalidTopK { k: usize },

    #[error("bin size must be a positive integer, got {bin_size}")]
    InvalidBinSize { bin_size: u64 },

    #[error("bin size {bin_size} gives {bins} bins, more than the limit of {limit}")]
    TooManyBins { bin_size: u64, bins: u64, limit: u64 },
}

impl RulecastErrorCode for ExploreError {
    fn error_code(&self) -> &'static str {
        error_code::EXPLORE_ERROR
    }
}
