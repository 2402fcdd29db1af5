use super::error_code::{self, RulecastErrorCode};
use crate::models::Metric;

/// Input-contract violations for a prediction call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("top_n must be a positive integer, got {top_n}")]
    InvalidTopN { top_n: usize },

    #[error("metric `{metric}` is not present on every rule")]
    MetricUnavailable { metric: Metric },
}

impl RulecastErrorCode for PredictError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTopN { .. } => error_code::INVALID_TOP_N,
            Self::MetricUnavailable { .. } => error_code::METRIC_UNAVAILABLE,
        }
    }
}
