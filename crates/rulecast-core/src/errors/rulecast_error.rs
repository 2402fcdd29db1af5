//! Umbrella error aggregating every subsystem.

use super::error_code::RulecastErrorCode;
use super::{ConfigError, ExploreError, IngestError, PredictError, RuleError, SetLiteralError};

/// Any rulecast error. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum RulecastError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Set literal error: {0}")]
    SetLiteral(#[from] SetLiteralError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Prediction error: {0}")]
    Predict(#[from] PredictError),

    #[error("Explore error: {0}")]
    Explore(#[from] ExploreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RulecastErrorCode for RulecastError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Rule(e) => e.error_code(),
            Self::SetLiteral(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Predict(e) => e.error_code(),
            Self::Explore(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type RulecastResult<T> = Result<T, RulecastError>;
