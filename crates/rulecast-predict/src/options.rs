use serde::{Deserialize, Serialize};

use rulecast_core::config::{PredictConfig, TieBreak};
use rulecast_core::errors::PredictError;
use rulecast_core::models::Metric;

/// Per-call prediction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictOptions {
    /// Maximum number of distinct items returned. Must be positive.
    pub top_n: usize,
    /// Primary ranking key.
    pub metric: Metric,
    /// Attach the producing rule's lift to each prediction.
    pub include_secondary_metric: bool,
    pub tie_break: TieBreak,
}

impl PredictOptions {
    pub fn new(top_n: usize, metric: Metric) -> Self {
        Self {
            top_n,
            metric,
            ..Self::default()
        }
    }

    pub fn with_lift(mut self, include: bool) -> Self {
        self.include_secondary_metric = include;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn validate(&self) -> Result<(), PredictError> {
        if self.top_n == 0 {
            return Err(PredictError::InvalidTopN { top_n: self.top_n });
        }
        Ok(())
    }
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self::from(&PredictConfig::default())
    }
}

impl From<&PredictConfig> for PredictOptions {
    fn from(config: &PredictConfig) -> Self {
        Self {
            top_n: config.top_n,
            metric: config.metric,
            include_secondary_metric: config.include_lift,
            tie_break: config.tie_break,
        }
    }
}
