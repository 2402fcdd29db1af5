use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::Metric;

/// How rules with equal primary metric are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Stable sort on the primary metric; ties keep table order.
    #[default]
    TableOrder,
    /// Ties broken by lift descending, then consequent, then antecedent.
    Explicit,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TableOrder => "table_order",
            Self::Explicit => "explicit",
        })
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "table_order" => Ok(Self::TableOrder),
            "explicit" => Ok(Self::Explicit),
            other => Err(ConfigError::InvalidValue {
                field: "predict.tie_break".to_string(),
                message: format!("unknown tie-break `{other}`"),
            }),
        }
    }
}

/// Prediction defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictConfig {
    /// Maximum number of predicted items.
    pub top_n: usize,
    /// Primary ranking metric.
    pub metric: Metric,
    /// Attach the producing rule's lift to each prediction.
    pub include_lift: bool,
    pub tie_break: TieBreak,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_TOP_N,
            metric: defaults::DEFAULT_METRIC,
            include_lift: defaults::DEFAULT_INCLUDE_LIFT,
            tie_break: TieBreak::default(),
        }
    }
}
