use serde::{Deserialize, Serialize};

use super::{ItemId, Metric};

/// One predicted next item, carrying the measures of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub item: ItemId,
    /// Value of the ranking metric on the producing rule.
    pub score: f64,
    /// Lift of the producing rule, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift: Option<f64>,
}

/// Ranked, deduplicated predictions for one history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Metric that `score` refers to.
    pub metric: Metric,
    pub predictions: Vec<Prediction>,
}

impl PredictionResult {
    pub fn empty(metric: Metric) -> Self {
        Self {
            metric,
            predictions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.predictions.iter().map(|p| &p.item)
    }
}
