//! A rule table bound to default prediction options.
//!
//! Implements `IPredictor` from rulecast-core.

use std::sync::Arc;

use rulecast_core::errors::{PredictError, RulecastResult};
use rulecast_core::models::{ItemSet, PredictionResult, RuleTable};
use rulecast_core::traits::IPredictor;

use crate::batch::predict_batch;
use crate::options::PredictOptions;
use crate::pipeline;

/// Shares one immutable rule table across callers and threads.
#[derive(Debug, Clone)]
pub struct RulePredictor {
    rules: Arc<RuleTable>,
    options: PredictOptions,
}

impl RulePredictor {
    /// Bind `rules` to `options`. Fails if the options could never succeed
    /// against this table.
    pub fn new(rules: Arc<RuleTable>, options: PredictOptions) -> Result<Self, PredictError> {
        options.validate()?;
        if !rules.has_metric(options.metric) {
            return Err(PredictError::MetricUnavailable {
                metric: options.metric,
            });
        }
        Ok(Self { rules, options })
    }

    pub fn rules(&self) -> &Arc<RuleTable> {
        &self.rules
    }

    pub fn options(&self) -> &PredictOptions {
        &self.options
    }

    /// Predict with per-call options instead of the bound defaults.
    pub fn predict_with(
        &self,
        history: &ItemSet,
        options: &PredictOptions,
    ) -> Result<PredictionResult, PredictError> {
        pipeline::predict(history, &self.rules, options)
    }

    /// Predict for many histories in parallel with the bound options.
    pub fn predict_many(
        &self,
        histories: &[ItemSet],
    ) -> Result<Vec<PredictionResult>, PredictError> {
        predict_batch(histories, &self.rules, &self.options)
    }
}

impl IPredictor for RulePredictor {
    fn predict(&self, history: &ItemSet) -> RulecastResult<PredictionResult> {
        Ok(pipeline::predict(history, &self.rules, &self.options)?)
    }
}
