//! The three-stage prediction pipeline: match → rank → expand.

pub mod expansion;
pub mod matching;
pub mod ranking;

use rulecast_core::errors::PredictError;
use rulecast_core::models::{ItemSet, PredictionResult, RuleTable};
use rulecast_observability::events;

use crate::options::PredictOptions;

/// Predict the next items for `history` from `rules`.
///
/// An empty history, an empty table, or a history that fires no rule all
/// yield an empty result. `top_n == 0` and a metric missing from some rule
/// are errors, checked before any scan.
pub fn predict(
    history: &ItemSet,
    rules: &RuleTable,
    options: &PredictOptions,
) -> Result<PredictionResult, PredictError> {
    options.validate()?;
    if !rules.has_metric(options.metric) {
        return Err(PredictError::MetricUnavailable {
            metric: options.metric,
        });
    }

    let _span =
        rulecast_observability::predict_span!(history.len(), options.top_n, options.metric)
            .entered();

    let mut matched = matching::matching_rules(history, rules);
    ranking::rank(&mut matched, options.metric, options.tie_break);
    let predictions = expansion::expand(&matched, options);

    events::prediction_completed(matched.len(), predictions.len());

    Ok(PredictionResult {
        metric: options.metric,
        predictions,
    })
}
