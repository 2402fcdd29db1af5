use rayon::prelude::*;

use rulecast_core::errors::PredictError;
use rulecast_core::models::{ItemSet, PredictionResult, RuleTable};

use crate::options::PredictOptions;
use crate::pipeline::predict;

/// Predict for many histories in parallel over one shared table.
///
/// Results are in input order and identical to calling [`predict`] for each
/// history in turn.
pub fn predict_batch(
    histories: &[ItemSet],
    rules: &RuleTable,
    options: &PredictOptions,
) -> Result<Vec<PredictionResult>, PredictError> {
    options.validate()?;
    histories
        .par_iter()
        .map(|history| predict(history, rules, options))
        .collect()
}
