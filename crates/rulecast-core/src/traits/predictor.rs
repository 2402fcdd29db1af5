use crate::errors::RulecastResult;
use crate::models::{ItemSet, PredictionResult};

/// Next-item prediction from a user's history.
///
/// Implementations are pure: the same history always yields the same result,
/// and concurrent calls need no coordination.
pub trait IPredictor: Send + Sync {
    fn predict(&self, history: &ItemSet) -> RulecastResult<PredictionResult>;
}
