//! Rule construction errors.

use super::error_code::{self, RulecastErrorCode};

/// Violations of the rule invariants, raised when a rule or item is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("item identifier is empty")]
    EmptyItemId,

    #[error("rule antecedent is empty")]
    EmptyAntecedent,

    #[error("rule consequent is empty")]
    EmptyConsequent,

    #[error("antecedent and consequent share items: {items}")]
    OverlappingItems { items: String },

    #[error("{metric} = {value} is outside {bounds}")]
    MetricOutOfRange {
        metric: &'static str,
        value: f64,
        bounds: &'static str,
    },

    #[error("{metric} is not a finite number")]
    NonFiniteMetric { metric: &'static str },

    #[error("unknown rule metric: {name} (expected confidence, lift or support)")]
    UnknownMetric { name: String },
}

impl RulecastErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_INVALID
    }
}
