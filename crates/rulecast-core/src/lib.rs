//! # rulecast-core
//!
//! Foundation crate for rulecast.
//! Defines the rule and prediction types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RulecastConfig;
pub use errors::{RulecastError, RulecastResult};
pub use models::{
    FrequencyTable, ItemId, ItemSet, Metric, Prediction, PredictionResult, Rule, RuleMetrics,
    RuleTable, ServiceFrequency,
};
