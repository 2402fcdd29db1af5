pub mod frequency;
pub mod item;
pub mod metric;
pub mod prediction;
pub mod rule;
pub mod rule_table;

pub use frequency::{FrequencyTable, ServiceFrequency};
pub use item::{ItemId, ItemSet};
pub use metric::Metric;
pub use prediction::{Prediction, PredictionResult};
pub use rule::{Rule, RuleMetrics};
pub use rule_table::RuleTable;
