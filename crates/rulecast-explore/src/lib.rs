//! # rulecast-explore
//!
//! The data behind the dashboard views: threshold filtering of rules,
//! summary statistics of a rule table, the top-K most frequent services,
//! and a binned frequency distribution.

pub mod filter;
pub mod frequency;
pub mod stats;

pub use filter::{MetricRange, RuleFilter};
pub use frequency::{frequency_bins, top_k, FrequencyBin};
pub use stats::{MetricSummary, RuleStats};
