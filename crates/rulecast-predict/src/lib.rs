//! # rulecast-predict
//!
//! Next-item prediction from mined association rules.
//!
//! ## Pipeline
//!
//! | Stage | What happens |
//! |-------|--------------|
//! | Match | Keep rules whose antecedent is a subset of the history |
//! | Rank | Stable sort by the chosen metric, descending |
//! | Expand | Walk consequents in order, first-seen item wins, stop at `top_n` |
//!
//! Every emitted item carries the metric (and optionally the lift) of the
//! rule that produced it. The table is never mutated, so one `Arc<RuleTable>`
//! can serve any number of threads.

pub mod batch;
pub mod engine;
pub mod options;
pub mod pipeline;

pub use batch::predict_batch;
pub use engine::RulePredictor;
pub use options::PredictOptions;
pub use pipeline::predict;
