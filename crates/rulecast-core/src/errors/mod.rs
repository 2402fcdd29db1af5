//! Error handling for rulecast.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod explore_error;
pub mod ingest_error;
pub mod predict_error;
pub mod rule_error;
pub mod rulecast_error;
pub mod set_literal_error;

pub use config_error::ConfigError;
pub use error_code::RulecastErrorCode;
pub use explore_error::ExploreError;
pub use ingest_error::IngestError;
pub use predict_error::PredictError;
pub use rule_error::RuleError;
pub use rulecast_error::{RulecastError, RulecastResult};
pub use set_literal_error::SetLiteralError;
