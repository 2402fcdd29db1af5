//! Configuration system for rulecast.
//! TOML-based, layered: CLI > env > file > defaults.

pub mod defaults;
pub mod explore_config;
pub mod ingest_config;
pub mod observability_config;
pub mod predict_config;
pub mod rulecast_config;

pub use explore_config::ExploreConfig;
pub use ingest_config::{IngestConfig, MalformedRowPolicy};
pub use observability_config::ObservabilityConfig;
pub use predict_config::{PredictConfig, TieBreak};
pub use rulecast_config::RulecastConfig;
