//! Top-level rulecast configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExploreConfig, IngestConfig, ObservabilityConfig, PredictConfig};
use crate::constants::{ENV_LOG_LEVEL, ENV_METRIC, ENV_TOP_N, LOG_LEVELS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied by the binary)
/// 2. Environment variables (`RULECAST_*`)
/// 3. Config file
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulecastConfig {
    pub predict: PredictConfig,
    pub ingest: IngestConfig,
    pub explore: ExploreConfig,
    pub observability: ObservabilityConfig,
}

impl RulecastConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a TOML file, apply `RULECAST_*` overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TOP_N) {
            self.predict.top_n = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_TOP_N.to_string(),
                message: format!("`{raw}` is not a non-negative integer"),
            })?;
        }
        if let Some(raw) = lookup(ENV_METRIC) {
            self.predict.metric = raw.parse().map_err(|e: crate::errors::RuleError| {
                ConfigError::InvalidValue {
                    field: ENV_METRIC.to_string(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = raw.trim().to_ascii_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.predict.top_n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "predict.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.explore.top_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "explore.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.explore.bin_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "explore.bin_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.ingest.delimiter_byte().is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.delimiter".to_string(),
                message: "must be a single ASCII character".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
