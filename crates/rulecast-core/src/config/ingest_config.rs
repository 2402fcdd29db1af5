use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// What to do with a rule row that fails to parse or validate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Fail the whole load.
    #[default]
    Reject,
    /// Drop the row with a warning.
    Skip,
}

impl FromStr for MalformedRowPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(ConfigError::InvalidValue {
                field: "ingest.malformed_rows".to_string(),
                message: format!("unknown policy `{other}`"),
            }),
        }
    }
}

/// Tabular input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub malformed_rows: MalformedRowPolicy,
    /// Field delimiter. Must be a single ASCII character.
    pub delimiter: char,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            malformed_rows: MalformedRowPolicy::default(),
            delimiter: defaults::DEFAULT_DELIMITER,
        }
    }
}

impl IngestConfig {
    /// The delimiter as a byte, `None` if it is not ASCII.
    pub fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii)
    }
}
