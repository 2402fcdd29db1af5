use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RuleError;

/// A numeric rule measure that can drive ranking and filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Confidence,
    Lift,
    Support,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Confidence, Metric::Lift, Metric::Support];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confidence => "confidence",
            Self::Lift => "lift",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RuleError::UnknownMetric {
                name: name.to_string(),
            })
    }
}
