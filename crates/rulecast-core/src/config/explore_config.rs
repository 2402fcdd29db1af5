use serde::{Deserialize, Serialize};

use super::defaults;

/// Defaults for rule and frequency exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Number of services shown by the top-K view.
    pub top_k: usize,
    /// Width of a frequency bin.
    pub bin_size: u64,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            bin_size: defaults::DEFAULT_BIN_SIZE,
        }
    }
}
