// Single source of truth for all default values.

use crate::models::Metric;

// --- Predict ---
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_METRIC: Metric = Metric::Confidence;
pub const DEFAULT_INCLUDE_LIFT: bool = true;

// --- Ingest ---
pub const DEFAULT_DELIMITER: char = ',';

// --- Explore ---
pub const DEFAULT_TOP_K: usize = 50;
pub const DEFAULT_BIN_SIZE: u64 = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
