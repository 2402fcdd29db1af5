/// rulecast version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Slack allowed when validating bounded metrics such as confidence.
/// Miners emit values like `1.0000000000000002`; those are clamped, not rejected.
pub const METRIC_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of bins a frequency distribution may produce.
pub const MAX_FREQUENCY_BINS: u64 = 10_000;

/// Env var consulted by the tracing subscriber before the configured level.
pub const LOG_ENV_VAR: &str = "RULECAST_LOG";

/// Env var overrides applied on top of file config.
pub const ENV_TOP_N: &str = "RULECAST_TOP_N";
pub const ENV_METRIC: &str = "RULECAST_METRIC";
pub const ENV_LOG_LEVEL: &str = "RULECAST_LOG_LEVEL";

/// Column names in a mined-rules table.
pub mod columns {
    pub const ANTECEDENTS: &str = "antecedents";
    pub const CONSEQUENTS: &str = "consequents";
    pub const SUPPORT: &str = "support";
    pub const CONFIDENCE: &str = "confidence";
    pub const LIFT: &str = "lift";
    pub const LEVERAGE: &str = "leverage";
    pub const CONVICTION: &str = "conviction";

    /// Columns in a service-frequency table.
    pub const SERVICE: &str = "service";
    pub const FREQUENCY: &str = "frequency";
}

/// Accepted log levels.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
