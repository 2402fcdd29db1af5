//! Span definitions per operation: ingest, predict, explore.

/// Create an ingest span for one input file.
#[macro_export]
macro_rules! ingest_span {
    ($source:expr) => {
        tracing::info_span!("rulecast.ingest", source = %$source)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! predict_span {
    ($history_len:expr, $top_n:expr, $metric:expr) => {
        tracing::debug_span!(
            "rulecast.predict",
            history_len = $history_len,
            top_n = $top_n,
            metric = %$metric
        )
    };
}

/// Create an exploration span.
#[macro_export]
macro_rules! explore_span {
    ($operation:expr) => {
        tracing::debug_span!("rulecast.explore", operation = %$operation)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "rulecast.ingest";
    pub const PREDICT: &str = "rulecast.predict";
    pub const EXPLORE: &str = "rulecast.explore";
}
