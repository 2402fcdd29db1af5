//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed rule table load.
pub fn rules_loaded(source: &str, loaded: usize, skipped: usize) {
    tracing::info!(
        event = "rules_loaded",
        source = %source,
        loaded = loaded,
        skipped = skipped,
        "rule table loaded"
    );
}

/// Log a completed frequency table load.
pub fn frequencies_loaded(source: &str, loaded: usize, skipped: usize) {
    tracing::info!(
        event = "frequencies_loaded",
        source = %source,
        loaded = loaded,
        skipped = skipped,
        "frequency table loaded"
    );
}

/// Log a row dropped under the skip policy.
pub fn row_skipped(line: u64, reason: &str) {
    tracing::warn!(
        event = "row_skipped",
        line = line,
        reason = %reason,
        "skipping malformed row"
    );
}

/// Log a finished prediction.
pub fn prediction_completed(matched_rules: usize, emitted: usize) {
    tracing::debug!(
        event = "prediction_completed",
        matched_rules = matched_rules,
        emitted = emitted,
        "prediction completed"
    );
}
