use rulecast_core::config::ObservabilityConfig;
use rulecast_observability::{events, init_tracing, init_tracing_with_filter};

#[test]
fn second_init_is_a_no_op() {
    init_tracing(&ObservabilityConfig::default());
    // Only one global subscriber can exist per process.
    assert!(!init_tracing_with_filter("debug"));
}

#[test]
fn spans_and_events_emit_without_subscriber_panics() {
    let span = rulecast_observability::predict_span!(2usize, 5usize, "confidence");
    let _guard = span.enter();
    events::prediction_completed(3, 2);
    events::row_skipped(4, "bad antecedent");
    events::rules_loaded("rules.csv", 10, 1);
    let _ingest = rulecast_observability::ingest_span!("rules.csv").entered();
    let _explore = rulecast_observability::explore_span!("bins").entered();
}
