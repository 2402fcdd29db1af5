use rulecast_core::config::TieBreak;
use rulecast_core::errors::PredictError;
use rulecast_core::models::*;
use rulecast_predict::{predict, PredictOptions};

// ── Helpers ───────────────────────────────────────────────────────────────

fn set(names: &[&str]) -> ItemSet {
    ItemSet::try_from_names(names.iter().copied()).unwrap()
}

fn rule(ante: &[&str], cons: &[&str], confidence: f64, lift: f64) -> Rule {
    Rule::new(set(ante), set(cons), RuleMetrics::new(confidence, lift)).unwrap()
}

/// The three-rule table used in the worked examples.
fn example_table() -> RuleTable {
    RuleTable::new(vec![
        rule(&["A"], &["B"], 0.9, 2.0),
        rule(&["A", "B"], &["C"], 0.8, 1.5),
        rule(&["A"], &["D"], 0.7, 1.2),
    ])
}

fn items(result: &PredictionResult) -> Vec<&str> {
    result.items().map(|i| i.as_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Worked examples
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn history_a_predicts_b_then_d() {
    let options = PredictOptions::new(5, Metric::Confidence).with_lift(false);
    let result = predict(&set(&["A"]), &example_table(), &options).unwrap();

    assert_eq!(result.metric, Metric::Confidence);
    assert_eq!(
        result.predictions,
        vec![
            Prediction {
                item: ItemId::parse("B").unwrap(),
                score: 0.9,
                lift: None
            },
            Prediction {
                item: ItemId::parse("D").unwrap(),
                score: 0.7,
                lift: None
            },
        ]
    );
}

#[test]
fn history_ab_top_one_stops_after_first_item() {
    let options = PredictOptions::new(1, Metric::Confidence);
    let result = predict(&set(&["A", "B"]), &example_table(), &options).unwrap();
    assert_eq!(items(&result), vec!["B"]);
    assert_eq!(result.predictions[0].score, 0.9);
}

#[test]
fn history_ab_fires_all_three_rules() {
    let options = PredictOptions::new(5, Metric::Confidence);
    let result = predict(&set(&["A", "B"]), &example_table(), &options).unwrap();
    assert_eq!(items(&result), vec!["B", "C", "D"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Empty inputs and errors
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_history_yields_empty_result() {
    let result = predict(&ItemSet::new(), &example_table(), &PredictOptions::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn empty_table_yields_empty_result() {
    let result = predict(&set(&["A"]), &RuleTable::default(), &PredictOptions::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn no_matching_rule_is_not_an_error() {
    let result = predict(&set(&["Q"]), &example_table(), &PredictOptions::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn zero_top_n_is_rejected_even_without_matches() {
    let options = PredictOptions::new(0, Metric::Confidence);
    assert_eq!(
        predict(&set(&["Q"]), &RuleTable::default(), &options).unwrap_err(),
        PredictError::InvalidTopN { top_n: 0 }
    );
}

#[test]
fn support_metric_requires_support_on_every_rule() {
    let options = PredictOptions::new(5, Metric::Support);
    assert_eq!(
        predict(&set(&["A"]), &example_table(), &options).unwrap_err(),
        PredictError::MetricUnavailable {
            metric: Metric::Support
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Ranking and expansion
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn subset_not_intersection() {
    let table = RuleTable::new(vec![rule(&["A", "X"], &["B"], 0.99, 9.0)]);
    let result = predict(&set(&["A"]), &table, &PredictOptions::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn first_seen_rule_owns_the_item() {
    let table = RuleTable::new(vec![
        rule(&["A"], &["B"], 0.6, 3.0),
        rule(&["A"], &["B", "C"], 0.8, 1.1),
    ]);
    let options = PredictOptions::new(5, Metric::Confidence).with_lift(true);
    let result = predict(&set(&["A"]), &table, &options).unwrap();

    assert_eq!(items(&result), vec!["B", "C"]);
    // B comes from the 0.8 rule, which ranks first; the 0.6 rule is ignored for B.
    assert_eq!(result.predictions[0].score, 0.8);
    assert_eq!(result.predictions[0].lift, Some(1.1));
}

#[test]
fn consequent_items_expand_in_lexicographic_order() {
    let table = RuleTable::new(vec![rule(&["A"], &["zeta", "beta", "mu"], 0.5, 1.0)]);
    let options = PredictOptions::new(2, Metric::Confidence);
    let result = predict(&set(&["A"]), &table, &options).unwrap();
    assert_eq!(items(&result), vec!["beta", "mu"]);
}

#[test]
fn lift_metric_reorders_and_scores_by_lift() {
    let options = PredictOptions::new(5, Metric::Lift).with_lift(false);
    let table = RuleTable::new(vec![
        rule(&["A"], &["B"], 0.9, 1.1),
        rule(&["A"], &["C"], 0.2, 4.0),
    ]);
    let result = predict(&set(&["A"]), &table, &options).unwrap();
    assert_eq!(result.metric, Metric::Lift);
    assert_eq!(items(&result), vec!["C", "B"]);
    assert_eq!(result.predictions[0].score, 4.0);
}

#[test]
fn support_metric_works_when_present() {
    let with_support = |cons: &str, support: f64| {
        Rule::new(
            set(&["A"]),
            set(&[cons]),
            RuleMetrics::new(0.5, 1.0).with_support(support),
        )
        .unwrap()
    };
    let table = RuleTable::new(vec![with_support("B", 0.1), with_support("C", 0.3)]);
    let result = predict(&set(&["A"]), &table, &PredictOptions::new(5, Metric::Support)).unwrap();
    assert_eq!(items(&result), vec!["C", "B"]);
}

#[test]
fn ties_follow_table_order_by_default() {
    let table = RuleTable::new(vec![
        rule(&["A"], &["Z"], 0.5, 1.0),
        rule(&["A"], &["Y"], 0.5, 2.0),
    ]);
    let default = predict(&set(&["A"]), &table, &PredictOptions::new(5, Metric::Confidence))
        .unwrap();
    assert_eq!(items(&default), vec!["Z", "Y"]);

    let explicit = PredictOptions::new(5, Metric::Confidence).with_tie_break(TieBreak::Explicit);
    let result = predict(&set(&["A"]), &table, &explicit).unwrap();
    assert_eq!(items(&result), vec!["Y", "Z"]);
}

#[test]
fn items_already_in_history_can_be_predicted() {
    // Rule {A} => {B} fires for {A, B}; the item is still reported.
    let options = PredictOptions::new(5, Metric::Confidence);
    let result = predict(&set(&["A", "B"]), &example_table(), &options).unwrap();
    assert!(items(&result).contains(&"B"));
}

#[test]
fn options_default_follow_config_defaults() {
    let options = PredictOptions::default();
    assert_eq!(options.top_n, 5);
    assert_eq!(options.metric, Metric::Confidence);
    assert!(options.include_secondary_metric);
    assert_eq!(options.tie_break, TieBreak::TableOrder);
}
