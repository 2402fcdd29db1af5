use std::cmp::Ordering;

use rulecast_core::config::TieBreak;
use rulecast_core::models::{Metric, Rule};

/// Sort matched rules by `metric`, highest first.
///
/// `sort_by` is stable, so under [`TieBreak::TableOrder`] equal rules keep
/// their table order.
pub fn rank(rules: &mut [&Rule], metric: Metric, tie_break: TieBreak) {
    match tie_break {
        TieBreak::TableOrder => rules.sort_by(|a, b| by_metric_desc(a, b, metric)),
        TieBreak::Explicit => rules.sort_by(|a, b| {
            by_metric_desc(a, b, metric)
                .then_with(|| by_metric_desc(a, b, Metric::Lift))
                .then_with(|| a.consequent().cmp(b.consequent()))
                .then_with(|| a.antecedent().cmp(b.antecedent()))
        }),
    }
}

fn by_metric_desc(a: &Rule, b: &Rule, metric: Metric) -> Ordering {
    let score = |r: &Rule| r.metric(metric).unwrap_or(f64::NEG_INFINITY);
    score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal)
}
