use std::collections::HashSet;

use rulecast_core::models::{ItemId, Prediction, Rule};

use crate::options::PredictOptions;

/// Turn ranked rules into at most `top_n` distinct predictions.
///
/// Consequent items are visited rule by rule, each in set order. The first
/// rule to mention an item owns it; later mentions are ignored even when
/// their measures differ.
pub fn expand(ranked: &[&Rule], options: &PredictOptions) -> Vec<Prediction> {
    let mut seen: HashSet<&ItemId> = HashSet::new();
    let mut predictions = Vec::with_capacity(options.top_n.min(ranked.len()));

    'rules: for rule in ranked {
        let score = rule.metric(options.metric).unwrap_or_default();
        for item in rule.consequent() {
            if predictions.len() == options.top_n {
                break 'rules;
            }
            if seen.insert(item) {
                predictions.push(Prediction {
                    item: item.clone(),
                    score,
                    lift: options.include_secondary_metric.then(|| rule.lift()),
                });
            }
        }
    }
    predictions
}
