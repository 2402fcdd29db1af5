use proptest::prelude::*;
use rulecast_core::config::TieBreak;
use rulecast_core::models::*;
use rulecast_predict::{predict, PredictOptions};
use std::collections::HashSet;

const ALPHABET: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn item_set(max: usize) -> impl Strategy<Value = ItemSet> {
    prop::sample::subsequence(ALPHABET.to_vec(), 1..=max)
        .prop_map(|names| ItemSet::try_from_names(names).unwrap())
}

/// A valid rule: split a random itemset into non-empty antecedent and consequent.
fn rule() -> impl Strategy<Value = Rule> {
    (
        prop::sample::subsequence(ALPHABET.to_vec(), 2..=5),
        any::<prop::sample::Index>(),
        0.0f64..=1.0,
        0.0f64..10.0,
    )
        .prop_map(|(names, split, confidence, lift)| {
            let cut = 1 + split.index(names.len() - 1);
            let ante = ItemSet::try_from_names(names[..cut].iter().copied()).unwrap();
            let cons = ItemSet::try_from_names(names[cut..].iter().copied()).unwrap();
            Rule::new(ante, cons, RuleMetrics::new(confidence, lift)).unwrap()
        })
}

fn table() -> impl Strategy<Value = RuleTable> {
    prop::collection::vec(rule(), 0..30).prop_map(RuleTable::new)
}

fn options() -> impl Strategy<Value = PredictOptions> {
    (
        1usize..8,
        prop_oneof![Just(Metric::Confidence), Just(Metric::Lift)],
        any::<bool>(),
        prop_oneof![Just(TieBreak::TableOrder), Just(TieBreak::Explicit)],
    )
        .prop_map(|(top_n, metric, lift, tie_break)| {
            PredictOptions::new(top_n, metric)
                .with_lift(lift)
                .with_tie_break(tie_break)
        })
}

proptest! {
    #[test]
    fn every_item_comes_from_a_fired_rule(h in item_set(6), rules in table(), opts in options()) {
        let result = predict(&h, &rules, &opts).unwrap();
        for p in &result.predictions {
            let justified = rules.iter().any(|r| {
                r.antecedent().is_subset(&h) && r.consequent().contains(p.item.as_str())
            });
            prop_assert!(justified, "{} has no fired rule", p.item);
        }
    }

    #[test]
    fn length_never_exceeds_top_n(h in item_set(6), rules in table(), opts in options()) {
        let result = predict(&h, &rules, &opts).unwrap();
        prop_assert!(result.len() <= opts.top_n);
    }

    #[test]
    fn items_are_distinct(h in item_set(8), rules in table(), opts in options()) {
        let result = predict(&h, &rules, &opts).unwrap();
        let unique: HashSet<_> = result.items().collect();
        prop_assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn empty_history_predicts_nothing(rules in table(), opts in options()) {
        prop_assert!(predict(&ItemSet::new(), &rules, &opts).unwrap().is_empty());
    }

    #[test]
    fn empty_table_predicts_nothing(h in item_set(8), opts in options()) {
        prop_assert!(predict(&h, &RuleTable::default(), &opts).unwrap().is_empty());
    }

    #[test]
    fn prediction_is_deterministic(h in item_set(6), rules in table(), opts in options()) {
        let first = predict(&h, &rules, &opts).unwrap();
        let second = predict(&h, &rules, &opts).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scores_are_non_increasing(h in item_set(6), rules in table(), opts in options()) {
        let result = predict(&h, &rules, &opts).unwrap();
        for pair in result.predictions.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn lift_attached_only_when_requested(h in item_set(6), rules in table(), opts in options()) {
        let result = predict(&h, &rules, &opts).unwrap();
        for p in &result.predictions {
            prop_assert_eq!(p.lift.is_some(), opts.include_secondary_metric);
        }
    }

    #[test]
    fn full_history_emits_min_of_top_n_and_reachable_items(rules in table(), opts in options()) {
        let everything = ItemSet::try_from_names(ALPHABET).unwrap();
        let reachable: HashSet<&str> = rules
            .iter()
            .flat_map(|r| r.consequent().iter().map(|i| i.as_str()))
            .collect();
        let result = predict(&everything, &rules, &opts).unwrap();
        prop_assert_eq!(result.len(), reachable.len().min(opts.top_n));
    }
}
