//! RulePredictor, trait dispatch, batch prediction and sharing across threads.

use std::sync::Arc;
use std::thread;

use rulecast_core::config::IngestConfig;
use rulecast_core::errors::{PredictError, RulecastError};
use rulecast_core::models::{ItemSet, Metric, RuleTable};
use rulecast_core::traits::{IPredictor, IRuleSource};
use rulecast_ingest::CsvRuleSource;
use rulecast_predict::{predict, predict_batch, PredictOptions, RulePredictor};
use test_fixtures::{fixture_path, paths};

fn mined_table() -> Arc<RuleTable> {
    let source = CsvRuleSource::new(fixture_path(paths::RULES_MINED), IngestConfig::default());
    Arc::new(source.load_rules().unwrap())
}

fn history(names: &[&str]) -> ItemSet {
    ItemSet::try_from_names(names.iter().copied()).unwrap()
}

#[test]
fn predicts_from_loaded_fixture() {
    let predictor = RulePredictor::new(mined_table(), PredictOptions::default()).unwrap();
    let result = IPredictor::predict(&predictor, &history(&["google.com", "gmail.com"])).unwrap();

    let items: Vec<&str> = result.items().map(|i| i.as_str()).collect();
    // Rules firing: google=>youtube (0.70), google+gmail=>drive (0.75),
    // gmail=>{drive, google} (0.60), google=>gmail (0.50).
    assert_eq!(
        items,
        vec!["drive.google.com", "youtube.com", "google.com", "gmail.com"]
    );
    assert_eq!(result.predictions[0].lift, Some(5.0));
}

#[test]
fn trait_object_dispatch_matches_direct_call() {
    let table = mined_table();
    let options = PredictOptions::new(3, Metric::Lift);
    let predictor: Box<dyn IPredictor> =
        Box::new(RulePredictor::new(Arc::clone(&table), options).unwrap());

    let h = history(&["github.com", "google.com"]);
    let via_trait = predictor.predict(&h).unwrap();
    let direct = predict(&h, &table, &options).unwrap();
    assert_eq!(via_trait, direct);
}

#[test]
fn constructor_rejects_unusable_options() {
    let err = RulePredictor::new(mined_table(), PredictOptions::new(0, Metric::Confidence))
        .unwrap_err();
    assert_eq!(err, PredictError::InvalidTopN { top_n: 0 });

    let no_support = Arc::new(RuleTable::default());
    assert!(RulePredictor::new(no_support, PredictOptions::new(1, Metric::Support)).is_ok());
}

#[test]
fn trait_errors_convert_to_umbrella() {
    let predictor = RulePredictor::new(mined_table(), PredictOptions::default()).unwrap();
    let bad = PredictOptions::new(0, Metric::Confidence);
    assert!(predictor.predict_with(&history(&["google.com"]), &bad).is_err());

    let err: RulecastError = PredictError::InvalidTopN { top_n: 0 }.into();
    assert!(matches!(err, RulecastError::Predict(_)));
}

#[test]
fn batch_preserves_order_and_matches_single_calls() {
    let table = mined_table();
    let options = PredictOptions::new(2, Metric::Confidence);
    let histories = vec![
        history(&["google.com"]),
        ItemSet::new(),
        history(&["youtube.com"]),
        history(&["github.com"]),
    ];
    let batch = predict_batch(&histories, &table, &options).unwrap();
    assert_eq!(batch.len(), histories.len());
    for (h, result) in histories.iter().zip(&batch) {
        assert_eq!(result, &predict(h, &table, &options).unwrap());
    }
    assert!(batch[1].is_empty());
}

#[test]
fn batch_rejects_zero_top_n_up_front() {
    let err = predict_batch(&[], &RuleTable::default(), &PredictOptions::new(0, Metric::Lift))
        .unwrap_err();
    assert_eq!(err, PredictError::InvalidTopN { top_n: 0 });
}

#[test]
fn shared_table_across_threads() {
    let predictor = RulePredictor::new(mined_table(), PredictOptions::default()).unwrap();
    let expected = IPredictor::predict(&predictor, &history(&["google.com"])).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let p = predictor.clone();
            thread::spawn(move || IPredictor::predict(&p, &history(&["google.com"])).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(predictor.rules().len(), 6);
}

#[test]
fn predict_many_uses_bound_options() {
    let predictor =
        RulePredictor::new(mined_table(), PredictOptions::new(1, Metric::Confidence)).unwrap();
    let results = predictor
        .predict_many(&[history(&["google.com"]), history(&["youtube.com"])])
        .unwrap();
    assert!(results.iter().all(|r| r.len() == 1));
}
