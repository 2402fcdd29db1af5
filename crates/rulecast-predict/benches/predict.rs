use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rulecast_core::models::{ItemSet, Metric, Rule, RuleMetrics, RuleTable};
use rulecast_predict::{predict, PredictOptions};

/// Synthetic table: `n` rules over 200 items, one or two antecedents each.
fn synthetic_table(n: usize) -> RuleTable {
    (0..n)
        .map(|i| {
            let ante = if i % 3 == 0 {
                vec![format!("item{}", i % 200), format!("item{}", (i + 7) % 200)]
            } else {
                vec![format!("item{}", i % 200)]
            };
            let cons = vec![format!("item{}", (i + 101) % 200)];
            let confidence = ((i * 37) % 100) as f64 / 100.0;
            let lift = 1.0 + ((i * 13) % 50) as f64 / 10.0;
            Rule::new(
                ItemSet::try_from_names(ante).unwrap(),
                ItemSet::try_from_names(cons).unwrap(),
                RuleMetrics::new(confidence, lift),
            )
            .unwrap()
        })
        .collect()
}

fn bench_predict(c: &mut Criterion) {
    let history = ItemSet::try_from_names((0..20).map(|i| format!("item{}", i * 3))).unwrap();
    let options = PredictOptions::new(5, Metric::Confidence);

    for size in [1_000, 10_000] {
        let table = synthetic_table(size);
        c.bench_function(&format!("predict_{size}_rules"), |b| {
            b.iter(|| predict(black_box(&history), black_box(&table), &options))
        });
    }
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
