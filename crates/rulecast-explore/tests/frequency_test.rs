use rulecast_core::config::IngestConfig;
use rulecast_core::constants::MAX_FREQUENCY_BINS;
use rulecast_core::errors::ExploreError;
use rulecast_core::models::FrequencyTable;
use rulecast_explore::{frequency_bins, top_k, FrequencyBin};
use rulecast_ingest::FrequencyCsvReader;
use test_fixtures::{fixture_path, paths};

fn frequencies() -> FrequencyTable {
    FrequencyCsvReader::new(IngestConfig::default())
        .read_path(&fixture_path(paths::SERVICE_FREQUENCIES))
        .unwrap()
        .0
}

#[test]
fn top_k_returns_most_frequent_first() {
    let table = frequencies();
    let top: Vec<&str> = top_k(&table, 3)
        .unwrap()
        .iter()
        .map(|e| e.service.as_str())
        .collect();
    assert_eq!(top, vec!["google.com", "youtube.com", "gmail.com"]);
}

#[test]
fn top_k_sorts_unsorted_input_and_keeps_ties_in_order() {
    let table = FrequencyTable::new(vec![
        entry("b", 5),
        entry("a", 9),
        entry("c", 5),
    ]);
    let top: Vec<&str> = top_k(&table, 10)
        .unwrap()
        .iter()
        .map(|e| e.service.as_str())
        .collect();
    assert_eq!(top, vec!["a", "b", "c"]);
}

#[test]
fn top_k_zero_is_an_error() {
    assert_eq!(
        top_k(&frequencies(), 0).unwrap_err(),
        ExploreError::InvalidTopK { k: 0 }
    );
}

#[test]
fn bins_cover_zero_to_max() {
    let bins = frequency_bins(&frequencies(), 50).unwrap();
    assert_eq!(
        bins,
        vec![
            FrequencyBin { lower: 0, upper: 50, count: 5 },
            FrequencyBin { lower: 50, upper: 100, count: 2 },
            FrequencyBin { lower: 100, upper: 150, count: 1 },
        ]
    );
}

#[test]
fn bins_keep_empty_buckets() {
    let table = FrequencyTable::new(vec![entry("a", 1), entry("b", 35)]);
    let counts: Vec<usize> = frequency_bins(&table, 10)
        .unwrap()
        .iter()
        .map(|b| b.count)
        .collect();
    assert_eq!(counts, vec![1, 0, 0, 1]);
}

#[test]
fn bins_total_matches_table_len() {
    let table = frequencies();
    let bins = frequency_bins(&table, 7).unwrap();
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), table.len());
}

#[test]
fn empty_table_has_no_bins() {
    assert!(frequency_bins(&FrequencyTable::default(), 10).unwrap().is_empty());
}

#[test]
fn last_edge_is_clamped_instead_of_overflowing() {
    let table = FrequencyTable::new(vec![entry("a", 0), entry("b", u64::MAX)]);
    let half = u64::MAX / 2 + 1;
    let bins = frequency_bins(&table, half).unwrap();
    assert_eq!(
        bins,
        vec![
            FrequencyBin { lower: 0, upper: half, count: 1 },
            FrequencyBin { lower: half, upper: u64::MAX, count: 1 },
        ]
    );
}

#[test]
fn bin_size_larger_than_max_gives_one_bin() {
    let table = FrequencyTable::new(vec![entry("a", u64::MAX - 1)]);
    let bins = frequency_bins(&table, u64::MAX).unwrap();
    assert_eq!(bins, vec![FrequencyBin { lower: 0, upper: u64::MAX, count: 1 }]);
}

#[test]
fn too_many_bins_is_rejected_before_allocating() {
    let table = FrequencyTable::new(vec![entry("a", 50_000_000_000)]);
    assert_eq!(
        frequency_bins(&table, 10).unwrap_err(),
        ExploreError::TooManyBins {
            bin_size: 10,
            bins: 5_000_000_000,
            limit: MAX_FREQUENCY_BINS,
        }
    );
}

#[test]
fn bin_count_at_the_limit_is_allowed() {
    let table = FrequencyTable::new(vec![entry("a", MAX_FREQUENCY_BINS * 10)]);
    let bins = frequency_bins(&table, 10).unwrap();
    assert_eq!(bins.len() as u64, MAX_FREQUENCY_BINS);
    assert_eq!(bins.last().unwrap().count, 1);
}

#[test]
fn zero_bin_size_is_an_error() {
    assert_eq!(
        frequency_bins(&frequencies(), 0).unwrap_err(),
        ExploreError::InvalidBinSize { bin_size: 0 }
    );
}

fn entry(name: &str, frequency: u64) -> rulecast_core::models::ServiceFrequency {
    rulecast_core::models::ServiceFrequency {
        service: rulecast_core::models::ItemId::parse(name).unwrap(),
        frequency,
    }
}
