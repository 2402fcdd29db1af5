use serde::Serialize;

use rulecast_core::constants::MAX_FREQUENCY_BINS;
use rulecast_core::errors::ExploreError;
use rulecast_core::models::{FrequencyTable, ServiceFrequency};

/// The `k` most frequent services, highest first. Equal frequencies keep
/// source order. `k` larger than the table returns every entry.
pub fn top_k(table: &FrequencyTable, k: usize) -> Result<Vec<&ServiceFrequency>, ExploreError> {
    if k == 0 {
        return Err(ExploreError::InvalidTopK { k });
    }
    let _span = rulecast_observability::explore_span!("top_k").entered();
    let mut entries: Vec<&ServiceFrequency> = table.entries().iter().collect();
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(k);
    Ok(entries)
}

/// One histogram bucket. The first bucket is `[lower, upper]`, every later
/// one is `(lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyBin {
    pub lower: u64,
    pub upper: u64,
    /// Number of services whose frequency falls in the bucket.
    pub count: usize,
}

/// Bucket service frequencies into bins of width `bin_size`, starting at 0.
///
/// Bins run up to the first edge at or above the maximum frequency; empty
/// bins are kept so the distribution has no gaps. An edge past `u64::MAX`
/// is clamped to `u64::MAX`. More than [`MAX_FREQUENCY_BINS`] bins is an
/// error.
pub fn frequency_bins(
    table: &FrequencyTable,
    bin_size: u64,
) -> Result<Vec<FrequencyBin>, ExploreError> {
    if bin_size == 0 {
        return Err(ExploreError::InvalidBinSize { bin_size });
    }
    let Some(max) = table.max_frequency() else {
        return Ok(Vec::new());
    };
    let _span = rulecast_observability::explore_span!("bins").entered();

    let bin_count = max.div_ceil(bin_size).max(1);
    if bin_count > MAX_FREQUENCY_BINS {
        return Err(ExploreError::TooManyBins {
            bin_size,
            bins: bin_count,
            limit: MAX_FREQUENCY_BINS,
        });
    }
    // Every lower edge is below `max`, so only the last upper edge can overflow.
    let mut bins: Vec<FrequencyBin> = (0..bin_count)
        .map(|i| FrequencyBin {
            lower: i * bin_size,
            upper: (i + 1).saturating_mul(bin_size),
            count: 0,
        })
        .collect();

    for entry in table.entries() {
        // Right-closed: f lands in bin ceil(f / b) - 1; zero joins the first bin.
        let index = entry.frequency.div_ceil(bin_size).saturating_sub(1) as usize;
        bins[index].count += 1;
    }
    Ok(bins)
}
