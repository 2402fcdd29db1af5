use serde::Serialize;

use rulecast_core::models::{Metric, RuleTable};

/// Min / max / mean of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of rules that carried the metric.
    pub count: usize,
}

impl MetricSummary {
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
            count,
        })
    }
}

/// Headline numbers for a rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleStats {
    pub rules: usize,
    pub distinct_items: usize,
    pub confidence: Option<MetricSummary>,
    pub lift: Option<MetricSummary>,
    /// Over the rules that carry support.
    pub support: Option<MetricSummary>,
}

impl RuleStats {
    pub fn compute(table: &RuleTable) -> Self {
        let summary = |metric: Metric| {
            MetricSummary::from_values(table.iter().filter_map(|r| r.metric(metric)))
        };
        Self {
            rules: table.len(),
            distinct_items: table.items().len(),
            confidence: summary(Metric::Confidence),
            lift: summary(Metric::Lift),
            support: summary(Metric::Support),
        }
    }
}
