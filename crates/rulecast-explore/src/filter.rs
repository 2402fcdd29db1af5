use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rulecast_core::errors::ExploreError;
use rulecast_core::models::{Metric, Rule, RuleTable};

/// Inclusive `[min, max]` bound on a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    min: f64,
    max: f64,
}

impl MetricRange {
    pub fn new(field: &'static str, min: f64, max: f64) -> Result<Self, ExploreError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ExploreError::InvalidRange { field, min, max });
        }
        Ok(Self { min, max })
    }

    /// Everything.
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for MetricRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Threshold filter over a rule table, as driven by range sliders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleFilter {
    pub confidence: MetricRange,
    pub lift: MetricRange,
    /// Rules without support fail this range.
    pub support: Option<MetricRange>,
    pub sort_by: Option<Metric>,
    pub descending: bool,
    pub limit: Option<usize>,
}

impl RuleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confidence(mut self, range: MetricRange) -> Self {
        self.confidence = range;
        self
    }

    pub fn lift(mut self, range: MetricRange) -> Self {
        self.lift = range;
        self
    }

    pub fn support(mut self, range: MetricRange) -> Self {
        self.support = Some(range);
        self
    }

    pub fn sort_by(mut self, metric: Metric, descending: bool) -> Self {
        self.sort_by = Some(metric);
        self.descending = descending;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn accepts(&self, rule: &Rule) -> bool {
        self.confidence.contains(rule.confidence())
            && self.lift.contains(rule.lift())
            && self
                .support
                .map_or(true, |range| rule.metrics().support.is_some_and(|s| range.contains(s)))
    }

    /// Matching rules, stable-sorted by `sort_by` and truncated to `limit`.
    ///
    /// When sorting, rules missing the sort metric go last.
    pub fn apply<'a>(&self, rules: &'a RuleTable) -> Vec<&'a Rule> {
        let _span = rulecast_observability::explore_span!("filter").entered();
        let mut kept: Vec<&Rule> = rules.iter().filter(|r| self.accepts(r)).collect();

        if let Some(metric) = self.sort_by {
            kept.sort_by(|a, b| match (a.metric(metric), b.metric(metric)) {
                (Some(x), Some(y)) => {
                    let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                    if self.descending {
                        ord.reverse()
                    } else {
                        ord
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        if let Some(limit) = self.limit {
            kept.truncate(limit);
        }
        tracing::debug!(total = rules.len(), kept = kept.len(), "rules filtered");
        kept
    }
}
