use serde::{Deserialize, Serialize};

use super::{ItemSet, Metric};
use crate::constants::METRIC_TOLERANCE;
use crate::errors::RuleError;

/// Interestingness measures attached to a mined rule.
///
/// Only `confidence` and `lift` are required; the rest are carried when the
/// producer emitted them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleMetrics {
    pub support: Option<f64>,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: Option<f64>,
    pub conviction: Option<f64>,
}

impl RuleMetrics {
    pub fn new(confidence: f64, lift: f64) -> Self {
        Self {
            support: None,
            confidence,
            lift,
            leverage: None,
            conviction: None,
        }
    }

    pub fn with_support(mut self, support: f64) -> Self {
        self.support = Some(support);
        self
    }

    pub fn with_leverage(mut self, leverage: f64) -> Self {
        self.leverage = Some(leverage);
        self
    }

    pub fn with_conviction(mut self, conviction: f64) -> Self {
        self.conviction = Some(conviction);
        self
    }

    /// Check ranges and clamp values that overshoot a bound by float noise.
    fn validated(self) -> Result<Self, RuleError> {
        Ok(Self {
            support: self
                .support
                .map(|s| unit_interval("support", s))
                .transpose()?,
            confidence: unit_interval("confidence", self.confidence)?,
            lift: non_negative("lift", self.lift)?,
            leverage: self.leverage.map(|l| finite("leverage", l)).transpose()?,
            conviction: self
                .conviction
                .map(|c| non_negative("conviction", c))
                .transpose()?,
        })
    }
}

fn finite(metric: &'static str, value: f64) -> Result<f64, RuleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuleError::NonFiniteMetric { metric })
    }
}

fn unit_interval(metric: &'static str, value: f64) -> Result<f64, RuleError> {
    let value = finite(metric, value)?;
    if !(-METRIC_TOLERANCE..=1.0 + METRIC_TOLERANCE).contains(&value) {
        return Err(RuleError::MetricOutOfRange {
            metric,
            value,
            bounds: "[0, 1]",
        });
    }
    Ok(value.clamp(0.0, 1.0))
}

fn non_negative(metric: &'static str, value: f64) -> Result<f64, RuleError> {
    let value = finite(metric, value)?;
    if value < -METRIC_TOLERANCE {
        return Err(RuleError::MetricOutOfRange {
            metric,
            value,
            bounds: "[0, inf)",
        });
    }
    Ok(value.max(0.0))
}

/// One mined association rule `antecedent => consequent`.
///
/// Immutable once built. Both sides are non-empty and disjoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    antecedent: ItemSet,
    consequent: ItemSet,
    metrics: RuleMetrics,
}

impl Rule {
    pub fn new(
        antecedent: ItemSet,
        consequent: ItemSet,
        metrics: RuleMetrics,
    ) -> Result<Self, RuleError> {
        if antecedent.is_empty() {
            return Err(RuleError::EmptyAntecedent);
        }
        if consequent.is_empty() {
            return Err(RuleError::EmptyConsequent);
        }
        if !antecedent.is_disjoint(&consequent) {
            let shared: Vec<&str> = antecedent
                .intersection(&consequent)
                .map(|i| i.as_str())
                .collect();
            return Err(RuleError::OverlappingItems {
                items: shared.join(", "),
            });
        }
        Ok(Self {
            antecedent,
            consequent,
            metrics: metrics.validated()?,
        })
    }

    pub fn antecedent(&self) -> &ItemSet {
        &self.antecedent
    }

    pub fn consequent(&self) -> &ItemSet {
        &self.consequent
    }

    pub fn metrics(&self) -> &RuleMetrics {
        &self.metrics
    }

    pub fn confidence(&self) -> f64 {
        self.metrics.confidence
    }

    pub fn lift(&self) -> f64 {
        self.metrics.lift
    }

    /// Value of `metric` on this rule, `None` if the producer did not supply it.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Confidence => Some(self.metrics.confidence),
            Metric::Lift => Some(self.metrics.lift),
            Metric::Support => self.metrics.support,
        }
    }

    /// Whether this rule fires for `history`: every antecedent item is present.
    pub fn fires_on(&self, history: &ItemSet) -> bool {
        self.antecedent.is_subset(history)
    }
}
