use serde::Serialize;

use super::{ItemSet, Metric, Rule};

/// Read-only collection of mined rules.
///
/// Owned by the caller and never mutated after construction, so it can be
/// shared behind an `Arc` across concurrent predictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleTable {
    rules: Vec<Rule>,
    #[serde(skip)]
    support_on_every_rule: bool,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        let support_on_every_rule = rules.iter().all(|r| r.metrics().support.is_some());
        Self {
            rules,
            support_on_every_rule,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Whether `metric` is present on every rule. Vacuously true when empty.
    pub fn has_metric(&self, metric: Metric) -> bool {
        match metric {
            Metric::Confidence | Metric::Lift => true,
            Metric::Support => self.support_on_every_rule,
        }
    }

    /// Every distinct item mentioned on either side of any rule.
    pub fn items(&self) -> ItemSet {
        let mut items = ItemSet::new();
        for rule in &self.rules {
            items.extend_from(rule.antecedent());
            items.extend_from(rule.consequent());
        }
        items
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
