use rulecast_core::models::{ItemSet, Rule, RuleTable};

/// Rules whose whole antecedent is contained in `history`, in table order.
pub fn matching_rules<'a>(history: &ItemSet, rules: &'a RuleTable) -> Vec<&'a Rule> {
    if history.is_empty() {
        return Vec::new();
    }
    rules.iter().filter(|rule| rule.fires_on(history)).collect()
}
