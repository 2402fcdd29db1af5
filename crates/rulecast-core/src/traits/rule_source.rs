use crate::errors::RulecastResult;
use crate::models::RuleTable;

/// Anything that can produce a validated rule table.
pub trait IRuleSource {
    fn load_rules(&self) -> RulecastResult<RuleTable>;
}
