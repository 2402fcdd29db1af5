use std::path::PathBuf;

use rulecast_core::config::IngestConfig;
use rulecast_core::errors::RulecastResult;
use rulecast_core::models::RuleTable;
use rulecast_core::traits::IRuleSource;

use crate::rules_csv::RulesCsvReader;

/// A rules CSV on the local filesystem.
#[derive(Debug, Clone)]
pub struct CsvRuleSource {
    path: PathBuf,
    reader: RulesCsvReader,
}

impl CsvRuleSource {
    pub fn new(path: impl Into<PathBuf>, config: IngestConfig) -> Self {
        Self {
            path: path.into(),
            reader: RulesCsvReader::new(config),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl IRuleSource for CsvRuleSource {
    fn load_rules(&self) -> RulecastResult<RuleTable> {
        let (table, _report) = self.reader.read_path(&self.path)?;
        Ok(table)
    }
}
