//! # rulecast-ingest
//!
//! Boundary adapters that turn externally produced tables into validated
//! domain types.
//!
//! | Input | Reader |
//! |-------|--------|
//! | Mined association rules | [`RulesCsvReader`] |
//! | Service frequencies | [`FrequencyCsvReader`] |
//! | User history text | [`parse_history`] |
//! | Histories file, one per line | [`read_histories`] |
//!
//! Set-valued cells are parsed with a strict grammar ([`parse_item_set`]);
//! nothing read from a file is ever evaluated.

pub mod frequency_csv;
pub mod history;
mod reader;
pub mod rules_csv;
pub mod set_literal;
pub mod source;

pub use frequency_csv::FrequencyCsvReader;
pub use history::{history_from_names, parse_history, parse_history_lines, read_histories};
pub use reader::IngestReport;
pub use rules_csv::RulesCsvReader;
pub use set_literal::parse_item_set;
pub use source::CsvRuleSource;
