//! Reader for mined association-rule tables.
//!
//! Required columns: `antecedents`, `consequents`, `confidence`, `lift`.
//! Optional: `support`, `leverage`, `conviction`. Other columns (the pandas
//! index, `antecedent support`, `zhangs_metric`, ...) are ignored.

use std::io::Read;
use std::path::Path;

use rulecast_core::config::{IngestConfig, MalformedRowPolicy};
use rulecast_core::constants::columns;
use rulecast_core::errors::IngestError;
use rulecast_core::models::{Rule, RuleMetrics, RuleTable};
use rulecast_observability::events;

use crate::reader::{self, IngestReport};
use crate::set_literal::parse_item_set;

struct RuleColumns {
    antecedents: usize,
    consequents: usize,
    confidence: usize,
    lift: usize,
    support: Option<usize>,
    leverage: Option<usize>,
    conviction: Option<usize>,
}

impl RuleColumns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, IngestError> {
        Ok(Self {
            antecedents: reader::require_column(headers, columns::ANTECEDENTS)?,
            consequents: reader::require_column(headers, columns::CONSEQUENTS)?,
            confidence: reader::require_column(headers, columns::CONFIDENCE)?,
            lift: reader::require_column(headers, columns::LIFT)?,
            support: reader::find_column(headers, columns::SUPPORT),
            leverage: reader::find_column(headers, columns::LEVERAGE),
            conviction: reader::find_column(headers, columns::CONVICTION),
        })
    }
}

/// Reads a rules CSV into a validated [`RuleTable`].
#[derive(Debug, Clone, Default)]
pub struct RulesCsvReader {
    config: IngestConfig,
}

impl RulesCsvReader {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn read_path(&self, path: &Path) -> Result<(RuleTable, IngestReport), IngestError> {
        let source = path.display().to_string();
        let _span = rulecast_observability::ingest_span!(source).entered();
        let (table, report) = self.read(reader::open(path)?)?;
        events::rules_loaded(&source, report.loaded, report.skipped);
        Ok((table, report))
    }

    pub fn read<R: Read>(&self, input: R) -> Result<(RuleTable, IngestReport), IngestError> {
        let mut csv = reader::csv_reader(&self.config, input)?;
        let headers = csv.headers().map_err(reader::csv_error)?.clone();
        let cols = RuleColumns::locate(&headers)?;

        let mut rules = Vec::new();
        let mut report = IngestReport::default();
        for (index, record) in csv.records().enumerate() {
            let record = record.map_err(reader::csv_error)?;
            let line = reader::line_of(&record, index as u64 + 2);
            match parse_row(&record, &cols) {
                Ok(rule) => {
                    rules.push(rule);
                    report.loaded += 1;
                }
                Err(reason) => match self.config.malformed_rows {
                    MalformedRowPolicy::Reject => {
                        return Err(IngestError::MalformedRow { line, reason })
                    }
                    MalformedRowPolicy::Skip => {
                        events::row_skipped(line, &reason);
                        report.skipped += 1;
                    }
                },
            }
        }
        Ok((RuleTable::new(rules), report))
    }
}

fn parse_row(record: &csv::StringRecord, cols: &RuleColumns) -> Result<Rule, String> {
    let antecedent = parse_item_set(reader::cell(record, cols.antecedents, columns::ANTECEDENTS)?)
        .map_err(|e| format!("{}: {e}", columns::ANTECEDENTS))?;
    let consequent = parse_item_set(reader::cell(record, cols.consequents, columns::CONSEQUENTS)?)
        .map_err(|e| format!("{}: {e}", columns::CONSEQUENTS))?;

    let confidence = required_number(record, cols.confidence, columns::CONFIDENCE)?;
    let lift = required_number(record, cols.lift, columns::LIFT)?;
    let mut metrics = RuleMetrics::new(confidence, lift);
    if let Some(support) = optional_number(record, cols.support, columns::SUPPORT)? {
        metrics = metrics.with_support(support);
    }
    if let Some(leverage) = optional_number(record, cols.leverage, columns::LEVERAGE)? {
        metrics = metrics.with_leverage(leverage);
    }
    // Miners report conviction as inf when confidence is 1.
    if let Some(conviction) = optional_number(record, cols.conviction, columns::CONVICTION)?
        .filter(|c| c.is_finite())
    {
        metrics = metrics.with_conviction(conviction);
    }

    Rule::new(antecedent, consequent, metrics).map_err(|e| e.to_string())
}

fn number(raw: &str, column: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("{column}: `{raw}` is not a number"))
}

fn required_number(record: &csv::StringRecord, index: usize, column: &str) -> Result<f64, String> {
    let raw = reader::cell(record, index, column)?;
    if raw.is_empty() {
        return Err(format!("{column} is empty"));
    }
    number(raw, column)
}

fn optional_number(
    record: &csv::StringRecord,
    index: Option<usize>,
    column: &str,
) -> Result<Option<f64>, String> {
    match index.and_then(|i| record.get(i)) {
        None | Some("") => Ok(None),
        Some(raw) => number(raw, column).map(Some),
    }
}
