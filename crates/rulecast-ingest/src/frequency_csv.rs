//! Reader for service-frequency tables (`Service,Frequency`).

use std::io::Read;
use std::path::Path;

use rulecast_core::config::{IngestConfig, MalformedRowPolicy};
use rulecast_core::constants::columns;
use rulecast_core::errors::IngestError;
use rulecast_core::models::{FrequencyTable, ItemId, ServiceFrequency};
use rulecast_observability::events;

use crate::reader::{self, IngestReport};

/// Reads a frequency CSV, preserving row order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCsvReader {
    config: IngestConfig,
}

impl FrequencyCsvReader {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn read_path(&self, path: &Path) -> Result<(FrequencyTable, IngestReport), IngestError> {
        let source = path.display().to_string();
        let _span = rulecast_observability::ingest_span!(source).entered();
        let (table, report) = self.read(reader::open(path)?)?;
        events::frequencies_loaded(&source, report.loaded, report.skipped);
        Ok((table, report))
    }

    pub fn read<R: Read>(&self, input: R) -> Result<(FrequencyTable, IngestReport), IngestError> {
        let mut csv = reader::csv_reader(&self.config, input)?;
        let headers = csv.headers().map_err(reader::csv_error)?.clone();
        let service_col = reader::require_column(&headers, columns::SERVICE)?;
        let frequency_col = reader::require_column(&headers, columns::FREQUENCY)?;

        let mut entries = Vec::new();
        let mut report = IngestReport::default();
        for (index, record) in csv.records().enumerate() {
            let record = record.map_err(reader::csv_error)?;
            let line = reader::line_of(&record, index as u64 + 2);
            match parse_row(&record, service_col, frequency_col) {
                Ok(entry) => {
                    entries.push(entry);
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
        Ok((FrequencyTable::new(entries), report))
    }
}

fn parse_row(
    record: &csv::StringRecord,
    service_col: usize,
    frequency_col: usize,
) -> Result<ServiceFrequency, String> {
    let service = ItemId::parse(reader::cell(record, service_col, columns::SERVICE)?)
        .map_err(|e| format!("{}: {e}", columns::SERVICE))?;
    let raw = reader::cell(record, frequency_col, columns::FREQUENCY)?;
    Ok(ServiceFrequency {
        service,
        frequency: parse_count(raw)?,
    })
}

/// Non-negative integer count. Whole floats such as `12.0` are accepted.
fn parse_count(raw: &str) -> Result<u64, String> {
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        _ => Err(format!(
            "{}: `{raw}` is not a non-negative integer",
            columns::FREQUENCY
        )),
    }
}
