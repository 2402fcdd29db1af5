//! Command bodies. Each one splits into a compute step that returns
//! [`RulecastResult`] and a render step that writes to the output.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use rulecast_core::config::{IngestConfig, RulecastConfig};
use rulecast_core::errors::{ExploreError, RulecastError, RulecastResult};
use rulecast_core::models::{FrequencyTable, ItemSet, PredictionResult, RuleTable};
use rulecast_core::traits::IPredictor;
use rulecast_explore::{frequency_bins, top_k, MetricRange, RuleFilter, RuleStats};
use rulecast_ingest::{history_from_names, read_histories, FrequencyCsvReader, RulesCsvReader};
use rulecast_predict::{PredictOptions, RulePredictor};

use crate::cli::{BinsArgs, PredictArgs, PredictBatchArgs, RulesArgs, ServicesArgs, StatsArgs};
use crate::output::{self, OutputFormat};

pub fn predict(
    args: &PredictArgs,
    mut config: RulecastConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    args.predict.apply(&mut config.predict);
    args.ingest.apply(&mut config.ingest);

    let (history, result) = predict_one(args, &config)?;
    output::write_prediction(out, &history, &result, format).context("writing predictions")
}

fn predict_one(
    args: &PredictArgs,
    config: &RulecastConfig,
) -> RulecastResult<(ItemSet, PredictionResult)> {
    let history = history_from_names(&args.history)?;
    let rules = load_rules(&args.rules, &config.ingest)?;
    let predictor = RulePredictor::new(Arc::new(rules), PredictOptions::from(&config.predict))?;
    let result = predictor.predict(&history)?;
    Ok((history, result))
}

pub fn predict_batch(
    args: &PredictBatchArgs,
    mut config: RulecastConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    args.predict.apply(&mut config.predict);
    args.ingest.apply(&mut config.ingest);

    let (histories, results) = predict_many(args, &config)?;
    output::write_batch(out, &histories, &results).context("writing predictions")
}

fn predict_many(
    args: &PredictBatchArgs,
    config: &RulecastConfig,
) -> RulecastResult<(Vec<ItemSet>, Vec<PredictionResult>)> {
    let histories = read_histories(&args.histories)?;
    let rules = load_rules(&args.rules, &config.ingest)?;
    let predictor = RulePredictor::new(Arc::new(rules), PredictOptions::from(&config.predict))?;
    let results = predictor.predict_many(&histories)?;
    Ok((histories, results))
}

pub fn rules(
    args: &RulesArgs,
    mut config: RulecastConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    args.ingest.apply(&mut config.ingest);

    let filter = rule_filter(args)?;
    let table = load_rules(&args.rules, &config.ingest)?;
    let kept = filter.apply(&table);
    output::write_rules(out, &kept, format).context("writing rules")
}

fn rule_filter(args: &RulesArgs) -> RulecastResult<RuleFilter> {
    let mut filter = RuleFilter::new()
        .confidence(range("confidence", args.min_confidence, args.max_confidence)?)
        .lift(range("lift", args.min_lift, args.max_lift)?);
    if args.min_support.is_some() || args.max_support.is_some() {
        filter = filter.support(range("support", args.min_support, args.max_support)?);
    }
    if let Some(metric) = args.sort_by {
        filter = filter.sort_by(metric, !args.ascending);
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }
    Ok(filter)
}

fn range(
    field: &'static str,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<MetricRange, ExploreError> {
    MetricRange::new(
        field,
        min.unwrap_or(f64::NEG_INFINITY),
        max.unwrap_or(f64::INFINITY),
    )
}

pub fn stats(
    args: &StatsArgs,
    mut config: RulecastConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    args.ingest.apply(&mut config.ingest);

    let table = load_rules(&args.rules, &config.ingest)?;
    let stats = RuleStats::compute(&table);
    output::write_stats(out, &stats, format).context("writing statistics")
}

pub fn services(
    args: &ServicesArgs,
    mut config: RulecastConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    args.ingest.apply(&mut config.ingest);
    let k = args.top_k.unwrap_or(config.explore.top_k);

    let table = load_frequencies(&args.frequencies, &config.ingest)?;
    let top = top_k(&table, k).map_err(RulecastError::from)?;
    output::write_services(out, &top, format).context("writing services")
}

pub fn bins(
    args: &BinsArgs,
    mut config: RulecastConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    args.ingest.apply(&mut config.ingest);
    let bin_size = args.bin_size.unwrap_or(config.explore.bin_size);

    let table = load_frequencies(&args.frequencies, &config.ingest)?;
    let bins = frequency_bins(&table, bin_size).map_err(RulecastError::from)?;
    output::write_bins(out, &bins, format).context("writing bins")
}

fn load_rules(path: &Path, ingest: &IngestConfig) -> RulecastResult<RuleTable> {
    let (table, _report) = RulesCsvReader::new(ingest.clone()).read_path(path)?;
    Ok(table)
}

fn load_frequencies(path: &Path, ingest: &IngestConfig) -> RulecastResult<FrequencyTable> {
    let (table, _report) = FrequencyCsvReader::new(ingest.clone()).read_path(path)?;
    Ok(table)
}
