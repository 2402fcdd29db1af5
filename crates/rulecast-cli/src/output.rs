//! Text and JSON renderings of command results.

use std::io::{self, Write};

use serde::Serialize;

use rulecast_core::models::{ItemSet, PredictionResult, Rule, ServiceFrequency};
use rulecast_explore::{FrequencyBin, MetricSummary, RuleStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One history with its predictions; the JSON shape of `predict` and each
/// line of `predict-batch`.
#[derive(Serialize)]
struct PredictionLine<'a> {
    history: &'a ItemSet,
    #[serde(flatten)]
    result: &'a PredictionResult,
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

pub fn write_prediction(
    out: &mut dyn Write,
    history: &ItemSet,
    result: &PredictionResult,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &PredictionLine { history, result });
    }

    writeln!(out, "history: {history}")?;
    if result.is_empty() {
        return writeln!(out, "no predictions");
    }
    let width = column_width(result.items().map(|i| i.as_str()), "item");
    writeln!(
        out,
        "{:<4}  {:<width$}  {:>10}  {:>10}",
        "rank",
        "item",
        result.metric.as_str(),
        "lift"
    )?;
    for (rank, p) in result.predictions.iter().enumerate() {
        let lift = p.lift.map_or_else(|| "-".to_string(), |l| format!("{l:.4}"));
        writeln!(
            out,
            "{:<4}  {:<width$}  {:>10.4}  {:>10}",
            rank + 1,
            p.item.as_str(),
            p.score,
            lift
        )?;
    }
    Ok(())
}

/// Always JSON lines, in input order.
pub fn write_batch(
    out: &mut dyn Write,
    histories: &[ItemSet],
    results: &[PredictionResult],
) -> io::Result<()> {
    for (history, result) in histories.iter().zip(results) {
        write_json(out, &PredictionLine { history, result })?;
    }
    Ok(())
}

pub fn write_rules(out: &mut dyn Write, rules: &[&Rule], format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, rules);
    }

    let labels: Vec<String> = rules
        .iter()
        .map(|r| format!("{} => {}", r.antecedent(), r.consequent()))
        .collect();
    let width = column_width(labels.iter().map(String::as_str), "rule");
    writeln!(
        out,
        "{:<width$}  {:>10}  {:>10}  {:>10}",
        "rule", "confidence", "lift", "support"
    )?;
    for (label, rule) in labels.iter().zip(rules) {
        let support = rule
            .metrics()
            .support
            .map_or_else(|| "-".to_string(), |s| format!("{s:.4}"));
        writeln!(
            out,
            "{label:<width$}  {:>10.4}  {:>10.4}  {support:>10}",
            rule.confidence(),
            rule.lift()
        )?;
    }
    writeln!(out, "{} rule(s)", rules.len())
}

pub fn write_stats(
    out: &mut dyn Write,
    stats: &RuleStats,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, stats);
    }

    writeln!(out, "{:<15}{}", "rules", stats.rules)?;
    writeln!(out, "{:<15}{}", "distinct items", stats.distinct_items)?;
    for (name, summary) in [
        ("confidence", &stats.confidence),
        ("lift", &stats.lift),
        ("support", &stats.support),
    ] {
        writeln!(out, "{name:<15}{}", summary_text(summary.as_ref()))?;
    }
    Ok(())
}

fn summary_text(summary: Option<&MetricSummary>) -> String {
    match summary {
        Some(s) => format!(
            "min {:.4}  max {:.4}  mean {:.4}  ({} rules)",
            s.min, s.max, s.mean, s.count
        ),
        None => "n/a".to_string(),
    }
}

pub fn write_services(
    out: &mut dyn Write,
    entries: &[&ServiceFrequency],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, entries);
    }

    let width = column_width(entries.iter().map(|e| e.service.as_str()), "service");
    writeln!(out, "{:<4}  {:<width$}  {:>9}", "rank", "service", "frequency")?;
    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:<4}  {:<width$}  {:>9}",
            rank + 1,
            entry.service.as_str(),
            entry.frequency
        )?;
    }
    Ok(())
}

pub fn write_bins(
    out: &mut dyn Write,
    bins: &[FrequencyBin],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, bins);
    }

    for (i, bin) in bins.iter().enumerate() {
        writeln!(out, "{:<20}  {}", bin_label(i, bin), bin.count)?;
    }
    Ok(())
}

fn bin_label(index: usize, bin: &FrequencyBin) -> String {
    let open = if index == 0 { '[' } else { '(' };
    format!("{open}{}, {}]", bin.lower, bin.upper)
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
