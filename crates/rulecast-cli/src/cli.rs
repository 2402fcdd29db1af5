use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use rulecast_core::config::{
    IngestConfig, MalformedRowPolicy, PredictConfig, RulecastConfig, TieBreak,
};
use rulecast_core::errors::{RulecastError, RulecastErrorCode};
use rulecast_core::models::Metric;

use crate::commands;
use crate::output::OutputFormat;

/// Code printed for failures outside the rulecast error taxonomy (e.g. a
/// closed stdout).
pub const CLI_ERROR: &str = "CLI_ERROR";

#[derive(Debug, Parser)]
#[command(
    name = "rulecast",
    about = "Next-item prediction from mined association rules",
    version
)]
pub struct Cli {
    /// TOML configuration file. Environment variables and flags override it.
    #[arg(long, global = true, value_name = "FILE", env = "RULECAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict the next items for one history.
    Predict(PredictArgs),

    /// Predict for every history in a file, one JSON line per history.
    #[command(name = "predict-batch")]
    PredictBatch(PredictBatchArgs),

    /// List rules inside metric thresholds.
    Rules(RulesArgs),

    /// Summary statistics of a rule table.
    Stats(StatsArgs),

    /// Most frequent services.
    Services(ServicesArgs),

    /// Service frequency distribution.
    Bins(BinsArgs),
}

/// Overrides for the `[predict]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct PredictFlags {
    /// Maximum number of predicted items.
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Ranking metric: confidence, lift or support.
    #[arg(long, value_name = "METRIC")]
    pub metric: Option<Metric>,

    /// Leave the producing rule's lift out of the output.
    #[arg(long)]
    pub no_lift: bool,

    /// Ordering of equally ranked rules: table-order or explicit.
    #[arg(long, value_name = "MODE")]
    pub tie_break: Option<TieBreak>,
}

impl PredictFlags {
    pub fn apply(&self, config: &mut PredictConfig) {
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if self.no_lift {
            config.include_lift = false;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
    }
}

/// Overrides for the `[ingest]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct IngestFlags {
    /// Skip malformed CSV rows instead of failing.
    #[arg(long)]
    pub skip_malformed: bool,
}

impl IngestFlags {
    pub fn apply(&self, config: &mut IngestConfig) {
        if self.skip_malformed {
            config.malformed_rows = MalformedRowPolicy::Skip;
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    /// Rules CSV.
    #[arg(long, value_name = "FILE")]
    pub rules: PathBuf,

    /// History items, as names, comma lists or a set literal.
    #[arg(long, required = true, num_args = 1.., value_name = "ITEM")]
    pub history: Vec<String>,

    #[command(flatten)]
    pub predict: PredictFlags,

    #[command(flatten)]
    pub ingest: IngestFlags,
}

#[derive(Debug, Clone, Args)]
pub struct PredictBatchArgs {
    /// Rules CSV.
    #[arg(long, value_name = "FILE")]
    pub rules: PathBuf,

    /// Text file with one history per line.
    #[arg(long, value_name = "FILE")]
    pub histories: PathBuf,

    #[command(flatten)]
    pub predict: PredictFlags,

    #[command(flatten)]
    pub ingest: IngestFlags,
}

#[derive(Debug, Clone, Args)]
pub struct RulesArgs {
    /// Rules CSV.
    #[arg(long, value_name = "FILE")]
    pub rules: PathBuf,

    #[arg(long)]
    pub min_confidence: Option<f64>,

    #[arg(long)]
    pub max_confidence: Option<f64>,

    #[arg(long)]
    pub min_lift: Option<f64>,

    #[arg(long)]
    pub max_lift: Option<f64>,

    /// Setting either support bound drops rules without support.
    #[arg(long)]
    pub min_support: Option<f64>,

    #[arg(long)]
    pub max_support: Option<f64>,

    /// Sort by this metric, highest first unless --ascending.
    #[arg(long, value_name = "METRIC")]
    pub sort_by: Option<Metric>,

    #[arg(long, requires = "sort_by")]
    pub ascending: bool,

    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub ingest: IngestFlags,
}

#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Rules CSV.
    #[arg(long, value_name = "FILE")]
    pub rules: PathBuf,

    #[command(flatten)]
    pub ingest: IngestFlags,
}

#[derive(Debug, Clone, Args)]
pub struct ServicesArgs {
    /// Service frequency CSV.
    #[arg(long, value_name = "FILE")]
    pub frequencies: PathBuf,

    /// Number of services to list (default from `[explore] top_k`).
    #[arg(long, value_name = "K")]
    pub top_k: Option<usize>,

    #[command(flatten)]
    pub ingest: IngestFlags,
}

#[derive(Debug, Clone, Args)]
pub struct BinsArgs {
    /// Service frequency CSV.
    #[arg(long, value_name = "FILE")]
    pub frequencies: PathBuf,

    /// Bin width (default from `[explore] bin_size`).
    #[arg(long, value_name = "B")]
    pub bin_size: Option<u64>,

    #[command(flatten)]
    pub ingest: IngestFlags,
}

pub fn run_from_env() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

/// Resolve configuration and dispatch the command, writing results to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref())?;
    rulecast_observability::init_tracing(&config.observability);
    tracing::debug!(command = ?cli.command, "dispatching");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    match cli.command {
        Command::Predict(args) => commands::predict(&args, config, format, out),
        Command::PredictBatch(args) => commands::predict_batch(&args, config, out),
        Command::Rules(args) => commands::rules(&args, config, format, out),
        Command::Stats(args) => commands::stats(&args, config, format, out),
        Command::Services(args) => commands::services(&args, config, format, out),
        Command::Bins(args) => commands::bins(&args, config, format, out),
    }
}

/// File (when given) with environment overrides, or defaults with
/// environment overrides. Flags are layered on top per command.
pub fn resolve_config(path: Option<&Path>) -> Result<RulecastConfig, RulecastError> {
    let config = match path {
        Some(path) => RulecastConfig::load(path)?,
        None => {
            let mut config = RulecastConfig::default();
            config.apply_env_overrides()?;
            config.validate()?;
            config
        }
    };
    Ok(config)
}

/// The single stderr line for a failed run: `[CODE] message`.
pub fn error_line(error: &anyhow::Error) -> String {
    match error.downcast_ref::<RulecastError>() {
        Some(e) => e.coded_string(),
        None => format!("[{CLI_ERROR}] {error:#}"),
    }
}
