//! # rulecast-cli
//!
//! The `rulecast` binary: next-item prediction and rule/frequency
//! exploration over CSV exports.

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{error_line, resolve_config, run, run_from_env, Cli, Command};
