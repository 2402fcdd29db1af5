//! # rulecast-observability
//!
//! Tracing subscriber setup, span macros, and structured events shared by
//! the ingest, predict, and explore crates.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
