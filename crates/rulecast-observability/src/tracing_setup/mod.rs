//! Tracing setup: subscriber installation, span definitions and log events.

pub mod events;
pub mod spans;

use rulecast_core::config::ObservabilityConfig;
use rulecast_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RULECAST_LOG` wins over the configured level when set. Output goes to
/// stderr so stdout stays clean for command results. Returns `false` when a
/// subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), false)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder
            .json()
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
