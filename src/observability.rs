//! Tracing subscriber setup.
//!
//! Structured log lines are this subsystem's only externally visible
//! alerting mechanism: dropped-event warnings, baseline observations, and
//! reachability transition notifications all go through `tracing`.

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initializes the global tracing subscriber from the configuration.
///
/// Honors `RUST_LOG` when set, falling back to the configured log level.
/// Output is plain text or JSON per `LOG_FORMAT`.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed or the format
/// is unknown (the latter is normally caught by
/// [`Config::validate`] first).
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    match config.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?,
        "text" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?,
        other => bail!("unknown log format '{other}'"),
    }

    Ok(())
}
