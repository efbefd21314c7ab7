//! Subsystem configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any
//! worker or scheduler task is spawned. A non-positive queue capacity,
//! worker count, or monitor interval is a fatal startup error.
//!
//! ## Variables
//!
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 10000)
//! - `CLICK_WORKER_COUNT` - Parallel click workers (default: 4, max: 256)
//! - `MONITOR_INTERVAL_SECS` - Seconds between monitor ticks (default: 300)
//! - `PROBE_TIMEOUT_SECS` - Per-probe HTTP timeout (default: 5)
//! - `SHUTDOWN_GRACE_SECS` - Worker drain window at shutdown (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Subsystem configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bounded capacity of the click event queue.
    pub click_queue_capacity: i64,
    /// Number of parallel workers draining the queue.
    pub click_worker_count: i64,
    /// Seconds between two monitor ticks.
    pub monitor_interval_secs: i64,
    /// Hard timeout applied to each accessibility probe, in seconds.
    pub probe_timeout_secs: i64,
    /// How long shutdown waits for workers to drain the queue, in seconds.
    pub shutdown_grace_secs: i64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse. Unset variables
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            click_queue_capacity: parse_var("CLICK_QUEUE_CAPACITY", 10_000)?,
            click_worker_count: parse_var("CLICK_WORKER_COUNT", 4)?,
            monitor_interval_secs: parse_var("MONITOR_INTERVAL_SECS", 300)?,
            probe_timeout_secs: parse_var("PROBE_TIMEOUT_SECS", 5)?,
            shutdown_grace_secs: parse_var("SHUTDOWN_GRACE_SECS", 5)?,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `click_queue_capacity` is not positive
    /// - `click_worker_count` is not in 1..=256
    /// - `monitor_interval_secs` is not positive
    /// - `probe_timeout_secs` or `shutdown_grace_secs` is not positive
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.click_queue_capacity <= 0 {
            bail!(
                "CLICK_QUEUE_CAPACITY must be positive, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_worker_count <= 0 || self.click_worker_count > 256 {
            bail!(
                "CLICK_WORKER_COUNT must be between 1 and 256, got {}",
                self.click_worker_count
            );
        }

        if self.monitor_interval_secs <= 0 {
            bail!(
                "MONITOR_INTERVAL_SECS must be positive, got {}",
                self.monitor_interval_secs
            );
        }

        if self.probe_timeout_secs <= 0 {
            bail!(
                "PROBE_TIMEOUT_SECS must be positive, got {}",
                self.probe_timeout_secs
            );
        }

        if self.shutdown_grace_secs <= 0 {
            bail!(
                "SHUTDOWN_GRACE_SECS must be positive, got {}",
                self.shutdown_grace_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn queue_capacity(&self) -> usize {
        self.click_queue_capacity as usize
    }

    pub fn worker_count(&self) -> usize {
        self.click_worker_count as usize
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_secs as u64)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs as u64)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs as u64)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
        tracing::info!("  Click workers: {}", self.click_worker_count);
        tracing::info!("  Monitor interval: {}s", self.monitor_interval_secs);
        tracing::info!("  Probe timeout: {}s", self.probe_timeout_secs);
        tracing::info!("  Shutdown grace: {}s", self.shutdown_grace_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an environment variable, falling back to `default` only when
/// the variable is unset. A set-but-invalid value is an error rather
/// than a silent default, so misconfiguration fails loudly at startup.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} has invalid value '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// Reads a `.env` file first if one is present.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}
