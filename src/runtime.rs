//! Subsystem wiring and lifecycle.
//!
//! Builds the click queue, worker pool, and URL monitor from a validated
//! configuration plus the host application's repository implementations,
//! and hands back a single handle controlling the whole subsystem.
//!
//! Ownership is explicit by construction: the request layer receives only
//! the [`ClickSender`], the monitor alone writes the [`StateTracker`],
//! and nothing here is reachable through globals.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::ingest::{ClickQueue, ClickSender, ClickWorkerPool};
use crate::monitor::{HttpProber, Prober, StateTracker, UrlMonitor};

/// Entry point for starting the telemetry subsystem.
pub struct Telemetry;

impl Telemetry {
    /// Starts the subsystem with the default HTTP HEAD prober.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the probe
    /// HTTP client fails to build. Nothing is spawned on error.
    pub fn start(
        config: &Config,
        link_repo: Arc<dyn LinkRepository>,
        click_repo: Arc<dyn ClickRepository>,
    ) -> Result<TelemetryHandle> {
        let prober = HttpProber::with_timeout(config.probe_timeout())
            .context("Failed to build probe HTTP client")?;
        Self::start_with_prober(config, link_repo, click_repo, Arc::new(prober))
    }

    /// Starts the subsystem with a caller-supplied prober.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. Nothing is
    /// spawned on error.
    pub fn start_with_prober(
        config: &Config,
        link_repo: Arc<dyn LinkRepository>,
        click_repo: Arc<dyn ClickRepository>,
        prober: Arc<dyn Prober>,
    ) -> Result<TelemetryHandle> {
        config.validate()?;

        let (click_sender, click_receiver) = ClickQueue::bounded(config.queue_capacity());
        let pool = ClickWorkerPool::spawn(config.worker_count(), click_receiver, click_repo);

        let tracker = Arc::new(StateTracker::new());
        let monitor = UrlMonitor::new(
            link_repo,
            prober,
            tracker.clone(),
            config.monitor_interval(),
        );

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let monitor_task = tokio::spawn(monitor.run(shutdown_rx));

        info!("telemetry subsystem started");

        Ok(TelemetryHandle {
            click_sender,
            pool,
            tracker,
            shutdown_tx,
            monitor_task,
            grace: config.shutdown_grace(),
        })
    }
}

/// Running subsystem handle.
///
/// Dropping the handle without calling [`TelemetryHandle::shutdown`]
/// stops the monitor (its shutdown channel closes) but leaves the
/// workers running until every sender is gone, with no drain
/// accounting. Prefer an explicit shutdown.
pub struct TelemetryHandle {
    click_sender: ClickSender,
    pool: ClickWorkerPool,
    tracker: Arc<StateTracker>,
    shutdown_tx: watch::Sender<bool>,
    monitor_task: JoinHandle<()>,
    grace: Duration,
}

impl TelemetryHandle {
    /// The submission handle for the request-handling layer.
    ///
    /// This is the sole ingress point for click traffic; hand a clone to
    /// the redirect handler and nothing else.
    pub fn click_sender(&self) -> ClickSender {
        self.click_sender.clone()
    }

    /// Read access to the reachability state map, for diagnostics.
    pub fn state_tracker(&self) -> Arc<StateTracker> {
        self.tracker.clone()
    }

    /// Stops the monitor and drains the worker pool within the configured
    /// grace period.
    ///
    /// Returns the number of click events discarded because the grace
    /// period expired before the queue was empty. Senders still held by
    /// the request layer keep the queue open; their events are counted
    /// among the discarded.
    pub async fn shutdown(self) -> u64 {
        info!("telemetry subsystem shutting down");

        // Stop scheduling ticks; an in-flight tick finishes on its own.
        let _ = self.shutdown_tx.send(true);
        let _ = self.monitor_task.await;

        // Close our side of the queue so idle workers see the end of the
        // stream once the request layer lets go of its senders.
        drop(self.click_sender);

        let discarded = self.pool.shutdown(self.grace).await;

        info!(discarded, "telemetry subsystem stopped");
        discarded
    }
}
