//! Periodic URL availability monitor.
//!
//! On a fixed interval the monitor fetches every link from the link
//! source, probes each long URL sequentially, and compares the result
//! against the last known state. A first observation establishes a
//! baseline; a changed state emits a transition notification. Structured
//! log lines are the subsystem's only alerting mechanism.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::domain::repositories::LinkRepository;
use crate::monitor::prober::Prober;
use crate::monitor::state_tracker::StateTracker;

/// A reachability flip observed between two consecutive ticks of one
/// link.
#[derive(Debug, Clone)]
pub struct Transition {
    pub link_id: i64,
    pub shortcode: String,
    pub was_accessible: bool,
    pub is_accessible: bool,
}

/// Outcome of one monitor tick.
#[derive(Debug, Default)]
pub struct TickSummary {
    /// Number of links probed this tick.
    pub probed: usize,
    /// Links observed for the first time (no notification emitted).
    pub baselines: usize,
    /// State flips detected this tick, in probe order.
    pub transitions: Vec<Transition>,
    /// True when the link listing failed and the whole tick was skipped.
    pub skipped: bool,
}

/// Periodically scheduled reachability monitor.
///
/// One instance per process. Ticks execute inline in the scheduler task,
/// so two ticks can never overlap: a tick that outlasts the configured
/// interval simply delays the next one
/// ([`MissedTickBehavior::Delay`]). Within a tick, links are probed
/// strictly one at a time, bounding the tick's duration by the sum of
/// per-link probe timeouts.
pub struct UrlMonitor {
    link_repo: Arc<dyn LinkRepository>,
    prober: Arc<dyn Prober>,
    tracker: Arc<StateTracker>,
    interval: Duration,
}

impl UrlMonitor {
    pub fn new(
        link_repo: Arc<dyn LinkRepository>,
        prober: Arc<dyn Prober>,
        tracker: Arc<StateTracker>,
        interval: Duration,
    ) -> Self {
        Self {
            link_repo,
            prober,
            tracker,
            interval,
        }
    }

    /// Runs the monitor loop until `shutdown` fires.
    ///
    /// The first tick fires immediately on start, then once per
    /// interval. Shutdown stops scheduling further ticks; an in-flight
    /// tick finishes first (its duration is bounded by probe timeouts,
    /// so this never blocks process exit indefinitely).
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_secs = self.interval.as_secs(), "url monitor started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let summary = self.tick().await;
                    if !summary.skipped {
                        debug!(
                            probed = summary.probed,
                            baselines = summary.baselines,
                            transitions = summary.transitions.len(),
                            "monitor tick finished"
                        );
                    }
                }
                _ = shutdown.changed() => break,
            }
        }

        info!("url monitor stopped");
    }

    /// Executes one complete link-scanning round.
    ///
    /// A failed link listing aborts the whole tick (logged, retried at
    /// the next scheduled tick). An individual probe failure is just an
    /// inaccessible observation and affects no other link.
    pub async fn tick(&self) -> TickSummary {
        let links = match self.link_repo.list_all().await {
            Ok(links) => links,
            Err(e) => {
                warn!(error = %e, "failed to list links, skipping monitor tick");
                return TickSummary {
                    skipped: true,
                    ..TickSummary::default()
                };
            }
        };

        let mut summary = TickSummary::default();

        for link in links {
            let accessible = self.prober.probe(&link.long_url).await;
            summary.probed += 1;

            match self.tracker.record_and_compare(link.id, accessible) {
                None => {
                    summary.baselines += 1;
                    info!(
                        shortcode = %link.shortcode,
                        url = %link.long_url,
                        state = state_label(accessible),
                        "baseline reachability established"
                    );
                }
                Some(previous) if previous != accessible => {
                    warn!(
                        shortcode = %link.shortcode,
                        url = %link.long_url,
                        previous = state_label(previous),
                        current = state_label(accessible),
                        "link reachability changed"
                    );
                    summary.transitions.push(Transition {
                        link_id: link.id,
                        shortcode: link.shortcode,
                        was_accessible: previous,
                        is_accessible: accessible,
                    });
                }
                Some(_) => {
                    debug!(
                        shortcode = %link.shortcode,
                        state = state_label(accessible),
                        "link reachability unchanged"
                    );
                }
            }
        }

        summary
    }
}

fn state_label(accessible: bool) -> &'static str {
    if accessible {
        "ACCESSIBLE"
    } else {
        "INACCESSIBLE"
    }
}
