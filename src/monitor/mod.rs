//! Background URL availability monitoring.
//!
//! The [`UrlMonitor`] wakes on a fixed interval, asks the link source for
//! every link, probes each long URL with a lightweight HEAD check, and
//! tracks the last known reachability per link. A flip between two
//! consecutive observations emits a transition notification as a
//! structured warning log.
//!
//! # Components
//!
//! - [`Prober`] / [`HttpProber`] - One HEAD request with a hard timeout
//! - [`StateTracker`] - Concurrent map of last observed reachability
//! - [`UrlMonitor`] - The tick scheduler tying the two together

pub mod prober;
pub mod scheduler;
pub mod state_tracker;

pub use prober::{HttpProber, Prober, DEFAULT_PROBE_TIMEOUT};
pub use scheduler::{TickSummary, Transition, UrlMonitor};
pub use state_tracker::StateTracker;
