//! # linkpulse
//!
//! The asynchronous telemetry subsystem of a URL-shortening service:
//! click ingestion that never blocks a redirect, and background
//! monitoring of every long URL's availability.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the repository traits the
//!   host application implements
//! - **Ingestion** ([`ingest`]) - Bounded click queue and the worker pool
//!   draining it into the click store
//! - **Monitoring** ([`monitor`]) - Interval-scheduled prober tracking
//!   per-link reachability and detecting transitions
//! - **Runtime** ([`runtime`]) - Wiring and lifecycle: start everything,
//!   shut it down within a grace period
//!
//! ## Delivery Semantics
//!
//! Click delivery is best-effort and at-most-once: a full queue sheds new
//! events (with a warning and an observable counter) rather than blocking
//! the redirect path, and a failed insert is logged and dropped. The
//! monitor guarantees ticks never overlap and that per-link state always
//! reflects the last completed probe round.
//!
//! ## Quick Start
//!
//! ```ignore
//! let config = linkpulse::config::load_from_env()?;
//! linkpulse::observability::init(&config)?;
//!
//! // link_repo / click_repo: your implementations of the domain traits.
//! let handle = linkpulse::runtime::Telemetry::start(&config, link_repo, click_repo)?;
//!
//! // Request layer: offer click events, never block.
//! let clicks = handle.click_sender();
//! clicks.try_enqueue(event);
//!
//! // On termination:
//! let lost = handle.shutdown().await;
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for variables and validation rules.

pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod monitor;
pub mod observability;
pub mod runtime;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::entities::{Click, Link, NewClick};
    pub use crate::domain::repositories::{ClickRepository, LinkRepository};
    pub use crate::error::AppError;
    pub use crate::ingest::{ClickQueue, ClickSender, ClickWorkerPool};
    pub use crate::monitor::{HttpProber, Prober, StateTracker, UrlMonitor};
    pub use crate::runtime::{Telemetry, TelemetryHandle};
}
