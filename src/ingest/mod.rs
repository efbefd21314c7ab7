//! Asynchronous click-ingestion pipeline.
//!
//! A bounded queue decouples redirect handling from click persistence:
//! the request layer offers events through [`ClickSender::try_enqueue`]
//! (never blocking, shedding load when full) and the
//! [`ClickWorkerPool`] drains the queue into the click store in the
//! background.
//!
//! # Delivery Semantics
//!
//! Best-effort, at-most-once. An accepted event is attempted exactly once
//! by some worker; a shed event or a failed insert is counted and logged,
//! never retried.

pub mod queue;
pub mod worker_pool;

pub use queue::{ClickQueue, ClickReceiver, ClickSender};
pub use worker_pool::ClickWorkerPool;
