//! Bounded click event queue.
//!
//! A fixed-capacity buffer between the request-handling layer and the
//! worker pool. Producers never block: when the buffer is full the event
//! is shed, a warning names the affected shortcode, and a counter records
//! the loss. This is intentional backpressure policy, not an error — the
//! HTTP caller has already received their redirect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;

/// Factory for the two halves of the click queue.
pub struct ClickQueue;

impl ClickQueue {
    /// Creates a bounded queue with the given capacity.
    ///
    /// The [`ClickSender`] goes to the request-handling layer (it is the
    /// sole ingress point for click traffic); the [`ClickReceiver`] is
    /// consumed by [`crate::ingest::ClickWorkerPool`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Capacity is validated as positive by
    /// [`crate::config::Config::validate`] before the queue is built.
    pub fn bounded(capacity: usize) -> (ClickSender, ClickReceiver) {
        let (tx, rx) = mpsc::channel(capacity);
        let dropped = Arc::new(AtomicU64::new(0));

        (
            ClickSender {
                tx,
                dropped: dropped.clone(),
            },
            ClickReceiver { rx, dropped },
        )
    }
}

/// Producer handle offered to the request-handling layer.
///
/// Cloneable; all clones feed the same buffer and share the same
/// dropped-event counter.
#[derive(Clone)]
pub struct ClickSender {
    tx: mpsc::Sender<ClickEvent>,
    dropped: Arc<AtomicU64>,
}

impl ClickSender {
    /// Offers an event to the queue without blocking.
    ///
    /// Returns `true` if the event was accepted, `false` if it was shed
    /// because the buffer was at capacity (or the pool has shut down). A
    /// shed event is gone: it is logged with its shortcode, counted, and
    /// never surfaced to the caller as an error.
    pub fn try_enqueue(&self, event: ClickEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(event)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(
                    shortcode = %event.shortcode,
                    "click queue full, dropping click event"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(event)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(
                    shortcode = %event.shortcode,
                    "click queue closed, dropping click event"
                );
                false
            }
        }
    }

    /// Total number of events shed since startup.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Consumer half of the queue, owned by the worker pool.
pub struct ClickReceiver {
    rx: mpsc::Receiver<ClickEvent>,
    dropped: Arc<AtomicU64>,
}

impl ClickReceiver {
    /// Waits for the next event.
    ///
    /// Returns `None` once every [`ClickSender`] has been dropped and the
    /// buffer is empty. Each event is delivered to exactly one caller.
    pub async fn recv(&mut self) -> Option<ClickEvent> {
        self.rx.recv().await
    }

    /// Drains whatever is left in the buffer without waiting, counting
    /// each drained event as dropped. Used during shutdown to account for
    /// events the grace period abandoned.
    pub(crate) fn drain_remaining(&mut self) -> u64 {
        let mut discarded = 0;
        while self.rx.try_recv().is_ok() {
            discarded += 1;
        }
        self.dropped.fetch_add(discarded, Ordering::Relaxed);
        discarded
    }
}
