//! Background worker pool persisting click events.
//!
//! A configured number of identical workers share the queue's receiver
//! and run the same loop: dequeue one event, hand it to the click store,
//! log and continue on failure. A persistence failure silently loses that
//! one click — no retry, no dead-letter queue.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, error, info, warn};

use crate::domain::repositories::ClickRepository;
use crate::ingest::queue::ClickReceiver;

/// Pool of click-persisting workers.
///
/// Workers share the receiver behind an async mutex (tokio's mpsc is
/// single-consumer); the lock is held only across one `recv`, so each
/// event is delivered to exactly one worker and no event is processed
/// twice. No ordering is guaranteed across events handled by different
/// workers.
pub struct ClickWorkerPool {
    handles: Vec<JoinHandle<()>>,
    receiver: Arc<Mutex<ClickReceiver>>,
}

impl ClickWorkerPool {
    /// Spawns `workers` consumer tasks over the given receiver.
    ///
    /// `workers` is validated as positive by
    /// [`crate::config::Config::validate`] before the pool is built.
    pub fn spawn(
        workers: usize,
        receiver: ClickReceiver,
        click_repo: Arc<dyn ClickRepository>,
    ) -> Self {
        let receiver = Arc::new(Mutex::new(receiver));

        let handles = (0..workers)
            .map(|id| {
                let receiver = receiver.clone();
                let click_repo = click_repo.clone();
                tokio::spawn(worker_loop(id, receiver, click_repo))
            })
            .collect();

        info!(workers, "click worker pool started");

        Self { handles, receiver }
    }

    /// Shuts the pool down within a bounded grace period.
    ///
    /// Workers keep draining the queue until it is closed and empty; if
    /// they have not finished when `grace` expires they are aborted and
    /// whatever is still buffered is discarded. Returns the number of
    /// discarded events so the loss is observable rather than silent.
    ///
    /// The queue only closes once every
    /// [`crate::ingest::ClickSender`] clone has been dropped; callers
    /// should drop their sender before invoking this.
    pub async fn shutdown(mut self, grace: Duration) -> u64 {
        let deadline = Instant::now() + grace;
        let mut timed_out = false;

        for mut handle in std::mem::take(&mut self.handles) {
            if timed_out {
                handle.abort();
                let _ = handle.await;
                continue;
            }
            if timeout_at(deadline, &mut handle).await.is_err() {
                timed_out = true;
                handle.abort();
                let _ = handle.await;
            }
        }

        if timed_out {
            warn!("click workers did not finish within grace period, aborted");
        }

        let discarded = self.receiver.lock().await.drain_remaining();
        if discarded > 0 {
            warn!(discarded, "click events discarded at shutdown");
        } else {
            info!("click worker pool stopped, queue fully drained");
        }

        discarded
    }
}

async fn worker_loop(
    id: usize,
    receiver: Arc<Mutex<ClickReceiver>>,
    click_repo: Arc<dyn ClickRepository>,
) {
    debug!(worker = id, "click worker started");

    loop {
        // Scope the lock to one recv so siblings can take over between
        // events.
        let event = { receiver.lock().await.recv().await };

        let Some(event) = event else {
            break;
        };

        debug!(worker = id, link_id = event.link_id, "processing click event");

        if let Err(e) = click_repo.create_click(event.into_new_click()).await {
            error!(worker = id, error = %e, "failed to persist click, event lost");
        }
    }

    debug!(worker = id, "click worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::click_event::ClickEvent;
    use crate::domain::entities::NewClick;
    use crate::domain::repositories::MockClickRepository;
    use crate::error::AppError;
    use crate::ingest::queue::ClickQueue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event(link_id: i64) -> ClickEvent {
        ClickEvent::new(link_id, format!("code{link_id}"), None, None)
    }

    #[tokio::test]
    async fn test_pool_persists_every_enqueued_event() {
        let persisted = Arc::new(AtomicUsize::new(0));
        let persisted_clone = persisted.clone();

        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_create_click().returning(move |_: NewClick| {
            persisted_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let (tx, rx) = ClickQueue::bounded(16);
        let pool = ClickWorkerPool::spawn(3, rx, Arc::new(mock_repo));

        for i in 0..10 {
            assert!(tx.try_enqueue(event(i)));
        }
        drop(tx);

        let discarded = pool.shutdown(Duration::from_secs(5)).await;

        assert_eq!(discarded, 0);
        assert_eq!(persisted.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_store_failure_does_not_stop_the_pool() {
        let persisted = Arc::new(AtomicUsize::new(0));
        let persisted_clone = persisted.clone();

        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_create_click().returning(move |click: NewClick| {
            if click.link_id == 1 {
                Err(AppError::storage("insert failed"))
            } else {
                persisted_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        });

        let (tx, rx) = ClickQueue::bounded(8);
        let pool = ClickWorkerPool::spawn(1, rx, Arc::new(mock_repo));

        tx.try_enqueue(event(1));
        tx.try_enqueue(event(2));
        tx.try_enqueue(event(3));
        drop(tx);

        let discarded = pool.shutdown(Duration::from_secs(5)).await;

        assert_eq!(discarded, 0);
        assert_eq!(persisted.load(Ordering::SeqCst), 2);
    }

    /// Store that parks forever on every insert, pinning whichever worker
    /// picks up an event.
    struct StuckRepo;

    #[async_trait::async_trait]
    impl ClickRepository for StuckRepo {
        async fn create_click(&self, _click: NewClick) -> Result<(), AppError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_shutdown_discards_backlog_after_grace() {
        let (tx, rx) = ClickQueue::bounded(8);
        let pool = ClickWorkerPool::spawn(1, rx, Arc::new(StuckRepo));

        for i in 0..4 {
            tx.try_enqueue(event(i));
        }

        let discarded = pool.shutdown(Duration::from_millis(50)).await;

        // One event is stuck inside the worker, the other three are still
        // buffered and counted as discarded.
        assert_eq!(discarded, 3);
        drop(tx);
    }
}
