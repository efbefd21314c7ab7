//! Repository trait for persisting click records.

use crate::domain::entities::NewClick;
use crate::error::AppError;
use async_trait::async_trait;

/// Write-side store for click records.
///
/// Called once per successfully dequeued event by the worker pool. Must be
/// safe for concurrent use by multiple workers; the subsystem does not
/// serialize access beyond what the store itself provides.
///
/// # Implementations
///
/// Provided by the host application (typically an insert into its click
/// table). Test mocks available with `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Persists one click record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors. The worker pool
    /// logs the failure and discards the event; there is no retry and no
    /// dead-letter queue.
    async fn create_click(&self, click: NewClick) -> Result<(), AppError>;
}
