//! Repository trait for the monitor's link source.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only source of links for the availability monitor.
///
/// Called once per monitor tick. The subsystem never mutates links; the
/// owning service decides what "all links" means (e.g. excluding deleted
/// or expired ones).
///
/// # Implementations
///
/// Provided by the host application (typically backed by its link table).
/// Test mocks available with `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Lists every link whose long URL should be probed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors. A failed listing
    /// aborts the current monitor tick; the next tick retries.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;
}
