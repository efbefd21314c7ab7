//! Error types shared across the subsystem's trait seams.

use thiserror::Error;

/// Errors produced by external collaborators (link source, click store).
///
/// This is the only error type crossing the repository traits. Inside the
/// subsystem every failure is degraded rather than propagated: a failed
/// click insert is logged and the event dropped, a failed link listing
/// skips one monitor tick. Nothing here ever reaches the HTTP caller,
/// who has already received their redirect by the time any of this runs.
#[derive(Debug, Error)]
pub enum AppError {
    /// The backing store rejected an operation (connection loss,
    /// constraint violation, query failure).
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl AppError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = AppError::storage("connection refused");
        assert_eq!(err.to_string(), "storage error: connection refused");
    }
}
