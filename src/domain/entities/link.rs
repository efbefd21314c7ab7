//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link as supplied by the link source.
///
/// Read-only to this subsystem: the monitor only ever iterates links to
/// probe their long URLs, it never creates or mutates them.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub shortcode: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, shortcode: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            shortcode,
            long_url,
            created_at,
        }
    }
}
