//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is accessed.
///
/// Owned by the external store, which assigns the `id`. The subsystem only
/// ever constructs the un-persisted [`NewClick`] form; `Click` exists so
/// diagnostics and store implementations share one vocabulary.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// Client metadata is optional to handle cases where headers are
    /// missing or privacy settings restrict collection.
    pub fn new(
        id: i64,
        link_id: i64,
        clicked_at: DateTime<Utc>,
        user_agent: Option<String>,
        ip: Option<String>,
    ) -> Self {
        Self {
            id,
            link_id,
            clicked_at,
            user_agent,
            ip,
        }
    }
}

/// Input data for persisting a new click record.
///
/// Derived 1:1 from a successfully dequeued
/// [`crate::domain::click_event::ClickEvent`]. The `link_id` must reference
/// an existing link.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}
