//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

use crate::domain::entities::NewClick;

/// An in-memory representation of a click event for async processing.
///
/// Used to pass click information from HTTP handlers to the background
/// worker pool via a bounded channel. This decouples the HTTP response
/// from database writes, allowing fast redirects without blocking.
///
/// # Design
///
/// - Carries the denormalized `shortcode` so a dropped event can be
///   reported without a lookup
/// - Client metadata is optional to handle missing headers gracefully
/// - Cloneable for sending across async boundaries
/// - Consumed exactly once; a failed persistence attempt is not retried
///
/// # Usage Flow
///
/// 1. Created in the redirect handler with request metadata
/// 2. Offered to the queue via [`crate::ingest::ClickSender::try_enqueue`]
/// 3. Drained by [`crate::ingest::ClickWorkerPool`]
/// 4. Converted to [`NewClick`] for persistence
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub shortcode: String,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event stamped with the current time.
    pub fn new(
        link_id: i64,
        shortcode: String,
        user_agent: Option<&str>,
        ip: Option<String>,
    ) -> Self {
        Self {
            link_id,
            shortcode,
            clicked_at: Utc::now(),
            user_agent: user_agent.map(|s| s.to_string()),
            ip,
        }
    }

    /// Converts the event into the record shape the click store accepts.
    pub fn into_new_click(self) -> NewClick {
        NewClick {
            link_id: self.link_id,
            clicked_at: self.clicked_at,
            user_agent: self.user_agent,
            ip: self.ip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation_full() {
        let event = ClickEvent::new(
            42,
            "abc123".to_string(),
            Some("Mozilla/5.0"),
            Some("192.168.1.1".to_string()),
        );

        assert_eq!(event.link_id, 42);
        assert_eq!(event.shortcode, "abc123");
        assert_eq!(event.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(event.ip, Some("192.168.1.1".to_string()));
    }

    #[test]
    fn test_click_event_creation_minimal() {
        let event = ClickEvent::new(7, "xyz".to_string(), None, None);

        assert_eq!(event.link_id, 7);
        assert_eq!(event.shortcode, "xyz");
        assert!(event.user_agent.is_none());
        assert!(event.ip.is_none());
    }

    #[test]
    fn test_into_new_click_preserves_fields() {
        let event = ClickEvent::new(
            9,
            "code1".to_string(),
            Some("Safari"),
            Some("1.1.1.1".to_string()),
        );
        let stamped_at = event.clicked_at;

        let record = event.into_new_click();

        assert_eq!(record.link_id, 9);
        assert_eq!(record.clicked_at, stamped_at);
        assert_eq!(record.user_agent, Some("Safari".to_string()));
        assert_eq!(record.ip, Some("1.1.1.1".to_string()));
    }

    #[test]
    fn test_click_event_clone() {
        let event = ClickEvent::new(1, "code1".to_string(), Some("Safari"), None);

        let cloned = event.clone();

        assert_eq!(cloned.link_id, event.link_id);
        assert_eq!(cloned.shortcode, event.shortcode);
        assert_eq!(cloned.clicked_at, event.clicked_at);
        assert_eq!(cloned.user_agent, event.user_agent);
    }
}
