//! Visit event model for asynchronous visit counting.

use std::time::Instant;

/// A pending visit increment.
///
/// Produced by [`crate::application::services::ShortenerService::resolve`]
/// and handed to the background worker through a bounded channel, so the
/// redirect never waits on the counter backend.
///
/// # Usage Flow
///
/// 1. Created when a short code resolves to a live link
/// 2. Sent to the channel (non-blocking; dropped when the queue is full)
/// 3. Processed by [`crate::domain::visit_worker::run_visit_worker`]
#[derive(Debug, Clone)]
pub struct VisitEvent {
    pub short_code: String,
    pub enqueued_at: Instant,
}

impl VisitEvent {
    /// Creates a visit event stamped with the current instant.
    pub fn new(short_code: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            enqueued_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_event_creation() {
        let before = Instant::now();
        let event = VisitEvent::new("abc1234");

        assert_eq!(event.short_code, "abc1234");
        assert!(event.enqueued_at >= before);
    }

    #[test]
    fn test_visit_event_clone() {
        let event = VisitEvent::new(String::from("xyz"));
        let cloned = event.clone();

        assert_eq!(cloned.short_code, event.short_code);
        assert_eq!(cloned.enqueued_at, event.enqueued_at);
    }
}
