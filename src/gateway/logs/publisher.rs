use tracing::{debug, info};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each notice as one transcript line through tracing.
#[derive(Debug, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        info!(event = %event.name, library = %event.group, book_id = %event.key, "{}", event.message);
        debug!(event_id = %event.event_id, kind = ?event.kind, data = %event.json_data, "event payload");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let event = DomainEvent::added("book_added", "test", "B001", "added".to_string(), &"B001").expect("build event");
        let publisher = LogPublisher::new();
        publisher.publish(&event).expect("should publish");
    }
}
