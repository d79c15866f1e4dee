use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher records each domain event as a structured tracing record.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            event = json.as_str(),
            "domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::{EventPublisher, NoopPublisher};
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("test-name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let publisher = LogPublisher::new();
        assert!(publisher.publish(&event).await.is_ok());
    }

    #[tokio::test]
    async fn test_should_drop_with_noop() {
        let event = DomainEvent::deleted("test-name", "group", "key", &HashMap::new(), &1).expect("build event");
        let _ = NoopPublisher::default().publish(&event).await.expect("should publish");
    }
}
