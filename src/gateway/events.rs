use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// NoopPublisher drops events, used when auditing is turned off
#[derive(Debug, Default)]
pub struct NoopPublisher {}

#[async_trait]
impl EventPublisher for NoopPublisher {
    async fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
        Ok(())
    }
}
