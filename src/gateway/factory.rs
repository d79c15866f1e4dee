use crate::gateway::events::{EventPublisher, NoopPublisher};
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;

pub(crate) fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Noop => {
            Box::new(NoopPublisher::default())
        }
    }
}
