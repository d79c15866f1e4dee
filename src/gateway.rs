pub mod events;
pub mod logs;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Noop,
}

impl GatewayPublisherVia {
    pub fn from_config(publish_events: bool) -> Self {
        if publish_events {
            GatewayPublisherVia::Logs
        } else {
            GatewayPublisherVia::Noop
        }
    }
}
