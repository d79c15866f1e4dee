use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::utils::mem::MemoryStore;

pub fn create_catalog_service(config: &Configuration, store: &MemoryStore) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(store);
    let publisher = create_publisher(GatewayPublisherVia::from_config(config.publish_events));
    Box::new(CatalogServiceImpl::new(config, book_repo, publisher))
}
