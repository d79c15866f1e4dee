use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::checkout::repository::LoanRepository;
use crate::checkout::repository::mem_loan_repository::MemLoanRepository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::utils::mem::MemoryStore;

pub(crate) fn create_loan_repository(store: &MemoryStore) -> Box<dyn LoanRepository> {
    Box::new(MemLoanRepository::new(store))
}

pub fn create_checkout_service(config: &Configuration, store: &MemoryStore) -> Box<dyn CheckoutService> {
    let loan_repo = create_loan_repository(store);
    let catalog_svc = create_catalog_service(config, store);
    let publisher = create_publisher(GatewayPublisherVia::from_config(config.publish_events));
    Box::new(CheckoutServiceImpl::new(config, loan_repo, catalog_svc, publisher))
}
