use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::wording::create_wording;
use crate::core::domain::Configuration;
use crate::core::library::LibraryKind;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_catalog_service(config: &Configuration, kind: LibraryKind, via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    create_catalog_service_with(config, kind, create_publisher(via))
}

pub fn create_catalog_service_with(config: &Configuration, kind: LibraryKind,
                                   publisher: Box<dyn EventPublisher>) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Box::new(CatalogServiceImpl::new(config, kind, book_repo, create_wording(kind), publisher))
}
