use std::cell::RefCell;
use std::rc::Rc;
use crate::books::domain::model::SharedBook;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::library::LibraryKind;
use crate::gateway::GatewayPublisherVia;

// AppState holds the two libraries a driver talks to and the shelf of books it
// has created. A shelved book keeps one identity no matter how many libraries
// it is registered in.
pub struct AppState {
    pub config: Configuration,
    library: Rc<dyn CatalogService>,
    special_library: Rc<dyn CatalogService>,
    shelf: RefCell<Vec<SharedBook>>,
}

impl AppState {
    pub fn new(config: Configuration, via: GatewayPublisherVia) -> AppState {
        let library: Rc<dyn CatalogService> = Rc::from(create_catalog_service(&config, LibraryKind::Standard, via));
        let special_library: Rc<dyn CatalogService> = Rc::from(create_catalog_service(&config, LibraryKind::Special, via));
        Self::with_libraries(config, library, special_library)
    }

    pub fn with_libraries(config: Configuration, library: Rc<dyn CatalogService>,
                          special_library: Rc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            library,
            special_library,
            shelf: RefCell::new(vec![]),
        }
    }

    pub fn library(&self, kind: LibraryKind) -> Rc<dyn CatalogService> {
        match kind {
            LibraryKind::Standard => Rc::clone(&self.library),
            LibraryKind::Special => Rc::clone(&self.special_library),
        }
    }

    pub fn shelve(&self, book: SharedBook) {
        self.shelf.borrow_mut().push(book);
    }

    pub fn shelved(&self, id: &str) -> Option<SharedBook> {
        self.shelf.borrow().iter().find(|b| b.borrow().book_id == id).map(Rc::clone)
    }
}
