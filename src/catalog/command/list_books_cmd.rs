use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryKind;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_list_books() {
        let svc: Rc<dyn CatalogService> = Rc::from(factory::create_catalog_service(
            &Configuration::new("test"), LibraryKind::Standard, GatewayPublisherVia::Memory));
        let list_cmd = ListBooksCommand::new(Rc::clone(&svc));
        assert!(list_cmd.execute(ListBooksCommandRequest::default()).expect("should list").books.is_empty());

        svc.add_book(BookEntity::new("Book 1", "B001", "Author 1", 10.0, "History").into_shared())
            .expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::default()).expect("should list");
        assert_eq!(1, res.books.len());
    }
}
