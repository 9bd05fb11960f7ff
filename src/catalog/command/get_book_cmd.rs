use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub struct GetBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .map(|book| GetBookCommandResponse::new(BookDto::from(&*book.borrow())))
            .ok_or_else(|| CommandError::from(LibraryError::not_found(
                format!("book with id {} not found", req.book_id).as_str())))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryKind;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_get_book() {
        let svc: Rc<dyn CatalogService> = Rc::from(factory::create_catalog_service(
            &Configuration::new("test"), LibraryKind::Standard, GatewayPublisherVia::Memory));
        svc.add_book(BookEntity::new("Book 1", "B001", "Author 1", 10.0, "History").into_shared())
            .expect("should add book");
        let get_cmd = GetBookCommand::new(svc);

        let loaded = get_cmd.execute(GetBookCommandRequest::new("B001".to_string())).expect("should get book");
        assert_eq!("Book 1", loaded.book.name.as_str());

        let missing = get_cmd.execute(GetBookCommandRequest::new("B404".to_string()));
        assert!(matches!(missing, Err(CommandError::NotFound { .. })));
    }
}
