use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::{BookEntity, SharedBook};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// NewBookRequest carries the construction fields of a book; a subscription flag makes it a comic.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBookRequest {
    pub book_id: String,
    pub name: String,
    pub author: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub subscription_available: Option<bool>,
}

impl NewBookRequest {
    pub fn build_book(&self) -> BookEntity {
        match self.subscription_available {
            Some(subscription_available) => BookEntity::comic(
                self.name.as_str(), self.book_id.as_str(), self.author.as_str(),
                self.price, self.category.as_str(), subscription_available),
            None => BookEntity::new(
                self.name.as_str(), self.book_id.as_str(), self.author.as_str(),
                self.price, self.category.as_str()),
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    book: SharedBook,
}

impl AddBookCommandRequest {
    pub fn new(book: SharedBook) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.book)
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::books::domain::Book;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, NewBookRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryKind;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_add_book() {
        let svc: Rc<dyn CatalogService> = Rc::from(factory::create_catalog_service(
            &Configuration::new("test"), LibraryKind::Standard, GatewayPublisherVia::Memory));
        let add_cmd = AddBookCommand::new(Rc::clone(&svc));

        let req: NewBookRequest = serde_json::from_str(
            r#"{"book_id":"CB001","name":"Comic Book 1","author":"Author 2","price":15,"category":"Comic","subscription_available":true}"#)
            .expect("should parse request");
        let res = add_cmd.execute(AddBookCommandRequest::new(req.build_book().into_shared()))
            .expect("should add book");
        assert_eq!("CB001", res.book.book_id.as_str());
        assert!(res.book.is_comic());
        assert!(svc.find_book_by_id("CB001").is_some());
    }

    #[test]
    fn test_should_build_standard_book_without_flag() {
        let req: NewBookRequest = serde_json::from_str(
            r#"{"book_id":"B001","name":"Book 1","author":"Author 1","price":10.5,"category":"History"}"#)
            .expect("should parse request");
        let book = req.build_book();
        assert!(!book.is_comic());
        assert_eq!(10.5, book.price);
    }
}
