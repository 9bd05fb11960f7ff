use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, ReturnOutcome};
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    #[serde(flatten)]
    pub checkout: ReturnOutcome,
}

impl ReturnBookCommandResponse {
    pub fn new(checkout: ReturnOutcome) -> Self {
        Self {
            checkout,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
