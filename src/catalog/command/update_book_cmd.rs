use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, UpdateOutcome};
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    pub price: f64,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, price: f64) -> Self {
        Self {
            book_id: book_id.to_string(),
            price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    #[serde(flatten)]
    pub result: UpdateOutcome,
}

impl UpdateBookCommandResponse {
    pub fn new(result: UpdateOutcome) -> Self {
        Self {
            result,
        }
    }
}

impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), req.price)
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
