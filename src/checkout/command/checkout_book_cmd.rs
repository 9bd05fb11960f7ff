use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, CheckoutOutcome};
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl CheckoutBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    book_id: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    #[serde(flatten)]
    pub checkout: CheckoutOutcome,
}

impl CheckoutBookCommandResponse {
    pub fn new(checkout: CheckoutOutcome) -> Self {
        Self {
            checkout,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.catalog_service.checkout_book(req.book_id.as_str())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
