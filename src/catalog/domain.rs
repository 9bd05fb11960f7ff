pub mod service;
pub mod wording;

use serde::{Deserialize, Serialize};
use crate::books::domain::model::SharedBook;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryKind, LibraryResult};

// CheckoutOutcome keeps "absent" apart from "present but already checked out".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    CheckedOut { book: BookDto },
    Unavailable { book: BookDto },
    NotFound { book_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    Returned { book: BookDto },
    AlreadyAvailable { book: BookDto },
    NotFound { book_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated { book: BookDto },
    NotFound { book_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubscriptionOutcome {
    Applied { book: BookDto },
    Unavailable { book: BookDto },
    NotFound { book_id: String },
}

// CatalogService is a library: an ordered collection of shared books plus the
// operations that locate a book by id and move it between Available and CheckedOut.
pub trait CatalogService {
    fn kind(&self) -> LibraryKind;
    fn add_book(&self, book: SharedBook) -> LibraryResult<BookDto>;
    fn find_book_by_id(&self, id: &str) -> Option<SharedBook>;
    fn update_book(&self, id: &str, new_price: f64) -> LibraryResult<UpdateOutcome>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn search_books(&self, keyword: &str) -> LibraryResult<Vec<BookDto>>;
    fn checkout_book(&self, id: &str) -> LibraryResult<CheckoutOutcome>;
    fn return_book(&self, id: &str) -> LibraryResult<ReturnOutcome>;
    fn apply_for_subscription(&self, id: &str) -> LibraryResult<SubscriptionOutcome>;
}
