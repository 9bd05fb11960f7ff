use std::path::Path;
use std::rc::Rc;
use serde::Deserialize;
use serde_json::Value;
use crate::books::domain::model::SharedBook;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, NewBookRequest};
use crate::catalog::command::apply_subscription_cmd::{ApplySubscriptionCommand, ApplySubscriptionCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::controller::AppState;
use crate::core::library::{LibraryError, LibraryKind, LibraryResult};

// ScriptStep is one driver instruction, e.g.
// {"op": "checkout_book", "library": "special", "book_id": "B001"}
// The selector stays raw until execution so a bad one fails as a validation error.
#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub library: Option<String>,
    #[serde(flatten)]
    pub action: Action,
}

impl ScriptStep {
    pub fn library_kind(&self) -> LibraryResult<LibraryKind> {
        match &self.library {
            Some(selector) => LibraryKind::try_from(selector.to_string()),
            None => Ok(LibraryKind::default()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    AddBook(AddBookStep),
    GetBook(GetBookCommandRequest),
    UpdateBook(UpdateBookCommandRequest),
    ListBooks,
    SearchBooks(SearchBooksCommandRequest),
    CheckoutBook(CheckoutBookCommandRequest),
    ReturnBook(ReturnBookCommandRequest),
    ApplySubscription(ApplySubscriptionCommandRequest),
}

// AddBookStep registers the shelved book with this id, or creates it from the
// given fields the first time the id is seen.
#[derive(Debug, Deserialize)]
pub struct AddBookStep {
    pub book_id: String,
    pub name: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub subscription_available: Option<bool>,
}

impl AddBookStep {
    fn new_book(self) -> Option<NewBookRequest> {
        Some(NewBookRequest {
            book_id: self.book_id,
            name: self.name?,
            author: self.author?,
            price: self.price?,
            category: self.category?,
            subscription_available: self.subscription_available,
        })
    }
}

fn shelve_or_reuse(state: &AppState, step: AddBookStep) -> Result<SharedBook, CommandError> {
    if let Some(book) = state.shelved(step.book_id.as_str()) {
        return Ok(book);
    }
    let book_id = step.book_id.to_string();
    let req = step.new_book().ok_or_else(|| CommandError::from(LibraryError::validation(
        format!("book {} needs name, author, price and category", book_id).as_str(), Some("400".to_string()))))?;
    let book = req.build_book().into_shared();
    state.shelve(Rc::clone(&book));
    Ok(book)
}

pub fn load_script(path: &Path) -> LibraryResult<Vec<ScriptStep>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(text.as_str())
}

pub fn parse_script(text: &str) -> LibraryResult<Vec<ScriptStep>> {
    Ok(serde_json::from_str(text)?)
}

pub fn execute_step(state: &AppState, step: ScriptStep) -> Result<Value, CommandError> {
    let svc = state.library(step.library_kind()?);
    let res = match step.action {
        Action::AddBook(add) => {
            let book = shelve_or_reuse(state, add)?;
            serde_json::to_value(AddBookCommand::new(svc).execute(AddBookCommandRequest::new(book))?)?
        }
        Action::GetBook(req) => {
            serde_json::to_value(GetBookCommand::new(svc).execute(req)?)?
        }
        Action::UpdateBook(req) => {
            serde_json::to_value(UpdateBookCommand::new(svc).execute(req)?)?
        }
        Action::ListBooks => {
            serde_json::to_value(ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?)?
        }
        Action::SearchBooks(req) => {
            serde_json::to_value(SearchBooksCommand::new(svc).execute(req)?)?
        }
        Action::CheckoutBook(req) => {
            serde_json::to_value(CheckoutBookCommand::new(svc).execute(req)?)?
        }
        Action::ReturnBook(req) => {
            serde_json::to_value(ReturnBookCommand::new(svc).execute(req)?)?
        }
        Action::ApplySubscription(req) => {
            serde_json::to_value(ApplySubscriptionCommand::new(svc).execute(req)?)?
        }
    };
    Ok(res)
}
