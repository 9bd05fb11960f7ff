use std::cell::RefCell;
use std::rc::Rc;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, SubscriptionStatus};

// BookKind tells a standard book apart from a comic book, which can be subscribed to monthly.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookKind {
    Standard,
    Comic {
        subscription_available: bool,
    },
}

// BookEntity abstracts a single catalogued copy. Its state changes only through
// the update_* setters; libraries share it through a SharedBook handle.
#[derive(Debug, PartialEq, Clone)]
pub struct BookEntity {
    pub book_id: String,
    pub name: String,
    pub author: String,
    pub price: f64,
    pub category: String,
    pub kind: BookKind,
    pub available: bool,
    pub issue_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

/// A handle to one canonical book record, shared by every library it is registered in.
pub type SharedBook = Rc<RefCell<BookEntity>>;

impl BookEntity {
    pub fn new(name: &str, book_id: &str, author: &str, price: f64, category: &str) -> Self {
        Self::build(name, book_id, author, price, category, BookKind::Standard)
    }

    pub fn comic(name: &str, book_id: &str, author: &str, price: f64, category: &str,
                 subscription_available: bool) -> Self {
        Self::build(name, book_id, author, price, category, BookKind::Comic { subscription_available })
    }

    fn build(name: &str, book_id: &str, author: &str, price: f64, category: &str, kind: BookKind) -> Self {
        Self {
            book_id: book_id.to_string(),
            name: name.to_string(),
            author: author.to_string(),
            price,
            category: category.to_string(),
            kind,
            available: true,
            issue_date: None,
            return_date: None,
        }
    }

    pub fn into_shared(self) -> SharedBook {
        Rc::new(RefCell::new(self))
    }

    pub fn update_price(&mut self, new_price: f64) {
        self.price = new_price;
    }

    pub fn update_availability(&mut self, status: bool) {
        self.available = status;
    }

    pub fn update_issue_date(&mut self, date: NaiveDate) {
        self.issue_date = Some(date);
    }

    pub fn update_return_date(&mut self, date: NaiveDate) {
        self.return_date = Some(date);
    }

    // apply_for_subscription only reports eligibility; it never changes the book.
    pub fn apply_for_subscription(&self) -> LibraryResult<SubscriptionStatus> {
        match self.kind {
            BookKind::Comic { subscription_available: true } => Ok(SubscriptionStatus::Available),
            BookKind::Comic { subscription_available: false } => Ok(SubscriptionStatus::Unavailable),
            BookKind::Standard => Err(LibraryError::validation(
                format!("book {} is not a comic book", self.book_id).as_str(), Some("400".to_string()))),
        }
    }

    // matches is the case-insensitive keyword test over name, author and id
    pub fn matches(&self, keyword: &str) -> bool {
        let key = keyword.to_lowercase();
        self.name.to_lowercase().contains(&key)
            || self.author.to_lowercase().contains(&key)
            || self.book_id.to_lowercase().contains(&key)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        BookStatus::from(self.available)
    }

    fn is_comic(&self) -> bool {
        matches!(self.kind, BookKind::Comic { .. })
    }
}
