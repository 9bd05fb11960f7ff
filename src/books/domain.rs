use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn name(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;
    fn is_comic(&self) -> bool;
}

// one "name - author" line, as shown in listings and search results
pub fn listing_line(book: &dyn Book) -> String {
    format!("{} - {}", book.name(), book.author())
}
