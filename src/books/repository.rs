pub mod memory_book_repository;

use crate::books::domain::model::SharedBook;

// BookRepository keeps shared book handles in insertion order. It never copies a
// book, so a handle stored in several repositories stays one record.
pub trait BookRepository {
    // appends a book and returns the new number of entries
    fn create(&self, book: SharedBook) -> usize;

    // first book whose id equals the argument exactly
    fn get(&self, id: &str) -> Option<SharedBook>;

    // every book in insertion order
    fn find_all(&self) -> Vec<SharedBook>;

    // books whose name, author or id contains the keyword, ignoring case
    fn query(&self, keyword: &str) -> Vec<SharedBook>;
}
