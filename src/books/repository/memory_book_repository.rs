use std::cell::RefCell;
use std::rc::Rc;

use crate::books::domain::model::SharedBook;
use crate::books::repository::BookRepository;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RefCell<Vec<SharedBook>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for MemoryBookRepository {
    fn create(&self, book: SharedBook) -> usize {
        let mut books = self.books.borrow_mut();
        books.push(book);
        books.len()
    }

    fn get(&self, id: &str) -> Option<SharedBook> {
        self.books
            .borrow()
            .iter()
            .find(|book| book.borrow().book_id == id)
            .map(Rc::clone)
    }

    fn find_all(&self) -> Vec<SharedBook> {
        self.books.borrow().iter().map(Rc::clone).collect()
    }

    fn query(&self, keyword: &str) -> Vec<SharedBook> {
        self.books
            .borrow()
            .iter()
            .filter(|book| book.borrow().matches(keyword))
            .map(Rc::clone)
            .collect()
    }
}
