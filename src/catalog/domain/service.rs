use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::SharedBook;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, CheckoutOutcome, ReturnOutcome, SubscriptionOutcome, UpdateOutcome};
use crate::catalog::domain::wording::{not_found, Wording};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryKind, LibraryResult, SubscriptionStatus};
use crate::gateway::events::EventPublisher;
use crate::utils::date::today;

pub struct CatalogServiceImpl {
    group: String,
    kind: LibraryKind,
    book_repository: Box<dyn BookRepository>,
    wording: Box<dyn Wording>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, kind: LibraryKind, book_repository: Box<dyn BookRepository>,
               wording: Box<dyn Wording>, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            group: format!("{}/{}", config.branch_id, kind),
            kind,
            book_repository,
            wording,
            events_publisher,
        }
    }

    fn reject_missing(&self, name: &str, id: &str, message: String) -> LibraryResult<()> {
        self.events_publisher.publish(&DomainEvent::rejected(
            name, self.group.as_str(), id, message, &id)?)
    }

    fn publish_listing(&self, name: &str, header: String, books: &[BookDto]) -> LibraryResult<()> {
        self.events_publisher.publish(&DomainEvent::info(name, self.group.as_str(), "", header))?;
        for book in books {
            self.events_publisher.publish(&DomainEvent::info(
                name, self.group.as_str(), book.book_id.as_str(), book.to_string()))?;
        }
        Ok(())
    }
}

impl CatalogService for CatalogServiceImpl {
    fn kind(&self) -> LibraryKind {
        self.kind
    }

    fn add_book(&self, book: SharedBook) -> LibraryResult<BookDto> {
        let dto = BookDto::from(&*book.borrow());
        let size = self.book_repository.create(book);
        debug!(book_id = %dto.book_id, comic = dto.is_comic(), size, "book registered");
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", self.group.as_str(), dto.id().as_str(),
            format!("Book {} added", dto.name), &dto)?)?;
        Ok(dto)
    }

    fn find_book_by_id(&self, id: &str) -> Option<SharedBook> {
        self.book_repository.get(id)
    }

    fn update_book(&self, id: &str, new_price: f64) -> LibraryResult<UpdateOutcome> {
        let Some(book) = self.book_repository.get(id) else {
            self.reject_missing("book_not_found", id, not_found(id))?;
            return Ok(UpdateOutcome::NotFound { book_id: id.to_string() });
        };
        let dto = {
            let mut entity = book.borrow_mut();
            debug!(book_id = id, old_price = entity.price, new_price, "updating price");
            entity.update_price(new_price);
            BookDto::from(&*entity)
        };
        self.events_publisher.publish(&DomainEvent::updated(
            "price_updated", self.group.as_str(), id,
            format!("Price updated for book {}", dto.name), &dto)?)?;
        Ok(UpdateOutcome::Updated { book: dto })
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books: Vec<BookDto> = self.book_repository.find_all()
            .iter().map(|b| BookDto::from(&*b.borrow())).collect();
        self.publish_listing("books_listed", "List of books:".to_string(), &books)?;
        Ok(books)
    }

    fn search_books(&self, keyword: &str) -> LibraryResult<Vec<BookDto>> {
        let books: Vec<BookDto> = self.book_repository.query(keyword)
            .iter().map(|b| BookDto::from(&*b.borrow())).collect();
        self.publish_listing("books_searched", format!("Matching books for '{}':", keyword), &books)?;
        Ok(books)
    }

    fn checkout_book(&self, id: &str) -> LibraryResult<CheckoutOutcome> {
        let Some(book) = self.book_repository.get(id) else {
            self.reject_missing("book_not_found", id, self.wording.checkout_not_found(id))?;
            return Ok(CheckoutOutcome::NotFound { book_id: id.to_string() });
        };
        let (checked_out, dto) = {
            let mut entity = book.borrow_mut();
            let available = entity.available;
            if available {
                entity.update_availability(false);
                entity.update_issue_date(today());
            }
            (available, BookDto::from(&*entity))
        };
        if checked_out {
            self.events_publisher.publish(&DomainEvent::updated(
                "book_checkout", self.group.as_str(), id, self.wording.checked_out(&dto.name), &dto)?)?;
            Ok(CheckoutOutcome::CheckedOut { book: dto })
        } else {
            self.events_publisher.publish(&DomainEvent::rejected(
                "book_unavailable", self.group.as_str(), id, self.wording.not_available(&dto.name), &dto)?)?;
            Ok(CheckoutOutcome::Unavailable { book: dto })
        }
    }

    fn return_book(&self, id: &str) -> LibraryResult<ReturnOutcome> {
        let Some(book) = self.book_repository.get(id) else {
            self.reject_missing("book_not_found", id, self.wording.return_not_found(id))?;
            return Ok(ReturnOutcome::NotFound { book_id: id.to_string() });
        };
        let (returned, dto) = {
            let mut entity = book.borrow_mut();
            let checked_out = !entity.available;
            if checked_out {
                entity.update_availability(true);
                entity.update_return_date(today());
            }
            (checked_out, BookDto::from(&*entity))
        };
        if returned {
            self.events_publisher.publish(&DomainEvent::updated(
                "book_returned", self.group.as_str(), id, self.wording.returned(&dto.name), &dto)?)?;
            Ok(ReturnOutcome::Returned { book: dto })
        } else {
            self.events_publisher.publish(&DomainEvent::rejected(
                "book_already_available", self.group.as_str(), id, self.wording.already_available(&dto.name), &dto)?)?;
            Ok(ReturnOutcome::AlreadyAvailable { book: dto })
        }
    }

    fn apply_for_subscription(&self, id: &str) -> LibraryResult<SubscriptionOutcome> {
        let Some(book) = self.book_repository.get(id) else {
            self.reject_missing("book_not_found", id, not_found(id))?;
            return Ok(SubscriptionOutcome::NotFound { book_id: id.to_string() });
        };
        let entity = book.borrow();
        let dto = BookDto::from(&*entity);
        let status = entity.apply_for_subscription()?;
        debug!(book_id = id, status = %status, "subscription checked");
        match status {
            SubscriptionStatus::Available => {
                self.events_publisher.publish(&DomainEvent::info(
                    "subscription_applied", self.group.as_str(), id,
                    format!("Subscription applied for {}", dto.name)))?;
                Ok(SubscriptionOutcome::Applied { book: dto })
            }
            SubscriptionStatus::Unavailable => {
                self.events_publisher.publish(&DomainEvent::rejected(
                    "subscription_unavailable", self.group.as_str(), id,
                    format!("Subscription not available for {}", dto.name), &dto)?)?;
                Ok(SubscriptionOutcome::Unavailable { book: dto })
            }
        }
    }
}
