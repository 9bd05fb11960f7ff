use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};
use lms::books::domain::model::BookEntity;
use lms::catalog::controller::{execute_step, load_script};
use lms::core::controller::AppState;
use lms::core::domain::Configuration;
use lms::core::library::{LibraryKind, LibraryResult};
use lms::gateway::GatewayPublisherVia;
use lms::utils::date::display_date;
use lms::utils::logs::setup_tracing;

// Usage: catalog [script.json]
// Without a script it runs the built-in walkthrough of both libraries.
fn main() -> LibraryResult<()> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let state = AppState::new(config, GatewayPublisherVia::Logs);
    match std::env::args().nth(1) {
        Some(path) => run_script(&state, PathBuf::from(path)),
        None => run_demo(&state),
    }
}

fn run_script(state: &AppState, path: PathBuf) -> LibraryResult<()> {
    let steps = load_script(&path)?;
    info!(steps = steps.len(), script = %path.display(), "running script");
    for (ndx, step) in steps.into_iter().enumerate() {
        match execute_step(state, step) {
            Ok(res) => info!(step = ndx, response = %res, "step done"),
            Err(err) => warn!(step = ndx, error = %err, "step failed"),
        }
    }
    Ok(())
}

fn run_demo(state: &AppState) -> LibraryResult<()> {
    let library = state.library(LibraryKind::Standard);

    let book1 = BookEntity::new("Book 1", "B001", "Author 1", 10.0, "History").into_shared();
    let book2 = BookEntity::comic("Comic Book 1", "CB001", "Author 2", 15.0, "Comic", true).into_shared();
    let book3 = BookEntity::new("Book 3", "B003", "Author 3", 12.0, "History").into_shared();

    for book in [&book1, &book2, &book3] {
        library.add_book(Rc::clone(book))?;
    }

    library.list_books()?;
    library.search_books("Book 1")?;
    library.search_books("Author 2")?;
    library.search_books("B003")?;

    library.checkout_book("B001")?;
    // already checked out
    library.checkout_book("B001")?;
    library.return_book("B001")?;

    library.apply_for_subscription("CB001")?;

    let special = state.library(LibraryKind::Special);
    for book in [&book1, &book2, &book3] {
        special.add_book(Rc::clone(book))?;
    }
    special.list_books()?;
    special.checkout_book("B001")?;
    special.return_book("B001")?;

    let book1 = book1.borrow();
    info!(book_id = %book1.book_id,
          issued = %display_date(book1.issue_date, state.config.date_format.as_str()),
          returned = %display_date(book1.return_date, state.config.date_format.as_str()),
          "final state of Book 1");
    Ok(())
}
