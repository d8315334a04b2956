//! The built-in catalog.
//!
//! The dataset is compiled into the program: constructed once at startup
//! from literal values and read-only for the remainder of execution.

use crate::entity::{Author, Book};
use crate::library::Library;
use tracing::debug;

/// Returns the built-in catalog of five authors and their books.
#[must_use]
pub fn builtin() -> Library {
    let library = Library::new(vec![
        Author::new(
            "Author A",
            true,
            vec![
                Book::new("A1", 100, true),
                Book::new("A2", 200, true),
                Book::new("A3", 220, true),
            ],
        ),
        Author::new(
            "Author B",
            true,
            vec![
                Book::new("B1", 80, true),
                Book::new("B2", 80, false),
                Book::new("B3", 190, true),
                Book::new("B4", 210, true),
            ],
        ),
        Author::new(
            "Author C",
            true,
            vec![
                Book::new("C1", 110, true),
                Book::new("C2", 120, false),
                Book::new("C3", 130, true),
            ],
        ),
        Author::new(
            "Author D",
            false,
            vec![Book::new("D1", 200, true), Book::new("D2", 300, false)],
        ),
        Author::new("Author X", true, Vec::new()),
    ]);

    debug!(
        authors = library.len(),
        books = library.all_books().count(),
        "built-in catalog constructed"
    );

    library
}
