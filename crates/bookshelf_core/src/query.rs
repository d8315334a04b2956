//! Read-only query operations over the library.
//!
//! Every operation is a pure, stateless transformation from the library
//! snapshot to a sequence or scalar. All operations are total: an empty
//! library, or an author with no books, yields empty sequences and a zero
//! average rather than an error.

use crate::entity::{Author, Book};
use crate::library::Library;

impl Library {
    /// Returns the authors where `active` is set, relative order preserved.
    pub fn active_authors(&self) -> impl Iterator<Item = &Author> {
        self.authors().iter().filter(|author| author.is_active())
    }

    /// Flattens every author's books into one sequence.
    ///
    /// Authors are visited in library order, each author's books in their
    /// own order. Inactive authors' books are included.
    pub fn all_books(&self) -> impl Iterator<Item = &Book> {
        self.authors().iter().flat_map(|author| author.books().iter())
    }

    /// Returns the published books across all authors.
    ///
    /// Like [`Library::all_books`], this visits every author, active or
    /// not; only the books themselves are filtered.
    pub fn published_books(&self) -> impl Iterator<Item = &Book> {
        self.all_books().filter(|book| book.is_published())
    }

    /// Returns the arithmetic mean of the price across all books.
    ///
    /// Defined as `0.0` for a library with no books at all.
    #[must_use]
    pub fn average_price(&self) -> f64 {
        let (count, total) = self.all_books().fold((0u32, 0u64), |(count, total), book| {
            (count + 1, total + u64::from(book.price()))
        });
        if count == 0 {
            0.0
        } else {
            total as f64 / f64::from(count)
        }
    }

    /// Returns the active authors owning at least one published book.
    ///
    /// The per-author check short-circuits on the first published book.
    pub fn active_authors_with_published_book(&self) -> impl Iterator<Item = &Author> {
        self.authors()
            .iter()
            .filter(|author| author.is_active() && author.has_published_book())
    }
}
