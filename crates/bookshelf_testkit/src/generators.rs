//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random catalogs that maintain the
//! data-model invariants (non-negative prices, exclusive book ownership).

use bookshelf_core::{Author, Book, Library};
use proptest::prelude::*;

/// Strategy for generating book names.
pub fn book_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][0-9]{1,3}").expect("Invalid regex")
}

/// Strategy for generating author names.
pub fn author_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("Author [A-Z][a-z]{0,7}").expect("Invalid regex")
}

/// Strategy for generating books with bounded prices.
pub fn book_strategy() -> impl Strategy<Value = Book> {
    (book_name_strategy(), 0u32..1000, any::<bool>())
        .prop_map(|(name, price, published)| Book::new(name, price, published))
}

/// Strategy for generating authors owning up to `max_books` books.
pub fn author_strategy(max_books: usize) -> impl Strategy<Value = Author> {
    (
        author_name_strategy(),
        any::<bool>(),
        prop::collection::vec(book_strategy(), 0..=max_books),
    )
        .prop_map(|(name, active, books)| Author::new(name, active, books))
}

/// Strategy for generating whole libraries.
pub fn library_strategy(max_authors: usize, max_books: usize) -> impl Strategy<Value = Library> {
    prop::collection::vec(author_strategy(max_books), 0..=max_authors).prop_map(Library::new)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
