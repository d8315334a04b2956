//! Catalog fixtures.
//!
//! Convenience constructors for libraries used across tests and
//! benchmarks.

use bookshelf_core::{catalog, Author, Book, Library};

/// Returns the standard five-author catalog.
#[must_use]
pub fn standard_catalog() -> Library {
    catalog::builtin()
}

/// Returns a library with no authors.
#[must_use]
pub fn empty_library() -> Library {
    Library::new(Vec::new())
}

/// Returns a library whose authors own no books at all.
#[must_use]
pub fn bookless_library() -> Library {
    Library::new(vec![
        Author::new("Author Y", true, Vec::new()),
        Author::new("Author Z", false, Vec::new()),
    ])
}

/// Returns a library where every author is inactive.
#[must_use]
pub fn inactive_library() -> Library {
    Library::new(vec![
        Author::new("Author P", false, vec![Book::new("P1", 150, true)]),
        Author::new("Author Q", false, vec![Book::new("Q1", 90, false)]),
    ])
}

/// Builds a deterministic synthetic library for benchmarks and stress
/// shapes.
///
/// Author `i` is active when `i` is even; book `j` of author `i` is
/// published when `j` is even and priced `(i + j) % 500`.
#[must_use]
pub fn synthetic_library(author_count: usize, books_per_author: usize) -> Library {
    (0..author_count)
        .map(|i| {
            let books = (0..books_per_author)
                .map(|j| {
                    let price = ((i + j) % 500) as u32;
                    Book::new(format!("B{i}-{j}"), price, j % 2 == 0)
                })
                .collect();
            Author::new(format!("Author {i}"), i % 2 == 0, books)
        })
        .collect()
}
