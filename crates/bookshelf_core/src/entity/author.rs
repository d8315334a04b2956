//! Author entity.

use crate::entity::Book;
use std::fmt;

/// An author and the books they own.
///
/// The book sequence is owned exclusively by its author and keeps its
/// construction order. An author is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    active: bool,
    books: Vec<Book>,
}

impl Author {
    /// Creates a new author owning the given books.
    #[must_use]
    pub fn new(name: impl Into<String>, active: bool, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            active,
            books,
        }
    }

    /// Returns the author name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the author is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the author's books in construction order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns whether at least one of the author's books is published.
    ///
    /// Short-circuits on the first published book.
    #[must_use]
    pub fn has_published_book(&self) -> bool {
        self.books.iter().any(Book::is_published)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t| {}",
            self.name,
            if self.active { "Active" } else { "Inactive" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let author = Author::new("Author A", true, vec![Book::new("A1", 100, true)]);
        assert_eq!(author.name(), "Author A");
        assert!(author.is_active());
        assert_eq!(author.books().len(), 1);
    }

    #[test]
    fn has_published_book() {
        let author = Author::new(
            "Author B",
            true,
            vec![Book::new("B1", 80, false), Book::new("B2", 190, true)],
        );
        assert!(author.has_published_book());
    }

    #[test]
    fn no_published_book() {
        let author = Author::new("Author C", true, vec![Book::new("C1", 120, false)]);
        assert!(!author.has_published_book());
    }

    #[test]
    fn bookless_author_has_no_published_book() {
        let author = Author::new("Author X", true, Vec::new());
        assert!(!author.has_published_book());
    }

    #[test]
    fn display_active() {
        let author = Author::new("Author A", true, Vec::new());
        assert_eq!(format!("{author}"), "Author A\t| Active");
    }

    #[test]
    fn display_inactive() {
        let author = Author::new("Author D", false, Vec::new());
        assert_eq!(format!("{author}"), "Author D\t| Inactive");
    }

    #[test]
    fn book_order_is_preserved() {
        let author = Author::new(
            "Author B",
            true,
            vec![
                Book::new("B1", 80, true),
                Book::new("B2", 80, false),
                Book::new("B3", 190, true),
            ],
        );
        let names: Vec<&str> = author.books().iter().map(Book::name).collect();
        assert_eq!(names, ["B1", "B2", "B3"]);
    }
}
