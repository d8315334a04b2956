//! The library: an ordered, read-only collection of authors.

use crate::entity::Author;

/// The fixed, ordered collection of all authors.
///
/// A `Library` is constructed once and never mutated; every query is a
/// pure read over this snapshot. Iteration order is construction order,
/// which is also the order results are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    authors: Vec<Author>,
}

impl Library {
    /// Creates a library from an ordered author sequence.
    #[must_use]
    pub fn new(authors: Vec<Author>) -> Self {
        Self { authors }
    }

    /// Returns all authors in library order.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Returns the number of authors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Returns whether the library holds no authors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

impl FromIterator<Author> for Library {
    fn from_iter<I: IntoIterator<Item = Author>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
