//! # Bookshelf Core
//!
//! Data model and query operations for the bookshelf catalog demo.
//!
//! This crate provides:
//! - The immutable [`Book`] and [`Author`] records
//! - [`Library`], the ordered, read-only author collection
//! - Read-only query operations built from iterator adapters
//! - [`catalog::builtin`], the literal dataset compiled into the program
//!
//! Querying is language-native: callers compose `filter`, `flat_map` and
//! friends over the library instead of going through a DSL.
//!
//! ## Example
//!
//! ```rust
//! use bookshelf_core::catalog;
//!
//! let library = catalog::builtin();
//! assert_eq!(library.active_authors().count(), 4);
//! assert_eq!(library.published_books().count(), 9);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
mod entity;
mod library;
mod query;

pub use entity::{Author, Book};
pub use library::Library;
