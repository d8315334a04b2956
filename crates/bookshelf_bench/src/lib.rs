//! Benchmark support for the bookshelf workspace.
//!
//! The benchmark targets live under `benches/`; synthetic catalogs come
//! from `bookshelf_testkit::fixtures`.

#![deny(unsafe_code)]
#![warn(missing_docs)]
