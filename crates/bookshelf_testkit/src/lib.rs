//! # Bookshelf Testkit
//!
//! Test utilities for the bookshelf workspace.
//!
//! This crate provides:
//! - Catalog fixtures for common and edge-case library shapes
//! - Property-based test generators using proptest
//! - Golden-file helpers for verifying rendered report output

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod golden;
