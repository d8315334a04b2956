//! Report rendering for the catalog queries.
//!
//! Each query gets a `#### <label> ####` banner followed by one line per
//! result item, in the order the query produced it. Entity lines come from
//! the `Display` impls in `bookshelf_core`.

use crate::error::ReportResult;
use bookshelf_core::Library;
use std::io::Write;

const AUTHORS_INFORMATION: &str = "Authors information";
const ACTIVE_AUTHORS: &str = "Active authors";
const ACTIVE_BOOKS: &str = "Active books for all authors";
const AVERAGE_PRICE: &str = "Average price for all books in the library";
const ACTIVE_WITH_PUBLISHED: &str = "Active authors that have at least one published book";

/// Renders the full query report to `out`.
pub fn render<W: Write>(library: &Library, out: &mut W) -> ReportResult<()> {
    banner(out, AUTHORS_INFORMATION)?;
    for author in library.authors() {
        writeln!(out, "{author}")?;
    }

    banner(out, ACTIVE_AUTHORS)?;
    for author in library.active_authors() {
        writeln!(out, "{author}")?;
    }

    banner(out, ACTIVE_BOOKS)?;
    for book in library.published_books() {
        writeln!(out, "{book}")?;
    }

    banner(out, AVERAGE_PRICE)?;
    writeln!(out, "Average price: {}", library.average_price())?;

    banner(out, ACTIVE_WITH_PUBLISHED)?;
    for author in library.active_authors_with_published_book() {
        writeln!(out, "{author}")?;
    }

    Ok(())
}

fn banner<W: Write>(out: &mut W, label: &str) -> ReportResult<()> {
    writeln!(out, "#### {label} ####")?;
    Ok(())
}
