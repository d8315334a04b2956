//! Bookshelf CLI
//!
//! Runs the catalog queries in source order and prints the report to
//! stdout: a labeled banner per query, followed by one line per result
//! item.

mod error;
mod report;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Bookshelf catalog query demonstration.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose diagnostics (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the report format on stdout stays exact.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let library = bookshelf_core::catalog::builtin();
    debug!(authors = library.len(), "catalog loaded");

    let stdout = std::io::stdout();
    report::render(&library, &mut stdout.lock())?;

    Ok(())
}
