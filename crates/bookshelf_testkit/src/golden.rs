//! Golden-file helpers for rendered report output.
//!
//! Report tests compare full console output against checked-in golden
//! files under `docs/test_vectors/`. Set `UPDATE_GOLDEN=1` to rewrite the
//! files from the current output instead of asserting.

use std::fs;
use std::path::{Path, PathBuf};

/// Returns the directory holding the workspace golden files.
#[must_use]
pub fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .map(|root| root.join("docs").join("test_vectors"))
        .unwrap_or_else(|| PathBuf::from("test_vectors"))
}

/// Asserts that `actual` matches the golden file `<name>.golden`.
///
/// With `UPDATE_GOLDEN` set in the environment, the golden file is
/// rewritten from `actual` instead.
///
/// # Panics
///
/// Panics when the golden file is missing or the contents differ.
pub fn assert_matches_golden(name: &str, actual: &str) {
    let path = golden_dir().join(format!("{name}.golden"));

    if std::env::var("UPDATE_GOLDEN").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create golden directory");
        }
        fs::write(&path, actual).expect("Failed to write golden file");
        println!("Updated golden file: {}", path.display());
        return;
    }

    let Ok(expected) = fs::read_to_string(&path) else {
        panic!(
            "Golden file not found: {}\n\
             Run with UPDATE_GOLDEN=1 to create it.\n\
             Actual:\n{actual}",
            path.display()
        );
    };

    assert_eq!(
        actual,
        expected,
        "output differs from golden file {}; run with UPDATE_GOLDEN=1 to update",
        path.display()
    );
}
