//! Fixture files for tests
//!
//! Writes input tables and aligntab.toml files into a test directory.

use std::path::{Path, PathBuf};

/// The demo table as tab-separated input, label line first
pub const DEMO_TSV: &str = "Name\tage\tAddress\nabc\t999\tabc\nadf\t123\tope\n";

/// Write `content` to `dir/name` and return the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write fixture {}: {}", path.display(), e));
    path
}

/// Write an aligntab.toml with the given `[table]` and optional `[input]` bodies
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_config(dir: &Path, table: &str, input: Option<&str>) -> PathBuf {
    let mut content = format!("[table]\n{}\n", table.trim());
    if let Some(input) = input {
        content.push_str(&format!("\n[input]\n{}\n", input.trim()));
    }
    write_input(dir, "aligntab.toml", &content)
}
