//! Config commands - create and inspect aligntab.toml

use crate::context::{default_config_path, load_config};
use crate::output::print_text;
use aligntab_core::TableConfig;
use anyhow::{Result, bail};
use colored::Colorize;
use std::path::PathBuf;

/// Write a default aligntab.toml
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if the
/// config is invalid or cannot be written.
pub fn init(path: Option<PathBuf>, columns: usize, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = TableConfig::with_columns(columns);
    config.validate()?;
    config.to_file(&path)?;

    eprintln!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

/// Print the effective config as TOML
///
/// # Errors
///
/// Returns an error if no config is found or it cannot be parsed.
pub fn show(path: Option<PathBuf>) -> Result<()> {
    let Some(loaded) = load_config(path.as_deref())? else {
        bail!("No aligntab.toml found (run `aligntab config init`)");
    };

    eprintln!("{} {}", "→".cyan(), loaded.path.display());
    print_text(loaded.config.to_toml()?.trim_end())?;
    Ok(())
}
