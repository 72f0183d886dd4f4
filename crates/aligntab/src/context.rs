//! Config discovery shared by CLI commands

use aligntab_core::TableConfig;
use aligntab_core::config::CONFIG_FILE_NAME;
use anyhow::{Context as _, Result};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// A loaded aligntab.toml and where it came from
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: TableConfig,
}

/// Path of aligntab.toml in the current directory
pub fn default_config_path() -> Result<PathBuf> {
    Ok(env::current_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the config named on the command line, or ./aligntab.toml if present
///
/// # Errors
///
/// Returns an error if an explicit path cannot be loaded, or if the
/// discovered ./aligntab.toml is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<LoadedConfig>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !path.is_file() {
                debug!("no {} in current directory", CONFIG_FILE_NAME);
                return Ok(None);
            }
            path
        }
    };

    let config = TableConfig::from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    debug!("loaded config from {}", path.display());

    Ok(Some(LoadedConfig { path, config }))
}
