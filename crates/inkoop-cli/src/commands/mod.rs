//! CLI subcommands.

pub mod batch;
pub mod process;

use std::path::Path;

use anyhow::Result;

use inkoop_core::InkoopConfig;

/// Load configuration from an optional path, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> Result<InkoopConfig> {
    match config_path {
        Some(path) => Ok(InkoopConfig::from_file(Path::new(path))?),
        None => Ok(InkoopConfig::default()),
    }
}
