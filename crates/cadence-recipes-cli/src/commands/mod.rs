//! CLI command implementations for cadence-recipes.
//!
//! Each module corresponds to a subcommand (`cadence-recipes <command>`).

pub mod check;
pub mod export;
pub mod list;
pub mod paths;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use cadence_recipes_core::config::CatalogConfig;

/// Pick the content root: an explicit `--root` wins, otherwise the config file.
pub fn content_root(config_path: &Path, root_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = root_override {
        return Ok(root.to_path_buf());
    }
    let config = CatalogConfig::load_or_default(config_path)?;
    let root = config.content_root_for(config_path);
    debug!(root = %root.display(), "resolved content root from config");
    Ok(root)
}
