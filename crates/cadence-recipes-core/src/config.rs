//! Catalog configuration (`recipes.config.json`).
//!
//! ```json
//! { "content_root": "recipes" }
//! ```
//!
//! A relative `content_root` is interpreted against the directory holding the
//! config file, so the CLI behaves the same from any working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecipeError, Result};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "recipes.config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory containing one sub-directory per recipe slug.
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,
}

fn default_content_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
        }
    }
}

impl CatalogConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RecipeError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| RecipeError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load the config, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| RecipeError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The content root as an actual directory, given where the config lives.
    pub fn content_root_for(&self, config_path: &Path) -> PathBuf {
        if self.content_root.is_absolute() {
            return self.content_root.clone();
        }
        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(&self.content_root),
            _ => self.content_root.clone(),
        }
    }
}
