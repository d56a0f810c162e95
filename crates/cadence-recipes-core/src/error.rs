//! Unified error types for the cadence-recipes toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during cadence-recipes operations.
#[derive(Error, Debug)]
pub enum RecipeError {
    // --- Descriptors ---

    /// The slug is empty or contains characters that are unsafe in a path segment.
    #[error("invalid recipe slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    /// Two recipes with the same slug were registered in one catalog.
    #[error("duplicate recipe slug: {0}")]
    DuplicateSlug(String),

    /// No recipe with this slug exists in the catalog.
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    // --- Configuration ---

    /// The configuration file (`recipes.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Export ---

    /// Serializing the catalog to JSON failed.
    #[error("failed to export catalog")]
    Export(#[source] serde_json::Error),

    // --- Content ---

    /// One or more files referenced by a recipe are absent from the content root.
    #[error("recipe '{slug}' is missing {} file(s): {}", missing.len(), display_paths(missing))]
    MissingContent { slug: String, missing: Vec<PathBuf> },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Alias for `Result<T, RecipeError>`.
pub type Result<T> = std::result::Result<T, RecipeError>;
