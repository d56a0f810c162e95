//! Existence checks for the files a recipe points at.
//!
//! Only presence is checked; file contents are never read.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{RecipeError, Result};
use crate::recipe::RecipeDescriptor;

/// Outcome of checking one recipe against a content root.
#[derive(Debug, Clone)]
pub struct ContentReport {
    pub slug: String,
    pub present: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl ContentReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Convert into an error if any referenced file is missing.
    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(RecipeError::MissingContent {
                slug: self.slug,
                missing: self.missing,
            })
        }
    }
}

/// Check that every file referenced by `descriptor` exists under `root`.
pub async fn check(root: &Path, descriptor: &RecipeDescriptor) -> Result<ContentReport> {
    let resolved = descriptor.paths().resolve(root);
    let mut report = ContentReport {
        slug: descriptor.slug().to_string(),
        present: Vec::new(),
        missing: Vec::new(),
    };

    for (field, path) in resolved.entries() {
        if tokio::fs::try_exists(path).await? {
            debug!(slug = %report.slug, field, path = %path.display(), "found");
            report.present.push(path.to_path_buf());
        } else {
            warn!(slug = %report.slug, field, path = %path.display(), "missing");
            report.missing.push(path.to_path_buf());
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::CREATE_A_TOPSHOT_SET;

    fn scaffold(root: &Path, relative: &[&str]) {
        for rel in relative {
            let path = root.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "").unwrap();
        }
    }

    #[tokio::test]
    async fn test_check_complete_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<&str> = CREATE_A_TOPSHOT_SET
            .paths()
            .entries()
            .iter()
            .map(|(_, p)| *p)
            .collect();
        scaffold(dir.path(), &paths);

        let report = check(dir.path(), &CREATE_A_TOPSHOT_SET).await.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.present.len(), 4);
        assert!(report.into_result().is_ok());
    }

    #[tokio::test]
    async fn test_check_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(
            dir.path(),
            &[
                "create-a-topshot-set/cadence/contract.cdc",
                "create-a-topshot-set/cadence/transaction.cdc",
            ],
        );

        let report = check(dir.path(), &CREATE_A_TOPSHOT_SET).await.unwrap();
        assert_eq!(report.present.len(), 2);
        assert_eq!(
            report.missing,
            vec![
                dir.path().join("create-a-topshot-set/explanations/contract.txt"),
                dir.path().join("create-a-topshot-set/explanations/transaction.txt"),
            ]
        );

        let err = report.into_result().unwrap_err();
        assert!(matches!(err, RecipeError::MissingContent { ref missing, .. } if missing.len() == 2));
        assert!(err.to_string().contains("missing 2 file(s)"));
    }

    #[tokio::test]
    async fn test_check_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let report = check(dir.path(), &CREATE_A_TOPSHOT_SET).await.unwrap();
        assert_eq!(report.missing.len(), 4);
        assert!(report.present.is_empty());
    }
}
