//! JSON export of recipe descriptors for site generators.
//!
//! Keys use the camelCase names consumers already read (`smartContractCode`,
//! `createdAt`, ...). The catalog exports as an array in slug order.

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{RecipeError, Result};
use crate::recipe::RecipeDescriptor;

pub fn descriptor_to_json(descriptor: &RecipeDescriptor) -> Result<String> {
    serde_json::to_string_pretty(descriptor).map_err(RecipeError::Export)
}

pub fn to_json(catalog: &Catalog) -> Result<String> {
    let recipes: Vec<&RecipeDescriptor> = catalog.iter().collect();
    serde_json::to_string_pretty(&recipes).map_err(RecipeError::Export)
}

/// Write the catalog export to `path`, creating parent directories as needed.
pub fn write(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_json(catalog)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_builtin_export_shape() {
        let json = to_json(Catalog::builtin()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let recipes = value.as_array().unwrap();
        assert_eq!(recipes.len(), Catalog::builtin().len());

        let topshot = recipes
            .iter()
            .find(|r| r["slug"] == "create-a-topshot-set")
            .unwrap();
        assert_eq!(topshot["title"], "Create a TopShot Set");
        assert_eq!(topshot["createdAt"], "2022-10-09");
        assert_eq!(topshot["author"], "Flow Blockchain");
        assert_eq!(
            topshot["smartContractExplanation"],
            "create-a-topshot-set/explanations/contract.txt"
        );
        assert_eq!(
            topshot["transactionCode"],
            "create-a-topshot-set/cadence/transaction.cdc"
        );
    }

    #[test]
    fn test_empty_catalog_exports_empty_array() {
        assert_eq!(to_json(&Catalog::new()).unwrap(), "[]");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public/data/recipes.json");
        write(Catalog::builtin(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json(Catalog::builtin()).unwrap());
    }

    #[test]
    fn test_descriptor_export() {
        let recipe = Catalog::builtin().require("create-a-topshot-set").unwrap();
        let value: Value = serde_json::from_str(&descriptor_to_json(recipe).unwrap()).unwrap();
        assert_eq!(value["slug"], "create-a-topshot-set");
    }
}
