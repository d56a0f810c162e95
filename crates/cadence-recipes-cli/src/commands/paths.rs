use std::path::Path;

use anyhow::Result;

use cadence_recipes_core::catalog::Catalog;

use crate::output;

/// Print the four recipe files resolved against the content root.
pub fn run(config_path: &Path, slug: &str, root: Option<&Path>) -> Result<()> {
    let recipe = Catalog::builtin().require(slug)?;
    let root = super::content_root(config_path, root)?;

    output::print_header(&format!("cadence-recipes paths: {slug}"));
    output::print_key_value("content root", &root.display().to_string());
    for (field, path) in recipe.paths().resolve(&root).entries() {
        output::print_key_value(field, &path.display().to_string());
    }
    println!();

    Ok(())
}
