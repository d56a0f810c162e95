use std::path::Path;

use anyhow::Result;
use tracing::info;

use cadence_recipes_core::catalog::Catalog;
use cadence_recipes_core::content;
use cadence_recipes_core::recipe::RecipeDescriptor;

use crate::output;

/// Check recipe files against the content root.
///
/// Every selected recipe is checked before failing, so one run reports all
/// missing files.
pub async fn run(config_path: &Path, slug: Option<&str>, root: Option<&Path>) -> Result<()> {
    let catalog = Catalog::builtin();
    let root = super::content_root(config_path, root)?;

    let recipes: Vec<&RecipeDescriptor> = match slug {
        Some(slug) => vec![catalog.require(slug)?],
        None => catalog.iter().collect(),
    };

    output::print_header("cadence-recipes check");
    output::print_key_value("content root", &root.display().to_string());
    info!(root = %root.display(), recipes = recipes.len(), "checking recipe content");

    let mut incomplete = 0usize;
    for recipe in &recipes {
        let report = content::check(&root, recipe).await?;
        if report.is_complete() {
            output::print_success(recipe.slug().as_str());
        } else {
            incomplete += 1;
            output::print_error(recipe.slug().as_str());
            for path in &report.missing {
                output::print_missing(&path.display().to_string());
            }
        }
    }

    if incomplete > 0 {
        anyhow::bail!("{incomplete} of {} recipe(s) have missing files", recipes.len());
    }
    output::print_success(&format!("all {} recipe(s) complete", recipes.len()));

    Ok(())
}
