use anyhow::Result;

use cadence_recipes_core::catalog::Catalog;

use crate::output;

/// List every recipe as `slug  title`.
pub fn run() -> Result<()> {
    let catalog = Catalog::builtin();
    output::print_header(&format!("cadence-recipes: {} recipe(s)", catalog.len()));

    for recipe in catalog {
        output::print_recipe_row(recipe.slug().as_str(), recipe.title());
    }
    println!();

    Ok(())
}
