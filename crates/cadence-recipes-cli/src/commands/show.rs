use anyhow::Result;

use cadence_recipes_core::catalog::Catalog;
use cadence_recipes_core::export;

use crate::output;

/// Show one recipe, either styled for the terminal or as raw JSON.
pub fn run(slug: &str, json: bool) -> Result<()> {
    let recipe = Catalog::builtin().require(slug)?;

    if json {
        println!("{}", export::descriptor_to_json(recipe)?);
        return Ok(());
    }

    output::print_header(recipe.title());
    output::print_key_value("slug", recipe.slug().as_str());
    output::print_key_value("createdAt", &recipe.created_at().to_string());
    output::print_key_value("author", recipe.author());
    output::print_key_value("playgroundLink", recipe.playground_link());
    output::print_key_value("excerpt", recipe.excerpt());
    for (field, path) in recipe.paths().entries() {
        output::print_key_value(field, path);
    }
    println!();

    Ok(())
}
