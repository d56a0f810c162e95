use std::path::Path;

use anyhow::Result;

use cadence_recipes_core::catalog::Catalog;
use cadence_recipes_core::export;

use crate::output;

/// Export the built-in catalog as JSON to stdout or a file.
pub fn run(output_path: Option<&Path>) -> Result<()> {
    let catalog = Catalog::builtin();

    match output_path {
        Some(path) => {
            export::write(catalog, path)?;
            output::print_success(&format!(
                "Exported {} recipe(s) to {}",
                catalog.len(),
                path.display()
            ));
        }
        None => println!("{}", export::to_json(catalog)?),
    }

    Ok(())
}
