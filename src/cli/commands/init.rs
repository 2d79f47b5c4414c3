//! Write a default recipe

use std::path::Path;

use flowbuild::adapters::toml::write_recipe;
use flowbuild::core::models::Recipe;
use flowbuild::output::{OperationResult, OutputMode};
use flowbuild::paths::RECIPE_FILE;

/// Create flowbuild.toml in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(RECIPE_FILE);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({RECIPE_FILE} exists). Use --force to overwrite."),
        }
        .render(mode);
        return Ok(());
    }

    write_recipe(path, &Recipe::default())?;

    OperationResult {
        success: true,
        message: format!("Created {RECIPE_FILE}"),
    }
    .render(mode);
    Ok(())
}
