//! TOML writer for flowbuild.toml recipes

use std::fs;
use std::path::Path;

use crate::core::models::Recipe;
use crate::error::Result;

const HEADER: &str = "\
# flowbuild recipe
#
# requires       packages needed by every build
# test_requires  packages needed only when build_tests is on
# linkage        static or shared, per package
# imports        runtime files copied out of dependency packages
";

/// Format a recipe as TOML with an explanatory header
pub fn format_recipe(recipe: &Recipe) -> Result<String> {
    let body = toml::to_string_pretty(recipe)?;
    Ok(format!("{HEADER}\n{body}"))
}

/// Write a recipe to `path`
pub fn write_recipe(path: &Path, recipe: &Recipe) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_recipe(recipe)?)?;
    Ok(())
}
