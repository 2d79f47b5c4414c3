//! TOML parser for flowbuild.toml recipes
//!
//! Handles locating and deserializing recipe files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Recipe;
use crate::error::{BuildError, Result};
use crate::paths::RECIPE_FILE;

/// Find the nearest recipe at or above `from`
///
/// Stops at the first `flowbuild.toml` found walking towards the filesystem
/// root.
#[must_use]
pub fn find_recipe(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    // Normalize: if it's a file, start from parent
    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(RECIPE_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Parse recipe content
pub fn parse_recipe(content: &str, path: &Path) -> Result<Recipe> {
    toml::from_str(content).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a recipe from disk
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    if !path.is_file() {
        return Err(BuildError::RecipeNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let recipe = parse_recipe(&content, path)?;
    log::debug!(
        "Loaded recipe {} ({} requirement(s), {} test requirement(s))",
        path.display(),
        recipe.requires.len(),
        recipe.test_requires.len()
    );
    Ok(recipe)
}
