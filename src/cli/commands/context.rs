//! Shared setup for resolving commands

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::cli::app::ConfigArgs;
use flowbuild::BuildError;
use flowbuild::adapters::toml::{find_recipe, load_recipe};
use flowbuild::config::{BuildConfig, GlobalConfig};
use flowbuild::paths;

/// Layered configuration plus the folder the recipe was found in
#[derive(Debug)]
pub struct ProjectContext {
    pub config: BuildConfig,
    pub source_dir: PathBuf,
}

/// Find the recipe, load global config and apply command-line overrides
pub fn load(args: &ConfigArgs) -> anyhow::Result<ProjectContext> {
    let start = fs::canonicalize(&args.source_folder)
        .with_context(|| format!("source folder {} not found", args.source_folder.display()))?;

    let recipe_path = find_recipe(&start)
        .ok_or_else(|| BuildError::RecipeNotFound(paths::recipe(&start)))?;
    let source_dir = recipe_path.parent().map_or_else(|| start.clone(), PathBuf::from);
    log::debug!("Using recipe {}", recipe_path.display());

    let recipe = load_recipe(&recipe_path)?;
    let global = GlobalConfig::load()
        .with_context(|| format!("loading {}", GlobalConfig::config_path().display()))?;
    let config = BuildConfig::layer(recipe, &global, &args.overrides())?;

    Ok(ProjectContext { config, source_dir })
}
