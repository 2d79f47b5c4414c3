//! Show the resolved dependency set and build commands

use flowbuild::adapters::PackageStore;
use flowbuild::core::services::{BuildPlan, resolve_transitive};
use flowbuild::output::{InfoResult, OutputMode};

use super::context;
use crate::cli::app::ConfigArgs;

/// Print what a build would use and run
///
/// Packages already in the store contribute their own requirements; missing
/// ones are listed without them.
pub fn info(args: &ConfigArgs, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = context::load(args)?;
    let cfg = &ctx.config;

    let store = PackageStore::new(&cfg.store);
    let resolution = resolve_transitive(&cfg.recipe, &cfg.options, &cfg.settings, &store)?;
    let plan = BuildPlan::new(&cfg.recipe, &cfg.options, &cfg.settings, &cfg.tools, &ctx.source_dir);

    InfoResult {
        project: cfg.recipe.project.name.clone(),
        settings: cfg.settings.clone(),
        build_tests: cfg.options.build_tests,
        dependencies: resolution.dependencies,
        unused_linkage: resolution.unused_linkage,
        plan,
    }
    .render(mode);
    Ok(())
}
