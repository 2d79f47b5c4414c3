//! Locate packages, stage imports, write build info

use std::fs;
use std::path::Path;

use anyhow::Context;

use flowbuild::adapters::{PackageStore, buildinfo, stage_imports, write_manifest};
use flowbuild::config::BuildConfig;
use flowbuild::core::services::resolve_transitive;
use flowbuild::output::{InstallResult, OutputMode};

use super::context;
use crate::cli::app::ConfigArgs;

/// Run the install phase for an already loaded configuration
pub fn run_install(cfg: &BuildConfig, install_folder: &Path) -> anyhow::Result<InstallResult> {
    fs::create_dir_all(install_folder)
        .with_context(|| format!("creating install folder {}", install_folder.display()))?;

    let store = PackageStore::new(&cfg.store);
    let resolution = resolve_transitive(&cfg.recipe, &cfg.options, &cfg.settings, &store)?;
    let packages = store.locate_all(&resolution.dependencies)?;

    let report = stage_imports(&packages, &cfg.recipe.imports, install_folder)?;
    write_manifest(&report, install_folder)?;
    let buildinfo = buildinfo::write(&packages, install_folder)?;

    Ok(InstallResult {
        install_folder: install_folder.to_path_buf(),
        packages: packages
            .iter()
            .map(|p| (p.dependency.reference.to_string(), p.path.clone()))
            .collect(),
        imported: report.files,
        buildinfo,
    })
}

/// Install command
pub fn install(args: &ConfigArgs, install_folder: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = context::load(args)?;
    let result = run_install(&ctx.config, install_folder)?;
    result.render(mode);
    Ok(())
}
