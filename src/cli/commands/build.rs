//! Install, then run the generate/build/test pipeline

use std::path::PathBuf;

use flowbuild::adapters::{DryRunRunner, ProcessRunner};
use flowbuild::core::ports::CommandRunner;
use flowbuild::core::services::{BuildPipeline, BuildPlan, BuildReport};
use flowbuild::output::{BuildResult, OutputMode};

use super::context;
use super::install::run_install;
use crate::cli::app::ConfigArgs;

/// Flags specific to `build`
#[derive(Debug, Clone)]
pub struct BuildFlags {
    pub install_folder: PathBuf,
    pub dry_run: bool,
    pub skip_install: bool,
}

fn run_pipeline<R: CommandRunner>(runner: &R, plan: &BuildPlan) -> flowbuild::Result<BuildReport> {
    BuildPipeline::new(runner, plan).run()
}

/// Build command
pub fn build(args: &ConfigArgs, flags: &BuildFlags, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = context::load(args)?;
    let cfg = &ctx.config;

    let install = if flags.skip_install {
        None
    } else {
        Some(run_install(cfg, &flags.install_folder)?)
    };

    let plan = BuildPlan::new(&cfg.recipe, &cfg.options, &cfg.settings, &cfg.tools, &ctx.source_dir);
    let report = if flags.dry_run {
        run_pipeline(&DryRunRunner::new(), &plan)?
    } else {
        let runner = match mode {
            OutputMode::Json => ProcessRunner::stdout_to_stderr(),
            OutputMode::Human => ProcessRunner::new(),
        };
        run_pipeline(&runner, &plan)?
    };

    BuildResult {
        install,
        dry_run: flags.dry_run,
        report,
    }
    .render(mode);
    Ok(())
}
