//! Build pipeline - drives the external toolchain
//!
//! The pipeline is strictly sequential: ensure the build directory, generate,
//! build, then test when tests are enabled. The first failing step aborts
//! everything after it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::models::{Options, Recipe, Settings, Step, Tools};
use crate::core::ports::{CommandRunner, Invocation};
use crate::core::services::flags::{self, FlagInputs};
use crate::error::{BuildError, Result};

/// Build directory name, relative to the source folder
pub const BUILD_DIR: &str = "build";

/// The invocations a build will run
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Directory the build files are generated into
    pub build_dir: PathBuf,
    /// Generator invocation
    pub generate: Invocation,
    /// Compile invocation
    pub build: Invocation,
    /// Test invocation, absent when tests are disabled
    pub test: Option<Invocation>,
}

impl BuildPlan {
    /// Compute the plan for a source folder
    #[must_use]
    pub fn new(
        recipe: &Recipe,
        options: &Options,
        settings: &Settings,
        tools: &Tools,
        source_dir: &Path,
    ) -> Self {
        let build_dir = source_dir.join(BUILD_DIR);
        let inputs = FlagInputs {
            settings,
            tools,
            project_shared: options.linkage_for(&recipe.project.name).is_shared(),
            build_tests: options.build_tests,
        };

        Self {
            generate: flags::generate_invocation(&inputs, source_dir, &build_dir),
            build: flags::build_invocation(&inputs, &build_dir),
            test: options.build_tests.then(|| flags::test_invocation(&inputs, &build_dir)),
            build_dir,
        }
    }

    /// Steps in execution order
    #[must_use]
    pub fn steps(&self) -> Vec<(Step, &Invocation)> {
        let mut steps = vec![(Step::Generate, &self.generate), (Step::Build, &self.build)];
        if let Some(test) = &self.test {
            steps.push((Step::Test, test));
        }
        steps
    }
}

/// One step that ran successfully
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Which step
    pub step: Step,
    /// The command line that ran
    pub command: String,
}

/// Result of a successful pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// The build directory
    pub build_dir: PathBuf,
    /// Whether the build directory was created by this run
    pub build_dir_created: bool,
    /// Steps that ran, in order
    pub steps: Vec<StepOutcome>,
}

/// Create `dir` if it does not exist; returns whether it was created
pub fn ensure_build_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    log::debug!("Created build directory {}", dir.display());
    Ok(true)
}

/// Runs a [`BuildPlan`] through a [`CommandRunner`]
#[derive(Debug)]
pub struct BuildPipeline<'a, R: CommandRunner> {
    runner: &'a R,
    plan: &'a BuildPlan,
}

impl<'a, R: CommandRunner> BuildPipeline<'a, R> {
    /// Create a pipeline
    pub const fn new(runner: &'a R, plan: &'a BuildPlan) -> Self {
        Self { runner, plan }
    }

    /// Run every step, stopping at the first failure
    pub fn run(&self) -> Result<BuildReport> {
        let build_dir_created = ensure_build_dir(&self.plan.build_dir)?;
        let mut steps = Vec::new();

        for (step, invocation) in self.plan.steps() {
            log::info!("Running {step}: {invocation}");
            let code = self.runner.run(invocation)?;
            if code != Some(0) {
                log::debug!("{step} exited with {code:?}");
                return Err(BuildError::StepFailed { step, code });
            }
            steps.push(StepOutcome {
                step,
                command: invocation.command_line(),
            });
        }

        Ok(BuildReport {
            build_dir: self.plan.build_dir.clone(),
            build_dir_created,
            steps,
        })
    }
}
