//! Output formatting for human and JSON modes
//!
//! Every command produces a result struct that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::adapters::ImportedFile;
use crate::core::models::{ResolvedDependency, Settings};
use crate::core::services::{BuildPlan, BuildReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of `info`
#[derive(Debug, Serialize)]
pub struct InfoResult {
    /// Project name
    pub project: String,
    /// Effective settings
    pub settings: Settings,
    /// Whether tests are built
    pub build_tests: bool,
    /// Resolved dependencies
    pub dependencies: Vec<ResolvedDependency>,
    /// Linkage entries naming no resolved package
    pub unused_linkage: Vec<String>,
    /// Commands a build would run
    pub plan: BuildPlan,
}

impl InfoResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Project: {}", self.project);
        println!(
            "Settings: os={} arch={} compiler={} build_type={}",
            self.settings.os, self.settings.arch, self.settings.compiler, self.settings.build_type
        );
        println!("build_tests: {}\n", self.build_tests);

        println!("Requirements:");
        for dep in &self.dependencies {
            let tag = if dep.test_only { " [test]" } else { "" };
            println!("  {} ({}){tag}", dep.reference, dep.linkage);
        }
        if !self.unused_linkage.is_empty() {
            println!("\nLinkage for unresolved packages: {}", self.unused_linkage.join(", "));
        }

        println!("\nCommands:");
        for (step, invocation) in self.plan.steps() {
            println!("  {:<8} {invocation}", step.to_string());
        }
    }
}

/// Result of `install`
#[derive(Debug, Serialize)]
pub struct InstallResult {
    /// Install folder
    pub install_folder: PathBuf,
    /// Located packages, as `reference -> folder`
    pub packages: Vec<(String, PathBuf)>,
    /// Files staged by import rules
    pub imported: Vec<ImportedFile>,
    /// Generated build-info file
    pub buildinfo: PathBuf,
}

impl InstallResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Installing {} package(s)", self.packages.len());
        for (reference, path) in &self.packages {
            println!("  {} {reference}  {}", "found".green(), path.display());
        }
        if !self.imported.is_empty() {
            println!("\nImported:");
            for file in &self.imported {
                println!("  {} (from {})", file.destination.display(), file.package);
            }
        }
        println!("\nGenerated {}", self.buildinfo.display());
    }
}

/// Result of `build`
#[derive(Debug, Serialize)]
pub struct BuildResult {
    /// Install phase, if it ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install: Option<InstallResult>,
    /// Whether commands were only printed
    pub dry_run: bool,
    /// Pipeline report
    pub report: BuildReport,
}

impl BuildResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(install) = &self.install {
            install.render_human();
            println!();
        }
        if self.report.build_dir_created {
            println!("Created build directory {}", self.report.build_dir.display());
        } else {
            println!("Using build directory {}", self.report.build_dir.display());
        }
        for outcome in &self.report.steps {
            let mark = if self.dry_run { "would run".yellow() } else { "ok".green() };
            println!("  [{mark}] {}: {}", outcome.step, outcome.command);
        }
        if self.dry_run {
            println!("\nDry run: no commands were executed.");
        } else {
            println!("\nBuild succeeded.");
        }
    }
}
