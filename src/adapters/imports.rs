//! Import staging
//!
//! Copies runtime artifacts (shared libraries, the certificate bundle) out of
//! located dependency packages into the install folder, so the built binaries
//! find them at runtime.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Serialize;
use walkdir::WalkDir;

use crate::adapters::store::LocatedPackage;
use crate::core::models::ImportRule;
use crate::error::Result;
use crate::paths::IMPORTS_MANIFEST;

/// One copied file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedFile {
    /// Package the file came from
    pub package: String,
    /// Source file
    pub source: PathBuf,
    /// Destination, relative to the install folder
    pub destination: PathBuf,
}

/// Result of staging imports
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// Every copied file, in copy order
    pub files: Vec<ImportedFile>,
}

impl ImportReport {
    /// Whether a destination (relative to the install folder) was written
    #[must_use]
    pub fn contains(&self, destination: impl AsRef<Path>) -> bool {
        self.files.iter().any(|f| f.destination == destination.as_ref())
    }
}

/// Apply every import rule to every package
pub fn stage_imports(
    packages: &[LocatedPackage],
    rules: &[ImportRule],
    install_folder: &Path,
) -> Result<ImportReport> {
    let compiled: Vec<(Pattern, &ImportRule)> = rules
        .iter()
        .map(|rule| Ok((Pattern::new(&rule.pattern)?, rule)))
        .collect::<Result<_>>()?;

    let mut report = ImportReport::default();
    for package in packages {
        for (pattern, rule) in &compiled {
            copy_matching(package, pattern, rule, install_folder, &mut report)?;
        }
    }

    log::info!("Imported {} file(s)", report.files.len());
    Ok(report)
}

fn copy_matching(
    package: &LocatedPackage,
    pattern: &Pattern,
    rule: &ImportRule,
    install_folder: &Path,
    report: &mut ImportReport,
) -> Result<()> {
    let base = if rule.src.is_empty() {
        package.path.clone()
    } else {
        package.path.join(&rule.src)
    };
    if !base.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(&base).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !pattern.matches(&name) {
            continue;
        }

        let relative = if rule.keep_path {
            entry.path().strip_prefix(&base).unwrap_or_else(|_| entry.path()).to_path_buf()
        } else {
            PathBuf::from(entry.file_name())
        };
        let destination = Path::new(&rule.dst).join(relative);
        let target = install_folder.join(&destination);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
        log::debug!("{} -> {}", entry.path().display(), target.display());

        report.files.push(ImportedFile {
            package: package.dependency.reference.name.clone(),
            source: entry.path().to_path_buf(),
            destination: normalize(&destination),
        });
    }
    Ok(())
}

/// Drop `.` components so `./cacert.pem` and `cacert.pem` compare equal
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

/// Write the import manifest into the install folder
pub fn write_manifest(report: &ImportReport, install_folder: &Path) -> Result<PathBuf> {
    let path = install_folder.join(IMPORTS_MANIFEST);
    let content = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    fs::write(&path, content)?;
    Ok(path)
}
