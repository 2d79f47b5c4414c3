//! Local package store
//!
//! Packages are laid out as `<store>/<name>/<version>/<user>/<channel>/package`.
//! A package may carry a `flowbuild_package.toml` naming its own requirements.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::models::{PackageManifest, Reference, ResolvedDependency};
use crate::core::ports::PackageIndex;
use crate::error::{BuildError, Result};
use crate::paths;

/// A resolved dependency with its folder in the store
#[derive(Debug, Clone, Serialize)]
pub struct LocatedPackage {
    /// The resolved dependency
    #[serde(flatten)]
    pub dependency: ResolvedDependency,
    /// Package folder
    pub path: PathBuf,
}

/// A package store rooted at a directory
#[derive(Debug, Clone)]
pub struct PackageStore {
    root: PathBuf,
}

impl PackageStore {
    /// Open a store at `root`
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Store root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate one dependency
    pub fn locate(&self, dependency: &ResolvedDependency) -> Result<LocatedPackage> {
        let path = paths::package_dir(&self.root, &dependency.reference);
        if !path.is_dir() {
            return Err(BuildError::PackageNotFound {
                reference: dependency.reference.to_string(),
                path,
            });
        }
        log::debug!("Located {} at {}", dependency.reference, path.display());
        Ok(LocatedPackage {
            dependency: dependency.clone(),
            path,
        })
    }

    /// Locate every dependency, failing on the first missing one
    pub fn locate_all(&self, dependencies: &[ResolvedDependency]) -> Result<Vec<LocatedPackage>> {
        dependencies.iter().map(|d| self.locate(d)).collect()
    }
}

impl PackageIndex for PackageStore {
    fn requires(&self, reference: &Reference) -> Result<Vec<Reference>> {
        let path = paths::package_manifest(&paths::package_dir(&self.root, reference));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No manifest for {reference} at {}", path.display());
                return Ok(Vec::new());
            },
            Err(e) => return Err(e.into()),
        };
        let manifest: PackageManifest =
            toml::from_str(&content).map_err(|source| BuildError::Parse { path, source })?;
        Ok(manifest.requires)
    }
}
