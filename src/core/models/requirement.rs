//! Requirements and resolved dependencies

use serde::{Deserialize, Serialize};

use super::{Linkage, Os, Reference};

/// A requirement that only applies when tests are built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRequirement {
    /// The required package
    pub reference: Reference,
    /// Target operating systems on which the package is not available
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_os: Vec<Os>,
}

impl TestRequirement {
    /// Create a test requirement that applies on every platform
    #[must_use]
    pub const fn new(reference: Reference) -> Self {
        Self {
            reference,
            skip_os: Vec::new(),
        }
    }

    /// Skip this requirement on the given operating system
    #[must_use]
    pub fn skip_on(mut self, os: Os) -> Self {
        self.skip_os.push(os);
        self
    }

    /// Whether the requirement applies to a target operating system
    #[must_use]
    pub fn applies_to(&self, os: Os) -> bool {
        !self.skip_os.contains(&os)
    }
}

/// One entry of the resolved dependency set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    /// The pinned package
    pub reference: Reference,
    /// How the package is linked
    pub linkage: Linkage,
    /// Whether the package was pulled in by `build_tests`
    pub test_only: bool,
}

/// What a package in the store declares about itself
///
/// Read from the package folder. A package without one has no requirements
/// of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Packages this package needs at build or link time
    #[serde(default)]
    pub requires: Vec<Reference>,
}
