//! Build options
//!
//! Options are the knobs a recipe exposes: whether to build tests, and
//! whether each package links statically or as a shared library.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// How a package is linked into the final binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// Linked into the binary at build time
    #[default]
    Static,
    /// Loaded at runtime from a separate file
    Shared,
}

impl Linkage {
    /// Linkage for a `shared=<bool>` option value
    #[must_use]
    pub const fn from_shared(shared: bool) -> Self {
        if shared { Self::Shared } else { Self::Static }
    }

    /// Whether this is shared linkage
    #[must_use]
    pub const fn is_shared(self) -> bool {
        matches!(self, Self::Shared)
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Shared => write!(f, "shared"),
        }
    }
}

impl FromStr for Linkage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "shared" => Ok(Self::Shared),
            _ => Err(format!("Invalid linkage: {s}. Use: static, shared")),
        }
    }
}

/// Parse a boolean option value
///
/// Accepts the spellings commonly found in recipes and CMake caches.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Effective options for one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Build and run the test suite, pulling in test-only dependencies
    #[serde(default = "default_build_tests")]
    pub build_tests: bool,
    /// Per-package linkage, keyed by package name
    #[serde(default)]
    pub linkage: BTreeMap<String, Linkage>,
}

const fn default_build_tests() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            build_tests: default_build_tests(),
            linkage: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Linkage for a package, static unless configured otherwise
    #[must_use]
    pub fn linkage_for(&self, package: &str) -> Linkage {
        self.linkage.get(package).copied().unwrap_or_default()
    }

    /// Apply a command-line override
    ///
    /// Accepted forms are `build_tests=<bool>` and `<package>:shared=<bool>`.
    pub fn apply(&mut self, assignment: &str) -> Result<(), BuildError> {
        let invalid = || BuildError::InvalidOption(assignment.to_string());

        let (key, value) = assignment.split_once('=').ok_or_else(invalid)?;
        let value = parse_bool(value).ok_or_else(invalid)?;

        let key = key.trim();
        match key.split_once(':').map(|(package, name)| (package.trim(), name.trim())) {
            None if key == "build_tests" => self.build_tests = value,
            Some((package, "shared")) if !package.is_empty() => {
                self.linkage.insert(package.to_string(), Linkage::from_shared(value));
            },
            _ => return Err(invalid()),
        }
        Ok(())
    }
}
