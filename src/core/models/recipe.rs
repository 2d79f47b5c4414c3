//! The project recipe
//!
//! A recipe declares what the project needs: pinned requirements, test-only
//! requirements, default options, and which runtime artifacts to import out
//! of each dependency package.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Linkage, Options, Os, Reference, TestRequirement};

/// Project identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project name, also the key for the project's own linkage option
    pub name: String,
    /// Build the project itself as a shared library
    #[serde(default)]
    pub shared: bool,
}

/// Copy files matching `pattern` from `<package>/<src>` into `<install>/<dst>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRule {
    /// Glob matched against file names (e.g., `*.so`, `*cacert.pem`)
    pub pattern: String,
    /// Folder inside the package to search, empty for the package root
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub src: String,
    /// Destination folder relative to the install folder
    #[serde(default = "default_dst")]
    pub dst: String,
    /// Keep each file's path relative to `src`; when off, files land directly in `dst`
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub keep_path: bool,
}

fn default_dst() -> String {
    ".".to_string()
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_true(value: &bool) -> bool {
    *value
}

impl ImportRule {
    /// Create an import rule that keeps relative paths
    #[must_use]
    pub fn new(pattern: &str, src: &str, dst: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            src: src.to_string(),
            dst: dst.to_string(),
            keep_path: true,
        }
    }

    /// Copy matched files directly into `dst`
    #[must_use]
    pub fn flat(mut self) -> Self {
        self.keep_path = false;
        self
    }
}

/// External program locations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tools {
    /// Build-file generator program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmake: Option<String>,
    /// Test runner program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctest: Option<String>,
}

impl Tools {
    /// Whether no program is overridden
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cmake.is_none() && self.ctest.is_none()
    }

    /// Overlay `other` on top of `self`, keeping values `other` leaves unset
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            cmake: other.cmake.clone().or_else(|| self.cmake.clone()),
            ctest: other.ctest.clone().or_else(|| self.ctest.clone()),
        }
    }

    /// Build-file generator program, `cmake` unless configured
    #[must_use]
    pub fn cmake(&self) -> &str {
        self.cmake.as_deref().unwrap_or("cmake")
    }

    /// Test runner program, `ctest` unless configured
    #[must_use]
    pub fn ctest(&self) -> &str {
        self.ctest.as_deref().unwrap_or("ctest")
    }
}

/// A `flowbuild.toml` recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Requirements included in every build
    #[serde(default)]
    pub requires: Vec<Reference>,

    /// Project identity
    pub project: ProjectInfo,

    /// Requirements included only when `build_tests` is on
    #[serde(default)]
    pub test_requires: Vec<TestRequirement>,

    /// Default option values
    #[serde(default)]
    pub options: RecipeOptions,

    /// Default linkage per package
    #[serde(default)]
    pub linkage: BTreeMap<String, Linkage>,

    /// Runtime artifacts to import from dependency packages
    #[serde(default)]
    pub imports: Vec<ImportRule>,

    /// External program overrides
    #[serde(default, skip_serializing_if = "Tools::is_empty")]
    pub tools: Tools,
}

/// The `[options]` table of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeOptions {
    /// Default for `build_tests`
    #[serde(default = "default_true")]
    pub build_tests: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for RecipeOptions {
    fn default() -> Self {
        Self { build_tests: true }
    }
}

fn reference(name: &str, version: &str, user: &str) -> Reference {
    Reference::new(name, version, user, "stable")
}

impl Default for Recipe {
    /// The imageflow native components recipe
    fn default() -> Self {
        let linkage = [
            ("libjpeg-turbo", Linkage::Static),
            ("libpng", Linkage::Static),
            ("giflib", Linkage::Static),
            ("zlib", Linkage::Static),
            ("libcurl", Linkage::Static),
            ("OpenSSL", Linkage::Shared),
        ]
        .into_iter()
        .map(|(name, linkage)| (name.to_string(), linkage))
        .collect();

        Self {
            requires: vec![
                reference("littlecms", "2.7", "lasote"),
                reference("libpng", "1.6.21", "lasote"),
                reference("libjpeg-turbo", "1.4.2", "lasote"),
                reference("giflib", "5.1.2", "lasote"),
            ],
            project: ProjectInfo {
                name: "imageflow".to_string(),
                shared: true,
            },
            test_requires: vec![
                TestRequirement::new(reference("catch", "1.3.0", "TyRoXx")),
                TestRequirement::new(reference("libcurl", "7.47.1", "lasote")),
                TestRequirement::new(reference("theft", "0.2.0", "lasote")).skip_on(Os::Windows),
            ],
            options: RecipeOptions::default(),
            linkage,
            imports: vec![
                ImportRule::new("*.so", "bin", "bin"),
                ImportRule::new("*.dll", "bin", "bin"),
                ImportRule::new("*.dylib*", "lib", "bin"),
                ImportRule::new("*cacert.pem", "", "bin").flat(),
                ImportRule::new("*cacert.pem", "", ".").flat(),
            ],
            tools: Tools::default(),
        }
    }
}

impl Recipe {
    /// Default options declared by this recipe
    ///
    /// The project's own `shared` flag is folded into the linkage table under
    /// the project name so `-o <project>:shared=..` overrides it.
    #[must_use]
    pub fn default_options(&self) -> Options {
        let mut linkage = self.linkage.clone();
        linkage.insert(self.project.name.clone(), Linkage::from_shared(self.project.shared));
        Options {
            build_tests: self.options.build_tests,
            linkage,
        }
    }
}
