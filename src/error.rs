//! Error types for flowbuild
//!
//! Every fallible library operation returns [`BuildError`]. The CLI layer
//! wraps these in `anyhow` for context.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::Step;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while resolving, staging or building
#[derive(Debug, Error)]
pub enum BuildError {
    /// A package reference did not match `name/version@user/channel`
    #[error("invalid reference '{0}': expected name/version@user/channel")]
    InvalidReference(String),

    /// An option override was malformed or named an unknown option
    #[error("invalid option '{0}'")]
    InvalidOption(String),

    /// A setting override named an unknown setting or carried an unknown value
    #[error("invalid setting {name}={value}")]
    InvalidSetting {
        /// Setting name
        name: String,
        /// Rejected value
        value: String,
    },

    /// No recipe file in the project directory
    #[error("recipe not found: {0} (run 'flowbuild init' first)")]
    RecipeNotFound(PathBuf),

    /// A recipe or config file could not be parsed
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The recipe could not be serialized
    #[error("failed to serialize recipe: {0}")]
    RecipeWrite(#[from] toml::ser::Error),

    /// A resolved package is missing from the local store
    #[error("package {reference} not found in store (looked in {path})")]
    PackageNotFound {
        /// Reference that was looked up
        reference: String,
        /// Expected package folder
        path: PathBuf,
    },

    /// An import rule carried an invalid glob pattern
    #[error("invalid import pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking a package directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// An external program could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// An external build step exited unsuccessfully
    #[error("{step} step failed ({})", describe_code(.code))]
    StepFailed {
        /// Step that failed
        step: Step,
        /// Exit code, `None` if terminated by a signal
        code: Option<i32>,
    },
}

#[allow(clippy::ref_option)]
fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"))
}
