//! Build pipeline steps

use std::fmt;

use serde::Serialize;

/// An external step of the build pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Build-file generation (`cmake <source>`)
    Generate,
    /// Compilation (`cmake --build`)
    Build,
    /// Test run (`ctest`)
    Test,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate => write!(f, "generate"),
            Self::Build => write!(f, "build"),
            Self::Test => write!(f, "test"),
        }
    }
}
