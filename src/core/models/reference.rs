//! Package references
//!
//! A reference pins one package version in one user/channel namespace:
//! `libpng/1.6.21@lasote/stable`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BuildError;

/// One reference component: at least one alphanumeric, so `.` and `..` never
/// become path segments inside the store
const COMPONENT: &str = r"([A-Za-z0-9_.+-]*[A-Za-z0-9][A-Za-z0-9_.+-]*)";

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{COMPONENT}/{COMPONENT}@{COMPONENT}/{COMPONENT}$"))
        .unwrap_or_else(|e| unreachable!("reference pattern is valid: {e}"))
});

/// A fully-qualified package reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    /// Package name (e.g., "libpng")
    pub name: String,
    /// Pinned version (e.g., "1.6.21")
    pub version: String,
    /// Publishing user (e.g., "lasote")
    pub user: String,
    /// Channel (e.g., "stable")
    pub channel: String,
}

impl Reference {
    /// Create a reference from its components
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        user: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            user: user.into(),
            channel: channel.into(),
        }
    }

    /// Parse a reference string
    pub fn parse(s: &str) -> Result<Self, BuildError> {
        let caps = REFERENCE_RE
            .captures(s.trim())
            .ok_or_else(|| BuildError::InvalidReference(s.to_string()))?;
        Ok(Self::new(&caps[1], &caps[2], &caps[3], &caps[4]))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}/{}", self.name, self.version, self.user, self.channel)
    }
}

impl FromStr for Reference {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
