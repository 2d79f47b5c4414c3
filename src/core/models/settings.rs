//! Target settings
//!
//! Settings describe the machine the project is being built for. They are
//! detected from the host and can be overridden per setting with `-s`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Target operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Os {
    /// Microsoft Windows
    Windows,
    /// Linux
    Linux,
    /// macOS
    Macos,
    /// `FreeBSD`
    FreeBSD,
}

impl Os {
    /// Operating system of the running host
    #[must_use]
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::Macos,
            "freebsd" => Self::FreeBSD,
            _ => Self::Linux,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Linux => write!(f, "Linux"),
            Self::Macos => write!(f, "Macos"),
            Self::FreeBSD => write!(f, "FreeBSD"),
        }
    }
}

impl FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::Macos),
            "freebsd" => Ok(Self::FreeBSD),
            _ => Err(format!("Invalid os: {s}. Use: Windows, Linux, Macos, FreeBSD")),
        }
    }
}

/// Target architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arch {
    /// 32-bit x86
    X86,
    /// 64-bit x86
    X86_64,
    /// 32-bit ARM
    Armv7,
    /// 64-bit ARM
    Armv8,
}

impl Arch {
    /// Architecture of the running host
    #[must_use]
    pub fn host() -> Self {
        match std::env::consts::ARCH {
            "x86" => Self::X86,
            "arm" => Self::Armv7,
            "aarch64" => Self::Armv8,
            _ => Self::X86_64,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X86 => write!(f, "x86"),
            Self::X86_64 => write!(f, "x86_64"),
            Self::Armv7 => write!(f, "armv7"),
            Self::Armv8 => write!(f, "armv8"),
        }
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x86" => Ok(Self::X86),
            "x86_64" | "amd64" => Ok(Self::X86_64),
            "armv7" => Ok(Self::Armv7),
            "armv8" | "aarch64" => Ok(Self::Armv8),
            _ => Err(format!("Invalid arch: {s}. Use: x86, x86_64, armv7, armv8")),
        }
    }
}

/// Compiler family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compiler {
    /// GNU gcc
    #[serde(rename = "gcc")]
    Gcc,
    /// LLVM clang
    #[serde(rename = "clang")]
    Clang,
    /// Apple clang
    #[serde(rename = "apple-clang")]
    AppleClang,
    /// Microsoft Visual Studio
    #[serde(rename = "Visual Studio")]
    VisualStudio,
}

impl Compiler {
    /// Default compiler for an operating system
    #[must_use]
    pub const fn default_for(os: Os) -> Self {
        match os {
            Os::Windows => Self::VisualStudio,
            Os::Macos => Self::AppleClang,
            Os::FreeBSD => Self::Clang,
            Os::Linux => Self::Gcc,
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gcc => write!(f, "gcc"),
            Self::Clang => write!(f, "clang"),
            Self::AppleClang => write!(f, "apple-clang"),
            Self::VisualStudio => write!(f, "Visual Studio"),
        }
    }
}

impl FromStr for Compiler {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcc" => Ok(Self::Gcc),
            "clang" => Ok(Self::Clang),
            "apple-clang" => Ok(Self::AppleClang),
            "visual studio" | "msvc" => Ok(Self::VisualStudio),
            _ => Err(format!(
                "Invalid compiler: {s}. Use: gcc, clang, apple-clang, Visual Studio"
            )),
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildType {
    /// Unoptimized with debug info
    Debug,
    /// Optimized
    #[default]
    Release,
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "Debug"),
            Self::Release => write!(f, "Release"),
        }
    }
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            _ => Err(format!("Invalid build_type: {s}. Use: Debug, Release")),
        }
    }
}

/// The full settings record for one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target operating system
    pub os: Os,
    /// Target architecture
    pub arch: Arch,
    /// Compiler family
    pub compiler: Compiler,
    /// Compiler version, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_version: Option<String>,
    /// Build configuration
    pub build_type: BuildType,
}

impl Settings {
    /// Detect settings for the running host
    #[must_use]
    pub fn detect() -> Self {
        let os = Os::host();
        Self {
            os,
            arch: Arch::host(),
            compiler: Compiler::default_for(os),
            compiler_version: None,
            build_type: BuildType::Release,
        }
    }

    /// Apply a single `name=value` override
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        let invalid = || BuildError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "os" => self.os = value.parse().map_err(|_| invalid())?,
            "arch" => self.arch = value.parse().map_err(|_| invalid())?,
            "compiler" => self.compiler = value.parse().map_err(|_| invalid())?,
            "compiler.version" | "compiler_version" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.compiler_version = Some(value.to_string());
            },
            "build_type" => self.build_type = value.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        }
        Ok(())
    }

    /// Apply a `name=value` override string as given on the command line
    pub fn apply_str(&mut self, assignment: &str) -> Result<(), BuildError> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| BuildError::InvalidSetting {
            name: assignment.to_string(),
            value: String::new(),
        })?;
        self.apply(name.trim(), value.trim())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::detect()
    }
}
