//! Global configuration management
//!
//! User-level defaults live in `~/.flowbuild/config.toml` (or
//! `$FLOWBUILD_HOME/config.toml`). They sit between the built-in defaults and
//! the project recipe:
//!
//! built-in < global config < recipe < command line

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{Options, Recipe, Settings, Tools};
use crate::error::{BuildError, Result};
use crate::paths;

/// Global flowbuild configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Package store location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
    /// Program locations
    #[serde(default)]
    pub tools: Tools,
    /// Default setting overrides (e.g., `build_type = "Debug"`)
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or the default if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| BuildError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to a specific path
    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Store location, falling back to the default store
    #[must_use]
    pub fn store(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(paths::default_store)
    }
}

/// Command-line overrides for one invocation
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `-o` assignments
    pub options: Vec<String>,
    /// `-s` assignments
    pub settings: Vec<String>,
    /// `--store`
    pub store: Option<PathBuf>,
}

/// The fully layered configuration for one build
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// The project recipe
    pub recipe: Recipe,
    /// Effective options
    pub options: Options,
    /// Effective settings
    pub settings: Settings,
    /// Effective program locations
    pub tools: Tools,
    /// Package store location
    pub store: PathBuf,
}

impl BuildConfig {
    /// Layer built-in defaults, global config, recipe and overrides
    pub fn layer(recipe: Recipe, global: &GlobalConfig, overrides: &Overrides) -> Result<Self> {
        let mut settings = Settings::detect();
        for (name, value) in &global.settings {
            settings.apply(name, value)?;
        }
        for assignment in &overrides.settings {
            settings.apply_str(assignment)?;
        }

        let mut options = recipe.default_options();
        for assignment in &overrides.options {
            options.apply(assignment)?;
        }

        let tools = global.tools.merged(&recipe.tools);
        let store = overrides.store.clone().unwrap_or_else(|| global.store());

        log::debug!(
            "Effective config: os={} arch={} compiler={} build_type={} build_tests={}",
            settings.os,
            settings.arch,
            settings.compiler,
            settings.build_type,
            options.build_tests
        );

        Ok(Self {
            recipe,
            options,
            settings,
            tools,
            store,
        })
    }
}
