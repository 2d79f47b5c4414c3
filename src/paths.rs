//! Centralized path definitions for flowbuild
//!
//! ## Layout
//!
//! ### Per-Project (source folder)
//!
//! ```text
//! project/
//! ├── flowbuild.toml            # Recipe
//! ├── flowbuildinfo.cmake       # Generated include/lib/bin dirs per package
//! ├── flowbuild_imports.json    # Files staged by the last install
//! ├── cacert.pem                # Imported certificate bundle
//! ├── bin/                      # Imported runtime libraries
//! └── build/                    # Generated build tree
//! ```
//!
//! ### Global (user-level)
//!
//! ```text
//! ~/.flowbuild/                 # or $FLOWBUILD_HOME
//! ├── config.toml               # Store location, tools, default settings
//! └── data/                     # Package store
//!     └── <name>/<version>/<user>/<channel>/package/
//!         └── flowbuild_package.toml   # Requirements of the package
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::models::Reference;

// =============================================================================
// Project-level paths
// =============================================================================

/// Recipe filename
pub const RECIPE_FILE: &str = "flowbuild.toml";

/// Generated CMake build-info filename
pub const BUILDINFO_FILE: &str = "flowbuildinfo.cmake";

/// Import manifest filename
pub const IMPORTS_MANIFEST: &str = "flowbuild_imports.json";

/// Get path to the recipe inside a project folder
#[must_use]
pub fn recipe(project: &Path) -> PathBuf {
    project.join(RECIPE_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Environment variable overriding the global directory
pub const HOME_ENV: &str = "FLOWBUILD_HOME";

/// Global directory name under the user's home
const GLOBAL_DIR: &str = ".flowbuild";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default package store directory name
const STORE_DIR: &str = "data";

/// Package folder inside a reference's store entry
const PACKAGE_DIR: &str = "package";

/// Per-package manifest filename, inside the package folder
pub const PACKAGE_MANIFEST: &str = "flowbuild_package.toml";

/// Get the global flowbuild directory.
///
/// Returns `$FLOWBUILD_HOME` when set, `~/.flowbuild/` otherwise.
#[must_use]
pub fn global_dir() -> PathBuf {
    global_dir_from(std::env::var_os(HOME_ENV))
}

fn global_dir_from(home_override: Option<OsString>) -> PathBuf {
    home_override.filter(|v| !v.is_empty()).map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR),
        PathBuf::from,
    )
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default package store.
#[must_use]
pub fn default_store() -> PathBuf {
    global_dir().join(STORE_DIR)
}

/// Get the package folder for a reference inside a store.
#[must_use]
pub fn package_dir(store: &Path, reference: &Reference) -> PathBuf {
    store
        .join(&reference.name)
        .join(&reference.version)
        .join(&reference.user)
        .join(&reference.channel)
        .join(PACKAGE_DIR)
}

/// Get the manifest path inside a package folder.
#[must_use]
pub fn package_manifest(package: &Path) -> PathBuf {
    package.join(PACKAGE_MANIFEST)
}
