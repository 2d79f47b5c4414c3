//! Adapter implementations for port traits and filesystem I/O
//!
//! - `toml/` - `flowbuild.toml` parsing and writing
//! - `process` - Command runners (spawning, dry-run)
//! - `store` - Locating packages in the local store
//! - `imports` - Copying runtime artifacts out of packages
//! - `buildinfo` - Writing `flowbuildinfo.cmake`

pub mod buildinfo;
pub mod imports;
pub mod process;
pub mod store;
pub mod toml;

pub use imports::{ImportReport, ImportedFile, stage_imports, write_manifest};
pub use process::{DryRunRunner, ProcessRunner};
pub use store::{LocatedPackage, PackageStore};
