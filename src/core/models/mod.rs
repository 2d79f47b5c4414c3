//! Domain models for flowbuild
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Reference`] - A pinned `name/version@user/channel` package
//! - [`Settings`] - The target the project is built for
//! - [`Options`] - `build_tests` and per-package linkage
//! - [`Recipe`] - The declarative project description
//! - [`ResolvedDependency`] - One entry of the resolved set
//! - [`PackageManifest`] - Requirements a stored package declares
//! - [`Step`] - An external build step

mod options;
mod recipe;
mod reference;
mod requirement;
mod settings;
mod step;

pub use options::{Linkage, Options, parse_bool};
pub use recipe::{ImportRule, ProjectInfo, Recipe, RecipeOptions, Tools};
pub use reference::Reference;
pub use requirement::{PackageManifest, ResolvedDependency, TestRequirement};
pub use settings::{Arch, BuildType, Compiler, Os, Settings};
pub use step::Step;
