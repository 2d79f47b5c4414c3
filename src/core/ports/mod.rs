//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! programs or storage. Implementations live in the `adapters` module.

mod index;
mod runner;

#[cfg(test)]
pub use index::MockPackageIndex;
pub use index::PackageIndex;
#[cfg(test)]
pub use runner::MockCommandRunner;
pub use runner::{CommandRunner, Invocation};
