//! Command implementations

mod build;
mod context;
mod info;
mod init;
mod install;

pub use build::{BuildFlags, build};
pub use info::info;
pub use init::init;
pub use install::install;
