//! Business logic services
//!
//! - [`resolver`] - Resolve the dependency set for a build
//! - [`flags`] - Compute generator flags and step invocations
//! - [`pipeline`] - Run the generate/build/test sequence

pub mod flags;
pub mod pipeline;
pub mod resolver;

pub use pipeline::{BuildPipeline, BuildPlan, BuildReport, StepOutcome, ensure_build_dir};
pub use resolver::{Resolution, resolve, resolve_transitive};
