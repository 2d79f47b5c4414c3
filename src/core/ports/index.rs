//! Package index port
//!
//! Answers what a package requires, so resolution can follow requirements
//! past the recipe's direct ones.

use crate::core::models::Reference;

/// Looks up the requirements a package declares
#[cfg_attr(test, mockall::automock)]
pub trait PackageIndex {
    /// Direct requirements of `reference`, in declaration order
    ///
    /// A package the index knows nothing about has no requirements.
    fn requires(&self, reference: &Reference) -> crate::Result<Vec<Reference>>;
}
