//! Dependency resolution
//!
//! Turns a recipe, the effective options and the target settings into the
//! ordered set of packages the build needs. [`resolve`] covers the recipe's
//! own requirements; [`resolve_transitive`] also follows what each package
//! declares through a [`PackageIndex`].

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::core::models::{Options, Recipe, ResolvedDependency, Settings};
use crate::core::ports::PackageIndex;

/// The outcome of resolving a recipe
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Resolved packages, regular requirements first
    pub dependencies: Vec<ResolvedDependency>,
    /// Linkage entries that name no resolved package
    pub unused_linkage: Vec<String>,
}

impl Resolution {
    /// Whether a package with this name was resolved
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.reference.name == name)
    }

    /// Names of resolved packages, in resolution order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.reference.name.as_str()).collect()
    }
}

/// Resolve the dependency set for one build
///
/// Regular requirements are always included. Test requirements are included
/// only when `options.build_tests` is set and the requirement is not skipped
/// on `settings.os`. A package name appears at most once; the first
/// declaration wins.
#[must_use]
pub fn resolve(recipe: &Recipe, options: &Options, settings: &Settings) -> Resolution {
    let mut seen = HashSet::new();
    let mut dependencies = Vec::new();

    for reference in &recipe.requires {
        if seen.insert(reference.name.clone()) {
            dependencies.push(ResolvedDependency {
                reference: reference.clone(),
                linkage: options.linkage_for(&reference.name),
                test_only: false,
            });
        }
    }

    if options.build_tests {
        for requirement in &recipe.test_requires {
            if !requirement.applies_to(settings.os) {
                log::debug!(
                    "Skipping {} on {} (not supported)",
                    requirement.reference,
                    settings.os
                );
                continue;
            }
            if seen.insert(requirement.reference.name.clone()) {
                dependencies.push(ResolvedDependency {
                    reference: requirement.reference.clone(),
                    linkage: options.linkage_for(&requirement.reference.name),
                    test_only: true,
                });
            }
        }
    }

    log::debug!("Resolved {} direct package(s)", dependencies.len());
    Resolution {
        unused_linkage: unused_linkage(recipe, options, &seen),
        dependencies,
    }
}

/// Resolve the full dependency set, following package requirements
///
/// Starts from [`resolve`] and walks the requirements each package declares,
/// breadth first. A name already resolved is never replaced, so the recipe's
/// own declarations win over anything a package asks for. Transitive packages
/// take their linkage from `options` and are test-only when the package that
/// pulled them in is.
pub fn resolve_transitive<I: PackageIndex>(
    recipe: &Recipe,
    options: &Options,
    settings: &Settings,
    index: &I,
) -> crate::Result<Resolution> {
    let direct = resolve(recipe, options, settings);
    let mut seen: HashSet<String> =
        direct.dependencies.iter().map(|d| d.reference.name.clone()).collect();
    let mut queue: VecDeque<usize> = (0..direct.dependencies.len()).collect();
    let mut dependencies = direct.dependencies;

    while let Some(i) = queue.pop_front() {
        let parent = dependencies[i].clone();
        for reference in index.requires(&parent.reference)? {
            if !seen.insert(reference.name.clone()) {
                log::debug!("{} (from {}) already resolved", reference, parent.reference);
                continue;
            }
            log::debug!("{} requires {}", parent.reference, reference);
            queue.push_back(dependencies.len());
            dependencies.push(ResolvedDependency {
                linkage: options.linkage_for(&reference.name),
                reference,
                test_only: parent.test_only,
            });
        }
    }

    log::debug!("Resolved {} package(s)", dependencies.len());
    Ok(Resolution {
        unused_linkage: unused_linkage(recipe, options, &seen),
        dependencies,
    })
}

fn unused_linkage(recipe: &Recipe, options: &Options, seen: &HashSet<String>) -> Vec<String> {
    let unused: Vec<String> = options
        .linkage
        .keys()
        .filter(|name| *name != &recipe.project.name && !seen.contains(*name))
        .cloned()
        .collect();
    for name in &unused {
        log::debug!("Linkage for {name} applies to no resolved package");
    }
    unused
}
