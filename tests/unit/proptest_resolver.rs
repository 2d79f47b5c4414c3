//! Property-based tests for resolution and flags
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::path::Path;

use flowbuild::core::models::{Os, Recipe, Reference, Settings, Tools};
use flowbuild::core::services::flags::ENABLE_TEST_FLAG;
use flowbuild::core::services::{BuildPlan, resolve};
use proptest::prelude::*;

fn os_strategy() -> impl Strategy<Value = Os> {
    prop_oneof![Just(Os::Windows), Just(Os::Linux), Just(Os::Macos), Just(Os::FreeBSD)]
}

fn settings_for(os: Os) -> Settings {
    let mut settings = Settings::detect();
    settings.os = os;
    settings
}

proptest! {
    /// Test-only packages are resolved exactly when tests are built
    #[test]
    fn test_requirements_follow_build_tests(build_tests in any::<bool>(), os in os_strategy()) {
        let recipe = Recipe::default();
        let mut options = recipe.default_options();
        options.build_tests = build_tests;

        let resolution = resolve(&recipe, &options, &settings_for(os));

        prop_assert_eq!(resolution.contains("catch"), build_tests);
        prop_assert_eq!(resolution.contains("libcurl"), build_tests);
        for reference in &recipe.requires {
            prop_assert!(resolution.contains(&reference.name));
        }
    }

    /// theft is never resolved for Windows, and always with tests elsewhere
    #[test]
    fn theft_skipped_only_on_windows(build_tests in any::<bool>(), os in os_strategy()) {
        let recipe = Recipe::default();
        let mut options = recipe.default_options();
        options.build_tests = build_tests;

        let resolution = resolve(&recipe, &options, &settings_for(os));

        prop_assert_eq!(resolution.contains("theft"), build_tests && os != Os::Windows);
    }

    /// The generator gets the test flag iff tests are built
    #[test]
    fn test_flag_iff_build_tests(build_tests in any::<bool>(), os in os_strategy()) {
        let recipe = Recipe::default();
        let mut options = recipe.default_options();
        options.build_tests = build_tests;

        let plan = BuildPlan::new(&recipe, &options, &settings_for(os), &Tools::default(), Path::new("/src"));

        prop_assert_eq!(plan.generate.has_arg(ENABLE_TEST_FLAG), build_tests);
        prop_assert_eq!(plan.test.is_some(), build_tests);
    }

    /// Resolved names are unique
    #[test]
    fn resolved_names_are_unique(extra in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let mut recipe = Recipe::default();
        for name in &extra {
            recipe.requires.push(Reference::new(name.clone(), "1.0", "user", "stable"));
        }

        let resolution = resolve(&recipe, &recipe.default_options(), &settings_for(Os::Linux));
        let mut names = resolution.names();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);
    }

    /// References print back to the string they were parsed from
    #[test]
    fn reference_display_round_trips(
        name in "[a-z][a-z0-9_-]{0,12}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,3})?",
        user in "[A-Za-z]{1,8}",
        channel in "(stable|testing|ci)"
    ) {
        let text = format!("{name}/{version}@{user}/{channel}");
        let reference = Reference::parse(&text).unwrap();
        prop_assert_eq!(reference.to_string(), text);
    }
}
