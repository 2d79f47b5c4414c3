//! Tests for generator flags and step invocations

use std::path::Path;

use flowbuild::core::models::{Recipe, Tools};
use flowbuild::core::services::BuildPlan;
use flowbuild::core::services::flags::{
    ENABLE_TEST_FLAG, FlagInputs, build_invocation, command_line, generate_invocation,
    test_invocation,
};

use crate::common::{linux_settings, windows_settings};

fn plan(build_tests: bool) -> BuildPlan {
    let recipe = Recipe::default();
    let mut options = recipe.default_options();
    options.build_tests = build_tests;
    BuildPlan::new(&recipe, &options, &linux_settings(), &Tools::default(), Path::new("/src"))
}

#[test]
fn generate_has_test_flag_with_tests() {
    assert!(plan(true).generate.has_arg(ENABLE_TEST_FLAG));
}

#[test]
fn generate_lacks_test_flag_without_tests() {
    let plan = plan(false);
    assert!(!plan.generate.has_arg(ENABLE_TEST_FLAG));
    assert!(plan.test.is_none());
}

#[test]
fn generate_points_at_source_and_runs_in_build_dir() {
    let plan = plan(true);
    assert_eq!(plan.generate.program, "cmake");
    assert_eq!(plan.generate.args[0], "/src");
    assert_eq!(plan.generate.cwd, Path::new("/src/build"));
    assert_eq!(plan.build_dir, Path::new("/src/build"));
}

#[test]
fn project_shared_flag_follows_recipe() {
    let args = plan(true).generate.args;
    assert!(args.contains(&"-DBUILD_SHARED_LIBS=ON".to_string()));
}

#[test]
fn project_shared_flag_follows_override() {
    let recipe = Recipe::default();
    let mut options = recipe.default_options();
    options.apply("imageflow:shared=False").unwrap();

    let plan = BuildPlan::new(&recipe, &options, &linux_settings(), &Tools::default(), Path::new("/src"));
    assert!(plan.generate.has_arg("-DBUILD_SHARED_LIBS=OFF"));
}

#[test]
fn single_config_generator_sets_build_type() {
    let args = command_line(&linux_settings(), false);
    assert_eq!(args[..2], ["-G".to_string(), "Unix Makefiles".to_string()]);
    assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
}

#[test]
fn multi_config_generator_selects_config_at_build() {
    let settings = windows_settings();
    let args = command_line(&settings, false);
    assert!(args.contains(&"Visual Studio 14 Win64".to_string()));
    assert!(!args.iter().any(|a| a.starts_with("-DCMAKE_BUILD_TYPE")));

    let tools = Tools::default();
    let inputs = FlagInputs {
        settings: &settings,
        tools: &tools,
        project_shared: true,
        build_tests: true,
    };
    let build = build_invocation(&inputs, Path::new("build"));
    assert_eq!(build.args, vec!["--build", ".", "--config", "Release"]);
}

#[test]
fn test_step_is_verbose_release() {
    let settings = {
        let mut s = linux_settings();
        s.apply("build_type", "Debug").unwrap();
        s
    };
    let tools = Tools::default();
    let inputs = FlagInputs {
        settings: &settings,
        tools: &tools,
        project_shared: false,
        build_tests: true,
    };

    let test = test_invocation(&inputs, Path::new("build"));
    assert_eq!(test.command_line(), "ctest -V -C Release");
}

#[test]
fn configured_tools_replace_program_names() {
    let settings = linux_settings();
    let tools = Tools {
        cmake: Some("/opt/cmake/bin/cmake".to_string()),
        ctest: Some("/opt/cmake/bin/ctest".to_string()),
    };
    let inputs = FlagInputs {
        settings: &settings,
        tools: &tools,
        project_shared: false,
        build_tests: true,
    };

    let generate = generate_invocation(&inputs, Path::new("/src"), Path::new("/src/build"));
    assert_eq!(generate.program, "/opt/cmake/bin/cmake");
    assert_eq!(test_invocation(&inputs, Path::new("/src/build")).program, "/opt/cmake/bin/ctest");
}
