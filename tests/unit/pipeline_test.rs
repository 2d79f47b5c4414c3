//! Tests for the build pipeline against a recording runner

use std::fs;

use flowbuild::BuildError;
use flowbuild::core::models::{Recipe, Step, Tools};
use flowbuild::core::services::{BuildPipeline, BuildPlan};
use tempfile::TempDir;

use crate::common::{RecordingRunner, linux_settings};

fn plan_in(source: &TempDir, build_tests: bool) -> BuildPlan {
    let recipe = Recipe::default();
    let mut options = recipe.default_options();
    options.build_tests = build_tests;
    BuildPlan::new(&recipe, &options, &linux_settings(), &Tools::default(), source.path())
}

#[test]
fn runs_all_three_steps_in_order() {
    let source = TempDir::new().unwrap();
    let plan = plan_in(&source, true);
    let runner = RecordingRunner::new();

    let report = BuildPipeline::new(&runner, &plan).run().unwrap();

    let steps: Vec<Step> = report.steps.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![Step::Generate, Step::Build, Step::Test]);
    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].args, vec!["--build", "."]);
    assert_eq!(calls[2].program, "ctest");
}

#[test]
fn skips_test_step_without_tests() {
    let source = TempDir::new().unwrap();
    let plan = plan_in(&source, false);
    let runner = RecordingRunner::new();

    let report = BuildPipeline::new(&runner, &plan).run().unwrap();

    assert_eq!(report.steps.len(), 2);
    assert_eq!(runner.calls().len(), 2);
}

#[test]
fn creates_missing_build_dir() {
    let source = TempDir::new().unwrap();
    let plan = plan_in(&source, true);

    let report = BuildPipeline::new(&RecordingRunner::new(), &plan).run().unwrap();

    assert!(report.build_dir_created);
    assert!(source.path().join("build").is_dir());
}

#[test]
fn reuses_existing_build_dir() {
    let source = TempDir::new().unwrap();
    fs::create_dir(source.path().join("build")).unwrap();
    fs::write(source.path().join("build/CMakeCache.txt"), "cached").unwrap();
    let plan = plan_in(&source, true);

    let report = BuildPipeline::new(&RecordingRunner::new(), &plan).run().unwrap();

    assert!(!report.build_dir_created);
    assert_eq!(
        fs::read_to_string(source.path().join("build/CMakeCache.txt")).unwrap(),
        "cached"
    );
}

#[test]
fn failure_at_each_step_stops_the_rest() {
    let expected = [Step::Generate, Step::Build, Step::Test];
    for (index, step) in expected.iter().enumerate() {
        let source = TempDir::new().unwrap();
        let plan = plan_in(&source, true);
        let runner = RecordingRunner::failing_at(index);

        let err = BuildPipeline::new(&runner, &plan).run().unwrap_err();

        match err {
            BuildError::StepFailed { step: failed, code } => {
                assert_eq!(failed, *step);
                assert_eq!(code, Some(1));
            },
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(runner.calls().len(), index + 1, "steps ran after {step} failed");
    }
}

#[test]
fn signal_termination_is_a_failure() {
    let source = TempDir::new().unwrap();
    let plan = plan_in(&source, true);
    let runner = RecordingRunner::with_codes(vec![Some(0), None]);

    let err = BuildPipeline::new(&runner, &plan).run().unwrap_err();

    assert!(matches!(err, BuildError::StepFailed { step: Step::Build, code: None }));
    assert_eq!(err.to_string(), "build step failed (terminated by signal)");
    assert_eq!(runner.calls().len(), 2);
}
