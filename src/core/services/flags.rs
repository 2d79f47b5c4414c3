//! Generator flag computation
//!
//! Computes the CMake generator, the generator command line, and the three
//! step invocations from the target settings and effective options.

use std::path::Path;

use crate::core::models::{Arch, BuildType, Compiler, Os, Settings, Tools};
use crate::core::ports::Invocation;

/// Flag passed to the generator when tests are built
pub const ENABLE_TEST_FLAG: &str = "-DENABLE_TEST=ON";

/// Configuration the test runner is pointed at
pub const TEST_CONFIGURATION: BuildType = BuildType::Release;

/// CMake generator name for the target
#[must_use]
pub fn generator_name(settings: &Settings) -> String {
    match (settings.os, settings.compiler) {
        (Os::Windows, Compiler::VisualStudio) => {
            let version = settings.compiler_version.as_deref().unwrap_or("14");
            if settings.arch == Arch::X86_64 {
                format!("Visual Studio {version} Win64")
            } else {
                format!("Visual Studio {version}")
            }
        },
        (Os::Windows, Compiler::Gcc) => "MinGW Makefiles".to_string(),
        _ => "Unix Makefiles".to_string(),
    }
}

/// Whether the generator builds several configurations from one tree
#[must_use]
pub const fn is_multi_config(settings: &Settings) -> bool {
    matches!((settings.os, settings.compiler), (Os::Windows, Compiler::VisualStudio))
}

/// Generator arguments derived from the settings
#[must_use]
pub fn command_line(settings: &Settings, project_shared: bool) -> Vec<String> {
    let mut args = vec!["-G".to_string(), generator_name(settings)];

    if !is_multi_config(settings) {
        args.push(format!("-DCMAKE_BUILD_TYPE={}", settings.build_type));
    }
    args.push(format!("-DFLOWBUILD_COMPILER={}", settings.compiler));
    if let Some(version) = &settings.compiler_version {
        args.push(format!("-DFLOWBUILD_COMPILER_VERSION={version}"));
    }
    args.push(format!("-DFLOWBUILD_ARCH={}", settings.arch));
    args.push(format!("-DBUILD_SHARED_LIBS={}", if project_shared { "ON" } else { "OFF" }));
    args
}

/// `--build` arguments selecting the configuration, empty for single-config generators
#[must_use]
pub fn build_config(settings: &Settings) -> Vec<String> {
    if is_multi_config(settings) {
        vec!["--config".to_string(), settings.build_type.to_string()]
    } else {
        Vec::new()
    }
}

/// Everything needed to compute the three step invocations
#[derive(Debug, Clone)]
pub struct FlagInputs<'a> {
    /// Target settings
    pub settings: &'a Settings,
    /// Program locations
    pub tools: &'a Tools,
    /// Build the project as a shared library
    pub project_shared: bool,
    /// Enable the test build
    pub build_tests: bool,
}

/// Invocation that generates build files for `source_dir` inside `build_dir`
#[must_use]
pub fn generate_invocation(inputs: &FlagInputs<'_>, source_dir: &Path, build_dir: &Path) -> Invocation {
    let mut invocation = Invocation::new(inputs.tools.cmake(), build_dir)
        .arg(source_dir.to_string_lossy())
        .args(command_line(inputs.settings, inputs.project_shared));
    if inputs.build_tests {
        invocation = invocation.arg(ENABLE_TEST_FLAG);
    }
    invocation
}

/// Invocation that compiles the generated tree
#[must_use]
pub fn build_invocation(inputs: &FlagInputs<'_>, build_dir: &Path) -> Invocation {
    Invocation::new(inputs.tools.cmake(), build_dir)
        .args(["--build", "."])
        .args(build_config(inputs.settings))
}

/// Invocation that runs the test suite verbosely against the release configuration
#[must_use]
pub fn test_invocation(inputs: &FlagInputs<'_>, build_dir: &Path) -> Invocation {
    Invocation::new(inputs.tools.ctest(), build_dir)
        .args(["-V", "-C"])
        .arg(TEST_CONFIGURATION.to_string())
}
