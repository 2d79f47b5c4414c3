//! CMake build-info generator
//!
//! Writes `flowbuildinfo.cmake`, which the project's `CMakeLists.txt` includes
//! to find headers and libraries of every located package.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::store::LocatedPackage;
use crate::error::Result;
use crate::paths::BUILDINFO_FILE;

/// Variable suffix for a package name: upper-cased, non-alphanumerics as `_`
#[must_use]
pub fn variable_suffix(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

fn cmake_path(path: &Path) -> String {
    format!("\"{}\"", path.to_string_lossy().replace('\\', "/"))
}

fn existing_dirs(package: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| package.join(n)).filter(|p| p.is_dir()).collect()
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| cmake_path(p)).collect::<Vec<_>>().join(" ")
}

/// Render the build-info file for a set of packages
#[must_use]
pub fn render(packages: &[LocatedPackage]) -> String {
    let mut out = String::from("# Generated by flowbuild. Do not edit.\n\n");
    let mut all_include = Vec::new();
    let mut all_lib = Vec::new();
    let mut all_bin = Vec::new();

    for package in packages {
        let suffix = variable_suffix(&package.dependency.reference.name);
        let include = existing_dirs(&package.path, &["include"]);
        let lib = existing_dirs(&package.path, &["lib"]);
        let bin = existing_dirs(&package.path, &["bin"]);

        let _ = writeln!(out, "# {} ({})", package.dependency.reference, package.dependency.linkage);
        let _ = writeln!(out, "set(FLOWBUILD_ROOT_{suffix} {})", cmake_path(&package.path));
        let _ = writeln!(out, "set(FLOWBUILD_INCLUDE_DIRS_{suffix} {})", join_paths(&include));
        let _ = writeln!(out, "set(FLOWBUILD_LIB_DIRS_{suffix} {})", join_paths(&lib));
        let _ = writeln!(out, "set(FLOWBUILD_BIN_DIRS_{suffix} {})", join_paths(&bin));
        out.push('\n');

        all_include.extend(include);
        all_lib.extend(lib);
        all_bin.extend(bin);
    }

    let _ = writeln!(out, "set(FLOWBUILD_INCLUDE_DIRS {})", join_paths(&all_include));
    let _ = writeln!(out, "set(FLOWBUILD_LIB_DIRS {})", join_paths(&all_lib));
    let _ = writeln!(out, "set(FLOWBUILD_BIN_DIRS {})", join_paths(&all_bin));
    out.push_str(
        "\nmacro(flowbuild_basic_setup)\n    \
         include_directories(${FLOWBUILD_INCLUDE_DIRS})\n    \
         link_directories(${FLOWBUILD_LIB_DIRS})\n\
         endmacro()\n",
    );
    out
}

/// Write the build-info file into `install_folder`
pub fn write(packages: &[LocatedPackage], install_folder: &Path) -> Result<PathBuf> {
    let path = install_folder.join(BUILDINFO_FILE);
    fs::write(&path, render(packages))?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}
