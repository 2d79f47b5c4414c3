//! Integration tests for flowbuild CLI
//!
//! These tests run the binary against a temporary project and a fake package
//! store, covering the full cycle of: init → info → install → build


#[path = "../unit/common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use flowbuild::core::models::Recipe;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use common::FakeStore;

/// A project folder, an isolated global directory and a populated store
pub struct Workspace {
    pub project: TempDir,
    pub home: TempDir,
    pub store: FakeStore,
}

impl Workspace {
    /// Workspace whose store holds every package of the default recipe
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
            store: FakeStore::for_recipe(&Recipe::default()),
        }
    }

    pub fn path(&self) -> &Path {
        self.project.path()
    }

    /// Command running in the project folder against this workspace's store
    pub fn flowbuild(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("flowbuild"));
        cmd.current_dir(self.path())
            .env("FLOWBUILD_HOME", self.home.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Point the global config at the store
    pub fn configure_store(&self) {
        fs::write(
            self.home.path().join("config.toml"),
            format!("store = {:?}\n", self.store.root().display().to_string()),
        )
        .unwrap();
    }

    /// Write the default recipe plus extra TOML appended to it
    pub fn init_with(&self, extra: &str) {
        self.flowbuild().arg("init").assert().success();
        let path = self.path().join("flowbuild.toml");
        let mut content = fs::read_to_string(&path).unwrap();
        content.push_str(extra);
        fs::write(path, content).unwrap();
    }
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// init → info → install → build --dry-run
#[test]
fn test_e2e_dry_run_workflow() {
    let ws = Workspace::new();
    ws.configure_store();

    ws.flowbuild()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created flowbuild.toml"));

    ws.flowbuild()
        .args(["info", "-s", "os=Linux", "-s", "compiler=gcc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: imageflow"))
        .stdout(predicate::str::contains("theft/0.2.0@lasote/stable (static) [test]"))
        .stdout(predicate::str::contains("-DENABLE_TEST=ON"))
        .stdout(predicate::str::contains("ctest -V -C Release"));

    ws.flowbuild()
        .args(["install", "-s", "os=Linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing 9 package(s)"))
        .stdout(predicate::str::contains("OpenSSL/1.0.2g@lasote/stable"));

    assert!(ws.path().join("bin/libopenssl.so").is_file());
    assert!(ws.path().join("flowbuildinfo.cmake").is_file());
    assert!(ws.path().join("flowbuild_imports.json").is_file());
    assert!(ws.path().join("cacert.pem").is_file());
    assert!(ws.path().join("bin/cacert.pem").is_file());

    ws.flowbuild()
        .args(["build", "--dry-run", "--skip-install", "-s", "os=Linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created build directory"))
        .stdout(predicate::str::contains("Dry run: no commands were executed."));

    assert!(ws.path().join("build").is_dir());
}

#[test]
fn test_info_on_windows_drops_theft() {
    let ws = Workspace::new();
    ws.init_with("");

    ws.flowbuild()
        .args(["info", "-s", "os=Windows", "-s", "compiler=Visual Studio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catch/1.3.0@TyRoXx/stable"))
        .stdout(predicate::str::contains("theft").not())
        .stdout(predicate::str::contains("Visual Studio 14"));
}

#[test]
fn test_info_without_tests() {
    let ws = Workspace::new();
    ws.init_with("");

    ws.flowbuild()
        .args(["info", "-o", "build_tests=False"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[test]").not())
        .stdout(predicate::str::contains("-DENABLE_TEST=ON").not())
        .stdout(predicate::str::contains("ctest").not());
}

#[test]
fn test_info_json() {
    let ws = Workspace::new();
    ws.init_with("");

    let output = ws
        .flowbuild()
        .args(["--json", "info", "-s", "os=Linux"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project"], "imageflow");
    assert_eq!(json["build_tests"], true);
    assert_eq!(json["dependencies"].as_array().unwrap().len(), 7);
    assert_eq!(json["plan"]["test"]["program"], "ctest");
}

#[test]
fn test_info_json_follows_store_manifests() {
    let ws = Workspace::new();
    ws.configure_store();
    ws.init_with("");

    let output = ws
        .flowbuild()
        .args(["--json", "info", "-s", "os=Linux"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let deps = json["dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), 9);
    let openssl = deps
        .iter()
        .find(|d| d["reference"] == "OpenSSL/1.0.2g@lasote/stable")
        .unwrap();
    assert_eq!(openssl["linkage"], "shared");
    assert_eq!(json["unused_linkage"].as_array().unwrap().len(), 0);
}

#[test]
fn test_info_from_subfolder() {
    let ws = Workspace::new();
    ws.init_with("");
    fs::create_dir_all(ws.path().join("src/codecs")).unwrap();

    ws.flowbuild()
        .args(["info", "--source-folder", "src/codecs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: imageflow"));
}

#[test]
fn test_install_with_store_flag() {
    let ws = Workspace::new();
    ws.init_with("");
    let install = TempDir::new().unwrap();

    ws.flowbuild()
        .args(["install", "-o", "build_tests=False", "--store"])
        .arg(ws.store.root())
        .arg("--install-folder")
        .arg(install.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing 5 package(s)"))
        .stdout(predicate::str::contains("zlib/1.2.8@lasote/stable"));

    assert!(install.path().join("flowbuildinfo.cmake").is_file());
    assert!(!install.path().join("bin/libopenssl.so").exists());
    assert!(!install.path().join("cacert.pem").exists());
}

#[test]
fn test_install_with_missing_package_fails() {
    let ws = Workspace::new();
    ws.init_with("");
    let empty = TempDir::new().unwrap();

    ws.flowbuild()
        .args(["install", "--store"])
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("package littlecms/2.7@lasote/stable not found"));
}
