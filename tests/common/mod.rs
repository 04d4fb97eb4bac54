//! Shared testing utilities for historic-params CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog with one space, its home project, and two pages.
pub const DEMO_CATALOG: &str = r#"
spaces:
  DEMO:
    home_repository: repo-demo
    systems_under_test:
      - { name: java, project: Demo }
      - { name: dotnet, project: Demo }
  EMPTY:
    home_repository: repo-empty
    systems_under_test:
      - { name: java }
projects:
  repo-demo:
    systems_under_test:
      - { name: java, project: Demo }
      - { name: dotnet, project: Demo, default: true }
  repo-empty:
    systems_under_test:
      - { name: java }
pages:
  "Demo Page":
    executable: false
  "Runner Page":
    executable: true
    selected_sut: "Demo@java"
"#;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with the demo catalog written out.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        ctx.write("catalog.yml", DEMO_CATALOG);
        ctx
    }

    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    /// Path to the demo catalog.
    pub fn catalog(&self) -> PathBuf {
        self.root.path().join("catalog.yml")
    }

    /// Write a file under the test directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("historic-params").expect("Failed to locate historic-params binary");
        cmd.current_dir(self.dir())
            .env_remove("HISTORIC_PARAMS_CONFIG")
            .env_remove("HISTORIC_PARAMS_LOG");
        cmd
    }

    /// `resolve` against the demo catalog for `page` in space DEMO.
    pub fn resolve(&self, page: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg("resolve")
            .arg("--catalog")
            .arg(self.catalog())
            .args(["--space", "DEMO", "--page", page, "--execution", "exec-42"]);
        cmd
    }
}
