#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the hook-coverage binary.
#[macro_export]
macro_rules! hook_coverage {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("hook-coverage"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates an empty Python source file.
    pub fn create_py(&self, relative_path: &str) {
        self.create_file(relative_path, "x = 1\n");
    }

    /// Writes `.pre-commit-config.yaml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".pre-commit-config.yaml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One hook restricted to `src/`.
pub const SRC_ONLY_CONFIG: &str = r"
repos:
  - repo: local
    hooks:
      - id: h1
        files: ^src/
";

/// One hook that skips anything containing `test`.
pub const EXCLUDE_TEST_CONFIG: &str = r"
repos:
  - repo: local
    hooks:
      - id: h2
        exclude: test
";

/// Two hooks from different repositories, one with args.
pub const TWO_HOOK_CONFIG: &str = r#"
repos:
  - repo: https://github.com/psf/black
    rev: 24.1.0
    hooks:
      - id: black
        args: ["--line-length", "100"]
  - repo: https://github.com/pycqa/flake8
    rev: 7.0.0
    hooks:
      - id: flake8
        exclude: tests/
"#;
