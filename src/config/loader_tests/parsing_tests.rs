//! Tests for config parsing, explicit path loading, and error handling.

use std::path::Path;

use crate::config::loader::RegistryLoader;
use crate::config::FileRegistryLoader;
use crate::error::HookCoverageError;

use super::mock_fs::MockFileSystem;

const FULL_CONFIG: &str = r#"
default_stages: [pre-commit]
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
        files: ^src/
        exclude: migrations/
  - repo: meta
"#;

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file("/custom/hooks.yaml", FULL_CONFIG);

    let registry = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/custom/hooks.yaml"))
        .unwrap();

    assert_eq!(registry.ids().collect::<Vec<_>>(), ["black", "flake8"]);

    let black = registry.get("black").unwrap();
    assert!(black.include.is_none());
    assert!(black.exclude.is_none());
    assert_eq!(black.joined_args().as_deref(), Some("--line-length 100"));

    let flake8 = registry.get("flake8").unwrap();
    assert_eq!(flake8.include.as_ref().unwrap().as_str(), "^src/");
    assert_eq!(flake8.exclude.as_ref().unwrap().as_str(), "migrations/");
    assert!(flake8.args.is_empty());
}

#[test]
fn repo_without_hooks_is_allowed() {
    let fs = MockFileSystem::new().with_file("/p/c.yaml", "repos:\n  - repo: meta\n");

    let registry = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/p/c.yaml"))
        .unwrap();

    assert!(registry.is_empty());
}

#[test]
fn missing_config_file_is_read_error() {
    let fs = MockFileSystem::new();

    let err = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/project/.pre-commit-config.yaml"))
        .unwrap_err();

    assert!(matches!(err, HookCoverageError::ConfigRead { .. }));
    assert!(err.is_config_fault());
    assert!(err.to_string().contains(".pre-commit-config.yaml"));
}

#[test]
fn missing_repos_key_is_error() {
    let fs = MockFileSystem::new().with_file("/p/c.yaml", "default_stages: [pre-commit]\n");

    let err = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/p/c.yaml"))
        .unwrap_err();

    assert!(matches!(err, HookCoverageError::Config(_)));
    assert!(err.is_config_fault());
    assert!(err.to_string().contains("repos"));
    assert!(err.to_string().contains("/p/c.yaml"));
}

#[test]
fn hook_without_id_is_error() {
    let content = "repos:\n  - repo: local\n    hooks:\n      - files: ^src/\n";
    let fs = MockFileSystem::new().with_file("/p/c.yaml", content);

    let err = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/p/c.yaml"))
        .unwrap_err();

    assert!(matches!(err, HookCoverageError::YamlParse { .. }));
    assert!(err.to_string().contains("id"));
}

#[test]
fn malformed_yaml_is_error() {
    let fs = MockFileSystem::new().with_file("/p/c.yaml", "repos: [unclosed\n");

    let err = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/p/c.yaml"))
        .unwrap_err();

    assert!(err.is_config_fault());
}

#[test]
fn invalid_hook_regex_is_error() {
    let content = "repos:\n  - repo: local\n    hooks:\n      - id: mypy\n        exclude: '[a-'\n";
    let fs = MockFileSystem::new().with_file("/p/c.yaml", content);

    let err = FileRegistryLoader::with_fs(fs)
        .load_from_path(Path::new("/p/c.yaml"))
        .unwrap_err();

    assert!(matches!(err, HookCoverageError::InvalidPattern { ref hook, .. } if hook == "mypy"));
}

#[test]
fn load_config_keeps_raw_declarations() {
    let fs = MockFileSystem::new().with_file("/custom/hooks.yaml", FULL_CONFIG);

    let config = FileRegistryLoader::with_fs(fs)
        .load_config(Path::new("/custom/hooks.yaml"))
        .unwrap();

    assert_eq!(config.repos.len(), 3);
    assert!(config.repos[2].hooks.is_empty());
    assert_eq!(config.repos[0].repo.as_deref(), Some("https://github.com/psf/black"));
    assert_eq!(config.hook_declarations().count(), 2);
}
