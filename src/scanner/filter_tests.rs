use std::path::Path;

use super::*;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| (*e).to_string()).collect()
}

#[test]
fn filter_by_extension() {
    let filter = ExtensionFilter::new(exts(&["py"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("./src/main.py")));
    assert!(!filter.should_include(Path::new("./src/main.rs")));
    assert!(!filter.should_include(Path::new("./Makefile")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = ExtensionFilter::new(exts(&["py", "pyi"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("pkg/mod.py")));
    assert!(filter.should_include(Path::new("pkg/mod.pyi")));
    assert!(!filter.should_include(Path::new("pkg/mod.pyc")));
}

#[test]
fn filter_accepts_dotted_extension() {
    let filter = ExtensionFilter::new(exts(&[".py"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("a.py")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = ExtensionFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.py")));
    assert!(filter.should_include(Path::new("Makefile")));
}

#[test]
fn filter_exclude_globs_match_normalized_path() {
    let filter = ExtensionFilter::new(
        exts(&["py"]),
        &["tests/**".to_string(), "**/migrations/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("./src/app.py")));
    assert!(!filter.should_include(Path::new("./tests/test_app.py")));
    assert!(!filter.should_include(Path::new("./src/db/migrations/0001.py")));
}

#[test]
fn filter_invalid_glob_returns_error() {
    let result = ExtensionFilter::new(vec![], &["[invalid".to_string()]);

    assert!(matches!(
        result,
        Err(HookCoverageError::InvalidGlob { ref pattern, .. }) if pattern == "[invalid"
    ));
}
