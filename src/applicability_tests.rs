use regex::Regex;

use super::*;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

// ============================================================================
// normalize_path
// ============================================================================

#[test]
fn normalize_strips_current_dir_prefix() {
    assert_eq!(normalize_path("./src/a.py"), "src/a.py");
}

#[test]
fn normalize_converts_backslashes() {
    assert_eq!(normalize_path(".\\src\\pkg\\a.py"), "src/pkg/a.py");
}

#[test]
fn normalize_collapses_redundant_segments() {
    assert_eq!(normalize_path("src//pkg/./a.py"), "src/pkg/a.py");
}

#[test]
fn normalize_resolves_parent_segments() {
    assert_eq!(normalize_path("src/../lib/b.py"), "lib/b.py");
    assert_eq!(normalize_path("../other/c.py"), "../other/c.py");
}

#[test]
fn normalize_keeps_absolute_paths_absolute() {
    assert_eq!(normalize_path("/repo/./src/a.py"), "/repo/src/a.py");
    assert_eq!(normalize_path("/../a.py"), "/a.py");
}

#[test]
fn normalize_empty_becomes_dot() {
    assert_eq!(normalize_path("./"), ".");
    assert_eq!(normalize_path(""), ".");
}

#[test]
fn normalize_plain_path_unchanged() {
    assert_eq!(normalize_path("lib/b.py"), "lib/b.py");
}

// ============================================================================
// applies
// ============================================================================

#[test]
fn no_patterns_applies_everywhere() {
    for path in ["./src/a.py", "lib/b.py", "setup.py", "./tests/test_x.py"] {
        assert!(applies(path, None, None), "{path}");
    }
}

#[test]
fn include_matches_normalized_path() {
    let include = re("^src/");
    assert!(applies("./src/a.py", Some(&include), None));
    assert!(applies("src/a.py", Some(&include), None));
    assert!(!applies("./lib/b.py", Some(&include), None));
}

#[test]
fn include_is_substring_search_not_full_match() {
    let include = re(r"\.py");
    assert!(applies("src/a.py", Some(&include), None));

    let include = re("pkg");
    assert!(applies("./src/pkg/a.py", Some(&include), None));
}

#[test]
fn exclude_dominates_include() {
    let include = re("^src/");
    let exclude = re("test");
    assert!(!applies("src/test_x.py", Some(&include), Some(&exclude)));
    assert!(applies("src/x.py", Some(&include), Some(&exclude)));
}

#[test]
fn exclude_without_include() {
    let exclude = re("test");
    assert!(!applies("src/test_x.py", None, Some(&exclude)));
    assert!(applies("src/x.py", None, Some(&exclude)));
}

#[test]
fn exclude_sees_unnormalized_path() {
    // The leading "./" is still present for exclude matching.
    let exclude = re(r"^\./src/");
    assert!(!applies("./src/a.py", None, Some(&exclude)));

    let exclude = re("^src/");
    assert!(applies("./src/a.py", None, Some(&exclude)));
}

#[test]
fn leading_dot_prefix_is_transparent_to_include() {
    let patterns = ["^src/", "a\\.py$", "^lib", "pkg/"];
    let paths = ["src/a.py", "lib/b.py", "src/pkg/c.py", "a.py"];
    for pattern in patterns {
        let include = re(pattern);
        for path in paths {
            let prefixed = format!("./{path}");
            assert_eq!(
                applies(path, Some(&include), None),
                applies(&prefixed, Some(&include), None),
                "pattern {pattern} on {path}"
            );
        }
    }
}

#[test]
fn empty_include_pattern_matches_all() {
    let include = re("");
    assert!(applies("anything/at/all.py", Some(&include), None));
}
