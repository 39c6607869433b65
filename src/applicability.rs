//! Decides whether a hook applies to a discovered file.
//!
//! Exclude patterns see the path exactly as discovered; include patterns see
//! the normalized relative path. Both use unanchored regex search.

use regex::Regex;

/// Normalize a discovered path for include matching.
///
/// Backslashes become `/`, empty and `.` segments are dropped, and `..`
/// cancels the preceding segment when there is one. A path that reduces to
/// nothing becomes `.`.
///
/// # Examples
///
/// - `"./src/a.py"` becomes `"src/a.py"`
/// - `".\\src\\a.py"` becomes `"src/a.py"`
/// - `"src/../lib/b.py"` becomes `"lib/b.py"`
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Whether a hook with the given patterns should run on `path`.
///
/// An exclude match always wins. Without an include pattern the hook
/// applies everywhere.
#[must_use]
pub fn applies(path: &str, include: Option<&Regex>, exclude: Option<&Regex>) -> bool {
    if exclude.is_some_and(|re| re.is_match(path)) {
        return false;
    }

    include.is_none_or(|re| re.is_match(&normalize_path(path)))
}

#[cfg(test)]
#[path = "applicability_tests.rs"]
mod tests;
