use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::applicability::normalize_path;
use crate::error::{HookCoverageError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files with a listed extension that no exclude glob matches.
///
/// Globs are matched against the normalized relative path, so `tests/**`
/// matches `./tests/test_a.py`.
pub struct ExtensionFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a new filter with the given extensions and exclude globs.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| HookCoverageError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| HookCoverageError::InvalidGlob {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_empty() {
            return false;
        }
        let normalized = normalize_path(&path.to_string_lossy());
        self.exclude_patterns.is_match(normalized)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
