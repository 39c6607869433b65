mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{HookCoverageError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive scanner that never descends into hidden entries.
///
/// The root itself is always walked, even if its name starts with a dot.
/// Symlinks are followed; link cycles are reported by the walker and skipped.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        files.sort();
        files
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .follow_links(true)
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.filter.should_include(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        std::fs::read_dir(root).map_err(|e| {
            HookCoverageError::Config(format!(
                "cannot read root directory {}: {e}",
                root.display()
            ))
        })?;
        let files = self.scan_impl(root);
        log::info!("Discovered {} file(s) under {}", files.len(), root.display());
        Ok(files)
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Render discovered paths relative to `root`, prefixed with `./`.
///
/// Hooks run with `root` as their working directory, so these are the paths
/// they receive and the paths shown in the report.
#[must_use]
pub fn display_paths(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|p| {
            let relative = p.strip_prefix(root).unwrap_or(p);
            Path::new(".").join(relative).to_string_lossy().into_owned()
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
