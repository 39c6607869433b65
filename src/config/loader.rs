use std::path::Path;

use crate::error::{HookCoverageError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{PreCommitConfig, RawDocument};
use super::registry::HookRegistry;

/// Trait for loading the hook registry from a configuration source.
pub trait RegistryLoader {
    /// Load the registry from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<HookRegistry>;
}

/// Loads the pre-commit configuration from the filesystem.
///
/// Unlike optional tool configs there is no fallback: a missing file is a
/// configuration fault.
#[derive(Debug)]
pub struct FileRegistryLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileRegistryLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRegistryLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileRegistryLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Read and parse the configuration document without compiling patterns.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load_config(&self, path: &Path) -> Result<PreCommitConfig> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| HookCoverageError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse_config(&content, path)
    }

    fn parse_config(content: &str, path: &Path) -> Result<PreCommitConfig> {
        let raw: RawDocument =
            serde_yaml::from_str(content).map_err(|source| HookCoverageError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;
        let repos = raw.repos.ok_or_else(|| {
            HookCoverageError::Config(format!("{} has no 'repos' list", path.display()))
        })?;
        Ok(PreCommitConfig { repos })
    }
}

impl<F: FileSystem> RegistryLoader for FileRegistryLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<HookRegistry> {
        let config = self.load_config(path)?;
        let registry = HookRegistry::from_config(&config)?;
        log::info!(
            "Loaded {} hook(s) from {} repo(s) in {}",
            registry.len(),
            config.repos.len(),
            path.display()
        );
        Ok(registry)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
