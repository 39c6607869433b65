use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookCoverageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid regex for hook '{hook}': {pattern}")]
    InvalidPattern {
        hook: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to launch hook tool '{program}'")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookCoverageError {
    /// Short category name, stable across message wording changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::YamlParse { .. } => "Config",
            Self::InvalidPattern { .. } | Self::InvalidGlob { .. } => "Pattern",
            Self::ToolLaunch { .. } => "ToolLaunch",
            Self::Runtime(_) => "Runtime",
            Self::Io(_) => "IO",
        }
    }

    /// Underlying cause, if the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::Runtime(_) | Self::Io(_) => None,
            Self::ConfigRead { source, .. } | Self::ToolLaunch { source, .. } => {
                Some(source.to_string())
            }
            Self::YamlParse { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidGlob { source, .. } => Some(source.to_string()),
        }
    }

    /// True for faults raised before any file is processed.
    #[must_use]
    pub const fn is_config_fault(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::ConfigRead { .. }
                | Self::YamlParse { .. }
                | Self::InvalidPattern { .. }
                | Self::InvalidGlob { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HookCoverageError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
