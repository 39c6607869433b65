use serde::Deserialize;

/// File name looked up in the project root when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Top-level pre-commit configuration document.
///
/// Only the keys this tool consumes are modelled; everything else in the
/// document (`rev`, `name`, `language`, `default_stages`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreCommitConfig {
    pub repos: Vec<RepoConfig>,
}

/// Document as parsed, before the required `repos` key is checked.
#[derive(Debug, Deserialize)]
pub(super) struct RawDocument {
    pub repos: Option<Vec<RepoConfig>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepoConfig {
    /// Repository URL, or `local` / `meta`.
    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default)]
    pub hooks: Vec<HookDeclaration>,
}

/// One hook entry as written in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HookDeclaration {
    pub id: String,

    /// Include regex (`files` key).
    #[serde(default)]
    pub files: Option<String>,

    #[serde(default)]
    pub exclude: Option<String>,

    #[serde(default)]
    pub args: Option<Vec<String>>,
}

impl PreCommitConfig {
    /// Iterate every hook declaration across all repositories, in document order.
    pub fn hook_declarations(&self) -> impl Iterator<Item = &HookDeclaration> {
        self.repos.iter().flat_map(|repo| repo.hooks.iter())
    }
}
