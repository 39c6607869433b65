use indexmap::IndexMap;
use regex::Regex;

use crate::applicability::applies;
use crate::error::{HookCoverageError, Result};

use super::model::{HookDeclaration, PreCommitConfig};

/// A configured hook with its patterns compiled.
///
/// `None` patterns mean "absent", which is not the same as an empty pattern:
/// an empty include regex matches every path, an absent one is never consulted.
#[derive(Debug, Clone)]
pub struct HookSpec {
    pub id: String,
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
    pub args: Vec<String>,
}

impl HookSpec {
    /// A hook with no patterns and no arguments; applies to every file.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            include: None,
            exclude: None,
            args: Vec::new(),
        }
    }

    /// Set the include (`files`) pattern.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regex.
    pub fn with_include(mut self, pattern: &str) -> Result<Self> {
        self.include = Some(compile_pattern(&self.id, pattern)?);
        Ok(self)
    }

    /// Set the exclude pattern.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regex.
    pub fn with_exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = Some(compile_pattern(&self.id, pattern)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Build a spec from a raw declaration, compiling its patterns.
    ///
    /// # Errors
    /// Returns an error if `files` or `exclude` is not a valid regex.
    pub fn from_declaration(decl: &HookDeclaration) -> Result<Self> {
        let mut spec = Self::new(decl.id.clone());
        if let Some(pattern) = decl.files.as_deref() {
            spec = spec.with_include(pattern)?;
        }
        if let Some(pattern) = decl.exclude.as_deref() {
            spec = spec.with_exclude(pattern)?;
        }
        if let Some(args) = &decl.args {
            spec.args.clone_from(args);
        }
        Ok(spec)
    }

    #[must_use]
    pub fn applies_to(&self, path: &str) -> bool {
        applies(path, self.include.as_ref(), self.exclude.as_ref())
    }

    /// Arguments joined by single spaces, or `None` when there are none.
    #[must_use]
    pub fn joined_args(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }
}

fn compile_pattern(hook: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| HookCoverageError::InvalidPattern {
        hook: hook.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Hook id to spec, in order of first declaration.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    hooks: IndexMap<String, HookSpec>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every hook of every repository.
    ///
    /// When two declarations share an id the later one replaces the earlier
    /// one but keeps its position.
    ///
    /// # Errors
    /// Returns an error if any declaration carries an invalid regex.
    pub fn from_config(config: &PreCommitConfig) -> Result<Self> {
        let mut registry = Self::new();
        for decl in config.hook_declarations() {
            let spec = HookSpec::from_declaration(decl)?;
            if let Some(previous) = registry.insert(spec) {
                log::debug!("Hook '{}' redeclared; later declaration wins", previous.id);
            }
        }
        Ok(registry)
    }

    /// Insert a spec, returning the one it replaced.
    pub fn insert(&mut self, spec: HookSpec) -> Option<HookSpec> {
        self.hooks.insert(spec.id.clone(), spec)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HookSpec> {
        self.hooks.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HookSpec> {
        self.hooks.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl FromIterator<HookSpec> for HookRegistry {
    fn from_iter<T: IntoIterator<Item = HookSpec>>(iter: T) -> Self {
        let mut registry = Self::new();
        for spec in iter {
            registry.insert(spec);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
