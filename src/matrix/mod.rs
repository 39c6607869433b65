mod aggregator;

pub use aggregator::Aggregator;

use indexmap::IndexMap;

use crate::config::HookRegistry;
use crate::error::{HookCoverageError, Result};

/// Result of considering one hook for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
    /// The hook's patterns excluded this file; it was never run.
    NotApplicable,
}

impl Outcome {
    /// Grid cell text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "S",
            Self::Failure => "F",
            Self::NotApplicable => "N/A",
        }
    }

    #[must_use]
    pub const fn is_applicable(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

/// Outcomes for one file, keyed by hook id in registry order.
pub type HookOutcomes = IndexMap<String, Outcome>;

/// File path to per-hook outcomes.
///
/// Every row carries exactly one entry per registered hook id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeMatrix {
    hook_ids: Vec<String>,
    rows: IndexMap<String, HookOutcomes>,
}

impl OutcomeMatrix {
    #[must_use]
    pub fn new(hook_ids: Vec<String>) -> Self {
        Self {
            hook_ids,
            rows: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn from_registry(registry: &HookRegistry) -> Self {
        Self::new(registry.ids().map(str::to_string).collect())
    }

    /// Add a fully populated row.
    ///
    /// # Errors
    /// Returns an error if the row does not hold exactly the registered hook ids.
    pub fn insert_row(&mut self, file: impl Into<String>, row: HookOutcomes) -> Result<()> {
        let file = file.into();
        if row.len() != self.hook_ids.len()
            || !self.hook_ids.iter().all(|id| row.contains_key(id))
        {
            return Err(HookCoverageError::Runtime(format!(
                "incomplete outcome row for {file}: expected hooks {:?}, got {:?}",
                self.hook_ids,
                row.keys().collect::<Vec<_>>()
            )));
        }
        self.rows.insert(file, row);
        Ok(())
    }

    /// Hook ids in registry order.
    #[must_use]
    pub fn hook_ids(&self) -> &[String] {
        &self.hook_ids
    }

    /// Hook ids in ascending order, as used for report columns.
    #[must_use]
    pub fn sorted_hook_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.hook_ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Rows in insertion (discovery) order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &HookOutcomes)> {
        self.rows.iter().map(|(file, row)| (file.as_str(), row))
    }

    #[must_use]
    pub fn get(&self, file: &str, hook_id: &str) -> Option<Outcome> {
        self.rows.get(file)?.get(hook_id).copied()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All outcomes across all rows.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.rows.values().flat_map(|row| row.values().copied())
    }

    /// Outcomes of a single hook across all rows.
    pub fn outcomes_for<'a>(&'a self, hook_id: &'a str) -> impl Iterator<Item = Outcome> + 'a {
        self.rows
            .values()
            .filter_map(move |row| row.get(hook_id).copied())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
