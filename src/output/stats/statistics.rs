use std::collections::BTreeMap;

use crate::matrix::{Outcome, OutcomeMatrix};

/// Counts over applicable (non-`NotApplicable`) checks.
///
/// `success + failure == valid` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckCounts {
    pub valid: usize,
    pub success: usize,
    pub failure: usize,
}

impl CheckCounts {
    #[must_use]
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut counts = Self::default();
        for outcome in outcomes {
            counts.record(outcome);
        }
        counts
    }

    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => {
                self.valid += 1;
                self.success += 1;
            }
            Outcome::Failure => {
                self.valid += 1;
                self.failure += 1;
            }
            Outcome::NotApplicable => {}
        }
    }

    /// Share of successes in percent; 0 when nothing was checked.
    #[must_use]
    pub fn success_percentage(&self) -> f64 {
        percentage(self.success, self.valid)
    }

    /// Share of failures in percent; 0 when nothing was checked.
    #[must_use]
    pub fn failure_percentage(&self) -> f64 {
        percentage(self.failure, self.valid)
    }
}

#[allow(clippy::cast_precision_loss)] // Check counts are far below f64's exact integer range
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Aggregate view over a completed outcome matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub total_files: usize,
    pub overall: CheckCounts,
    /// Only hooks with at least one applicable check, ascending by id.
    pub per_hook: BTreeMap<String, CheckCounts>,
}

impl RunStatistics {
    #[must_use]
    pub fn from_matrix(matrix: &OutcomeMatrix) -> Self {
        let overall = CheckCounts::from_outcomes(matrix.outcomes());

        let per_hook = matrix
            .hook_ids()
            .iter()
            .map(|id| (id.clone(), CheckCounts::from_outcomes(matrix.outcomes_for(id))))
            .filter(|(_, counts)| counts.valid > 0)
            .collect();

        Self {
            total_files: matrix.file_count(),
            overall,
            per_hook,
        }
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
