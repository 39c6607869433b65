use rayon::prelude::*;

use crate::config::HookRegistry;
use crate::error::{HookCoverageError, Result};
use crate::invoker::HookInvoker;

use super::{HookOutcomes, Outcome, OutcomeMatrix};

/// Builds the outcome matrix by running every applicable hook on every file.
///
/// Inapplicable pairs are recorded as `NotApplicable` without invoking the
/// hook. Rows keep discovery order whether or not they are evaluated in
/// parallel.
pub struct Aggregator<'a, I: HookInvoker + ?Sized> {
    registry: &'a HookRegistry,
    invoker: &'a I,
    jobs: usize,
}

impl<'a, I: HookInvoker + ?Sized> Aggregator<'a, I> {
    #[must_use]
    pub const fn new(registry: &'a HookRegistry, invoker: &'a I) -> Self {
        Self {
            registry,
            invoker,
            jobs: 1,
        }
    }

    /// Number of worker threads; 0 and 1 both mean sequential.
    #[must_use]
    pub const fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Evaluate every registered hook for one file, in registry order.
    ///
    /// # Errors
    /// Returns an error if an applicable hook could not be launched.
    pub fn evaluate_file(&self, file: &str) -> Result<HookOutcomes> {
        let mut row = HookOutcomes::with_capacity(self.registry.len());
        for hook in self.registry.iter() {
            let outcome = if hook.applies_to(file) {
                self.invoker.invoke(file, hook)?
            } else {
                log::trace!("Skipping {} for {file}: not applicable", hook.id);
                Outcome::NotApplicable
            };
            row.insert(hook.id.clone(), outcome);
        }
        Ok(row)
    }

    /// Build the full matrix for `files`.
    ///
    /// # Errors
    /// Returns an error on the first hook that could not be launched.
    pub fn run(&self, files: &[String]) -> Result<OutcomeMatrix> {
        self.run_with_progress(files, || {})
    }

    /// Build the full matrix, calling `on_file` after each file is evaluated.
    ///
    /// # Errors
    /// Returns an error on the first hook that could not be launched, or if
    /// the worker pool cannot be started.
    pub fn run_with_progress<P>(&self, files: &[String], on_file: P) -> Result<OutcomeMatrix>
    where
        P: Fn() + Sync,
    {
        let evaluate = |file: &String| {
            let row = self.evaluate_file(file);
            on_file();
            row.map(|row| (file.clone(), row))
        };

        let rows: Vec<(String, HookOutcomes)> = if self.jobs > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()
                .map_err(|e| {
                    HookCoverageError::Runtime(format!("failed to start worker pool: {e}"))
                })?;
            pool.install(|| files.par_iter().map(evaluate).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(evaluate).collect::<Result<Vec<_>>>()?
        };

        let mut matrix = OutcomeMatrix::from_registry(self.registry);
        for (file, row) in rows {
            matrix.insert_row(file, row)?;
        }
        Ok(matrix)
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
