use crate::error::Result;
use crate::matrix::OutcomeMatrix;

use super::stats::{RunStatistics, StatsFormatter, StatsTextFormatter};
use super::text::{ColorMode, GridFormatter};
use super::ReportFormatter;

/// The full console report: grid first, then statistics.
pub struct TextReport {
    grid: GridFormatter,
    stats: StatsTextFormatter,
}

impl TextReport {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            grid: GridFormatter::new(mode),
            stats: StatsTextFormatter,
        }
    }
}

impl ReportFormatter for TextReport {
    fn format(&self, matrix: &OutcomeMatrix) -> Result<String> {
        let grid = self.grid.format(matrix)?;
        let stats = self.stats.format(&RunStatistics::from_matrix(matrix))?;
        Ok(format!("{grid}\n{stats}"))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
