mod progress;
mod report;
mod stats;
mod text;

pub use progress::ScanProgress;
pub use report::TextReport;
pub use stats::{CheckCounts, RunStatistics, StatsFormatter, StatsTextFormatter};
pub use text::{ColorMode, GridFormatter};

use crate::error::Result;
use crate::matrix::OutcomeMatrix;

/// Width of the `=` banners around report sections.
pub(crate) const BANNER_WIDTH: usize = 80;

/// Trait for rendering an outcome matrix.
pub trait ReportFormatter {
    /// Format the matrix into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, matrix: &OutcomeMatrix) -> Result<String>;
}

pub(crate) fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
