mod statistics;
mod text;

pub use statistics::{CheckCounts, RunStatistics};
pub use text::StatsTextFormatter;

use crate::error::Result;

pub trait StatsFormatter {
    /// Format the run statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &RunStatistics) -> Result<String>;
}
