use std::fmt::Write;

use crate::error::Result;
use crate::output::banner;

use super::{RunStatistics, StatsFormatter};

const TABLE_WIDTH: usize = 60;

/// Plain-text statistics: an overall block, then a per-hook table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsTextFormatter;

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &RunStatistics) -> Result<String> {
        let mut output = banner("PRE-COMMIT HOOK RESULTS - STATISTICS SUMMARY");
        let overall = &stats.overall;

        writeln!(output, "\nOVERALL STATISTICS:").ok();
        writeln!(output, "Total files processed: {}", stats.total_files).ok();
        writeln!(output, "Total valid hook checks: {}", overall.valid).ok();
        writeln!(
            output,
            "Successes: {} ({:.1}%)",
            overall.success,
            overall.success_percentage()
        )
        .ok();
        writeln!(
            output,
            "Failures: {} ({:.1}%)",
            overall.failure,
            overall.failure_percentage()
        )
        .ok();

        let rule = "-".repeat(TABLE_WIDTH);
        writeln!(output, "\nPER-HOOK STATISTICS:").ok();
        writeln!(output, "{rule}").ok();
        writeln!(
            output,
            "{:<20} {:<8} {:<8} {:<8} {:<10} {:<10}",
            "Hook", "Checks", "Success", "Failure", "Success %", "Failure %"
        )
        .ok();
        writeln!(output, "{rule}").ok();

        for (hook, counts) in &stats.per_hook {
            writeln!(
                output,
                "{:<20} {:<8} {:<8} {:<8} {:<10.1} {:<10.1}",
                hook,
                counts.valid,
                counts.success,
                counts.failure,
                counts.success_percentage(),
                counts.failure_percentage()
            )
            .ok();
        }

        writeln!(output, "{rule}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
