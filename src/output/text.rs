use std::fmt::Write;

use crate::error::Result;
use crate::matrix::{Outcome, OutcomeMatrix};

use super::{ReportFormatter, banner};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn should_use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

const FILE_HEADER: &str = "File";
const MIN_HOOK_WIDTH: usize = 8;

/// Renders the per-file, per-hook grid.
///
/// Columns are the hook ids in ascending order; rows keep matrix order.
pub struct GridFormatter {
    use_colors: bool,
}

impl GridFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.should_use_colors(),
        }
    }

    fn file_width(matrix: &OutcomeMatrix) -> usize {
        matrix
            .rows()
            .map(|(file, _)| file.chars().count())
            .max()
            .unwrap_or(0)
            .max(FILE_HEADER.len())
            + 2
    }

    fn hook_width(hook_id: &str) -> usize {
        (hook_id.chars().count() + 2).max(MIN_HOOK_WIDTH)
    }

    /// Pad first so escape codes never count toward column width.
    fn cell(&self, outcome: Outcome, width: usize) -> String {
        let padded = format!("{:<width$}", outcome.symbol());
        if !self.use_colors {
            return padded;
        }

        let color = match outcome {
            Outcome::Success => ansi::GREEN,
            Outcome::Failure => ansi::RED,
            Outcome::NotApplicable => ansi::DIM,
        };
        let symbol = outcome.symbol();
        let fill = &padded[symbol.len()..];
        format!("{color}{symbol}{}{fill}", ansi::RESET)
    }
}

impl ReportFormatter for GridFormatter {
    fn format(&self, matrix: &OutcomeMatrix) -> Result<String> {
        let mut output = banner("PRE-COMMIT HOOK RESULTS - DETAILED GRID");

        let hooks = matrix.sorted_hook_ids();
        let file_width = Self::file_width(matrix);

        let mut header = format!("{FILE_HEADER:<file_width$}");
        for hook in &hooks {
            let width = Self::hook_width(hook);
            write!(header, "{hook:<width$}").ok();
        }
        writeln!(output, "{header}").ok();
        writeln!(output, "{}", "-".repeat(header.chars().count())).ok();

        for (file, row) in matrix.rows() {
            let mut line = format!("{file:<file_width$}");
            for hook in &hooks {
                let outcome = row.get(*hook).copied().unwrap_or(Outcome::NotApplicable);
                line.push_str(&self.cell(outcome, Self::hook_width(hook)));
            }
            writeln!(output, "{line}").ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
