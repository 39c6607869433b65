use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::invoker::DEFAULT_HOOK_TOOL;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hook-coverage")]
#[command(author, version, about = "Run every applicable pre-commit hook per file and report the results")]
#[command(long_about = "Discovers source files, runs each pre-commit hook whose files/exclude \
    patterns match a file, and prints a per-file pass/fail grid with statistics.\n\n\
    Exit codes:\n  \
    0 - Report produced (hook failures do not change the exit code)\n  \
    2 - Configuration error\n  \
    3 - Runtime error (hook tool could not be launched, output not writable)")]
pub struct Cli {
    /// Path to the pre-commit configuration file (relative paths resolve against --root)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Project root to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// File extensions to check (comma-separated, e.g., py,pyi)
    #[arg(long, value_delimiter = ',', default_value = "py")]
    pub ext: Vec<String>,

    /// Exclude files from discovery (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Respect .gitignore files during discovery
    #[arg(long)]
    pub gitignore: bool,

    /// Hook runner executable
    #[arg(long, default_value = DEFAULT_HOOK_TOOL)]
    pub tool: String,

    /// Number of files to process in parallel
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and stdout output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Config path resolved against the project root.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        if self.config.is_absolute() {
            self.config.clone()
        } else {
            self.root.join(&self.config)
        }
    }

    /// Default log filter for the verbosity level; `RUST_LOG` overrides it.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
