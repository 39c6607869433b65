use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::config::{FileRegistryLoader, RegistryLoader};
use crate::invoker::{HookInvoker, ProcessInvoker};
use crate::matrix::{Aggregator, OutcomeMatrix};
use crate::output::{ReportFormatter, ScanProgress, TextReport};
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner, display_paths};
use crate::{EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR, EXIT_SUCCESS, Result};

/// Everything one run produced, before it is written anywhere.
#[derive(Debug, Clone)]
pub struct ReportRun {
    pub discovered: usize,
    pub matrix: OutcomeMatrix,
    pub text: String,
}

#[must_use]
pub fn run_report(cli: &Cli) -> i32 {
    match run_report_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(detail) = e.detail() {
                eprintln!("  Caused by: {detail}");
            }
            if e.is_config_fault() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_RUNTIME_ERROR
            }
        }
    }
}

/// Runs the full pipeline against the real hook tool and writes the report.
///
/// # Errors
/// Returns an error if the configuration is invalid, the hook tool cannot be
/// launched, or the report cannot be written.
pub fn run_report_impl(cli: &Cli) -> Result<()> {
    let invoker = ProcessInvoker::new(cli.tool.as_str()).with_working_dir(&cli.root);
    let run = generate_report(cli, &invoker)?;
    write_output(cli.output.as_deref(), &run.text, cli.quiet)
}

/// Load the registry, discover files, run hooks, and render the report.
///
/// # Errors
/// Returns an error on the first configuration or invocation fault; no
/// partial report is produced.
pub fn generate_report(cli: &Cli, invoker: &dyn HookInvoker) -> Result<ReportRun> {
    // 1. Load hook registry
    let registry = FileRegistryLoader::new().load_from_path(&cli.config_path())?;

    // 2. Discover files
    let filter = ExtensionFilter::new(cli.ext.clone(), &cli.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, cli.gitignore);
    let files = display_paths(&scanner.scan(&cli.root)?, &cli.root);
    if !cli.quiet {
        println!("Discovered {} file(s)", files.len());
    }

    // 3. Run applicable hooks per file
    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let matrix = Aggregator::new(&registry, invoker)
        .with_jobs(cli.jobs)
        .run_with_progress(&files, || progress.inc());
    progress.finish();
    let matrix = matrix?;

    // 4. Render
    let text = TextReport::new(cli.color.into()).format(&matrix)?;

    Ok(ReportRun {
        discovered: files.len(),
        matrix,
        text,
    })
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        log::info!("Report written to {}", path.display());
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
