use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::HookSpec;
use crate::error::{HookCoverageError, Result};
use crate::matrix::Outcome;

/// Tool invoked when none is given on the command line.
pub const DEFAULT_HOOK_TOOL: &str = "pre-commit";

/// Runs one hook against one file.
///
/// Implementations return only `Success` or `Failure`; a hook that fails its
/// check is an outcome, not an error.
pub trait HookInvoker: Sync {
    /// Run `hook` on `file`.
    ///
    /// # Errors
    /// Returns an error only if the hook could not be run at all.
    fn invoke(&self, file: &str, hook: &HookSpec) -> Result<Outcome>;
}

/// Invokes hooks through an external hook runner process.
///
/// Command shape: `<program> run <hook id> --files <file> [--args=<args>]`.
/// Only the exit status is consumed; output is captured and dropped.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
    working_dir: Option<PathBuf>,
}

impl Default for ProcessInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_HOOK_TOOL)
    }
}

impl ProcessInvoker {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run the tool from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Arguments passed to the hook runner, program name excluded.
    #[must_use]
    pub fn command_args(file: &str, hook: &HookSpec) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            hook.id.clone(),
            "--files".to_string(),
            file.to_string(),
        ];
        if let Some(joined) = hook.joined_args() {
            args.push(format!("--args={joined}"));
        }
        args
    }
}

impl HookInvoker for ProcessInvoker {
    fn invoke(&self, file: &str, hook: &HookSpec) -> Result<Outcome> {
        let args = Self::command_args(file, hook);
        log::debug!("Running: {} {}", self.program, args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(&args).stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|source| HookCoverageError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;

        let outcome = if output.status.success() {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        log::debug!("{} on {file}: {outcome:?} ({})", hook.id, output.status);

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod tests;
