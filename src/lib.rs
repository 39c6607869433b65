pub mod applicability;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod invoker;
pub mod matrix;
pub mod output;
pub mod scanner;

pub use error::{HookCoverageError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_RUNTIME_ERROR: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
