pub mod commands;
pub mod output;
pub mod prompts;
pub mod render;
mod shell;

pub use shell::run_cli;

use thiserror::Error;

use crate::errors::TallyError;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TallyError),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
}
