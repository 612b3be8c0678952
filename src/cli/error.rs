//! CLI-level errors (wraps command and infrastructure errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::CommandError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("cannot read command file {path}: {source}")]
    CommandFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Command(_) => exitcode::DATAERR,
            CliError::CommandFile { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => exitcode::NOINPUT,
                _ => exitcode::IOERR,
            },
            CliError::Config(_) => exitcode::CONFIG,
        }
    }
}
