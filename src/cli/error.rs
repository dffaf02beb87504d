//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Internal(_) => crate::exitcode::SOFTWARE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::DanglingNode) => crate::exitcode::SOFTWARE,
                ApplicationError::Domain(_) | ApplicationError::InvalidBitString(_) => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Config { .. } | ApplicationError::ConfigNotFound(_) => {
                    crate::exitcode::CONFIG
                }
            },
        }
    }
}
