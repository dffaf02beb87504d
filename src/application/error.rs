//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::bits::ParseBitsError;
use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid bit string: {0}")]
    InvalidBitString(#[from] ParseBitsError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
