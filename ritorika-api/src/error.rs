//! API error types

use ritorika_core::DomainError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request field was absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Dictionary or pattern resource could not be loaded
    #[error("resource error: {0}")]
    Resource(#[from] DomainError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the error was caused by the request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::MissingField(_))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
