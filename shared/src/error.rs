//! Error types for the MCP gateway and agent client.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the gateway and agent client.
#[derive(Error, Debug)]
pub enum Error {
    /// Fault raised while setting up or performing a submission
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Route exists but not for this method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(errors.to_string())
    }
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::MethodNotAllowed(_) => 405,
            Error::Submission(_) => 502,
            Error::Config(_) => 500,
        }
    }
}
