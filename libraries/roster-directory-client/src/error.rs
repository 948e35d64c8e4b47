//! Error types for the directory client.

use roster_core::RosterError;
use thiserror::Error;

/// Errors that can occur when talking to the user-directory service.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Directory is offline or unreachable
    #[error("Directory unreachable: {0}")]
    Unreachable(String),

    /// Directory returned a non-success status
    #[error("Directory error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text, if any
        message: String,
    },

    /// Failed to parse a directory response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No directory URL configured
    #[error("Directory URL is not set")]
    MissingUrl,

    /// Invalid directory URL
    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),
}

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

impl From<DirectoryError> for RosterError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Request(e) => RosterError::Network(e.to_string()),
            DirectoryError::Unreachable(msg) => RosterError::Network(msg),
            DirectoryError::Status { status, message } => {
                RosterError::Directory { status, message }
            }
            DirectoryError::Parse(msg) => RosterError::Parse(msg),
            DirectoryError::MissingUrl => {
                RosterError::Config("directory URL is not set".to_string())
            }
            DirectoryError::InvalidUrl(msg) => RosterError::Config(msg),
        }
    }
}
