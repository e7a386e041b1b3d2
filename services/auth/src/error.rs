//! Errors raised by the session gate

use common::{ApiError, StorageError, ValidationError};
use thiserror::Error;

/// Login or registration failed
///
/// The display string is the message shown to the user.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Input was rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request failed or the server refused the credentials
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },

    /// The server answered without a usable token
    #[error("{0}: the server returned no token")]
    MissingToken(&'static str),

    /// Credentials were accepted but the session could not be persisted
    #[error("Failed to save session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Wrap a failed auth call, preferring the server's message over `fallback`
    pub fn from_api(source: ApiError, fallback: &str) -> Self {
        match source {
            ApiError::Validation(error) => AuthError::Validation(error),
            source => AuthError::Rejected {
                message: source
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| fallback.to_string()),
                source,
            },
        }
    }
}

/// The persisted session could not be read
#[derive(Error, Debug)]
pub enum SessionError {
    /// A stored value failed its structural parse
    #[error("Malformed session under '{key}': {reason}")]
    Parse { key: &'static str, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
