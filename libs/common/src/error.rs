//! Custom error types for the common library
//!
//! This module defines the error taxonomy shared by every client crate:
//! local validation failures raised before a request is sent, failures of a
//! request once it has been sent, and failures of the durable store and the
//! configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// A required field was missing or a value broke a local constraint.
///
/// Raised before any request leaves the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Wire name of the offending field
    pub field: &'static str,
    /// User-visible explanation
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Create the "is required" error for a field
    pub fn required(field: &'static str, label: &str) -> Self {
        Self::new(field, format!("{label} is required"))
    }
}

/// Custom error type for calls made through the API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input was rejected locally, no request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-2xx status
    #[error("{}", describe_status(.status, .message))]
    Status {
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx body could not be decoded into the expected type
    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

fn describe_status(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request failed with status code {status}"),
    }
}

impl ApiError {
    /// Message provided by the server in a non-2xx body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for results of API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom error type for the durable key/value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a JSON object of strings
    #[error("Corrupted store at {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory contents could not be serialized
    #[error("Failed to encode store contents: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// The configured base address is not an absolute URL
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
