//! Common library for the hotel management console
//!
//! This crate provides the plumbing shared by the auth and resource API
//! crates: configuration, the error taxonomy, the durable key/value store the
//! session lives in, and the single HTTP client every resource module talks
//! through.

pub mod config;
pub mod error;
pub mod http;
pub mod storage;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ConfigError, StorageError, ValidationError};
pub use http::{Anonymous, ApiClient, ApiRequest, PageRequest, TokenProvider};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Example usage of the API client
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use common::{Anonymous, ApiClient, ClientConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::from_env()?;
///     let client = ApiClient::new(&config, Arc::new(Anonymous))?;
///     let health: serde_json::Value = client.get("/feedbacks/health").send_json().await?;
///     println!("Feedback service: {}", health);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
