//! Configuration for the hotel API client
//!
//! Settings come from built-in defaults overlaid with `HOTEL_*` environment
//! variables. The base address is validated once here and is the only place
//! the rest of the workspace learns where the API lives.

use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::ConfigError;

/// Base address used when `HOTEL_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Log filter used when `HOTEL_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

const ENV_PREFIX: &str = "HOTEL";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base address of the REST API, without a trailing slash
    pub base_url: String,
    /// File holding the persisted session
    pub session_path: PathBuf,
    /// `tracing` filter directive
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
    #[serde(default)]
    session_path: Option<PathBuf>,
    log: String,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `HOTEL_BASE_URL`: API base address (default: "http://localhost:8080/api")
    /// - `HOTEL_SESSION_PATH`: session file (default: "<config dir>/hotel-console/session.json")
    /// - `HOTEL_LOG`: log filter (default: "info")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Build the configuration from an explicit environment source
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let raw: RawConfig = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("log", DEFAULT_LOG_LEVEL)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(Self {
            base_url: normalize_base_url(&raw.base_url)?,
            session_path: raw.session_path.unwrap_or_else(default_session_path),
            log_level: raw.log,
        })
    }

    /// Replace the base address, validating it
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the session file location
    pub fn with_session_path(mut self, session_path: PathBuf) -> Self {
        self.session_path = session_path;
        self
    }
}

/// Validate a base address and strip any trailing slash
pub fn normalize_base_url(base_url: &str) -> Result<String, ConfigError> {
    let trimmed = base_url.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Default session file location
///
/// Uses the platform config directory, falling back to the working directory.
pub fn default_session_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("hotel-console").join("session.json"),
        None => PathBuf::from(".hotel-console").join("session.json"),
    }
}
