//! HTTP client for the hotel REST API
//!
//! A single [`ApiClient`] is built per process and cloned into every resource
//! module. It is the one place that knows the base address and the one place
//! that attaches `Authorization: Bearer <token>`, reading the token through a
//! [`TokenProvider`] handed in at construction time.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Read-only view of the credential attached to outgoing requests
pub trait TokenProvider: Send + Sync {
    /// Current bearer token, `None` when signed out
    fn bearer_token(&self) -> Option<String>;
}

/// Token provider that never supplies a token
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenProvider for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Pagination parameters passed through to list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based page index
    pub page_no: u32,
    /// Items per page
    pub page_size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page_no: u32, page_size: u32) -> Self {
        Self { page_no, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_no: 0,
            page_size: 10,
        }
    }
}

/// Shape of a non-2xx body; only `message` is read
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared client bound to one base address
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Build the client from configuration
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> ApiResult<Self> {
        let http = Client::builder().build().map_err(ApiError::Transport)?;
        Ok(Self::with_http_client(http, &config.base_url, tokens))
    }

    /// Build the client around an existing `reqwest` client
    pub fn with_http_client(http: Client, base_url: &str, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                tokens,
            }),
        }
    }

    /// Base address every path is appended to
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for an API path such as `/rooms/5`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Start a request, attaching the bearer token when one is present
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        let mut builder = self.inner.http.request(method.clone(), self.url(path));
        if let Some(token) = self.inner.tokens.bearer_token() {
            builder = builder.bearer_auth(token);
        }

        ApiRequest {
            builder,
            method,
            path: path.to_string(),
        }
    }

    pub fn get(&self, path: &str) -> ApiRequest {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> ApiRequest {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> ApiRequest {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> ApiRequest {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> ApiRequest {
        self.request(Method::DELETE, path)
    }
}

/// A single pending API request
///
/// Sending consumes the request, so each one reaches the server exactly once.
pub struct ApiRequest {
    builder: RequestBuilder,
    method: Method,
    path: String,
}

impl ApiRequest {
    /// Append query parameters
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    /// Send and decode a JSON response body
    pub async fn send_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        let body = self.send().await?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }

    /// Send and return the response body as text
    ///
    /// A body holding a JSON string literal is unquoted.
    pub async fn send_text(self) -> ApiResult<String> {
        let body = self.send().await?;
        let text = String::from_utf8_lossy(&body).into_owned();
        Ok(serde_json::from_str::<String>(&text).unwrap_or(text))
    }

    async fn send(self) -> ApiResult<Vec<u8>> {
        let Self {
            builder,
            method,
            path,
        } = self;
        debug!("Sending {} {}", method, path);

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed before a response: {}", method, path, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            let message = server_message(&body);
            warn!("{} {} returned {}", method, path, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body.to_vec())
    }
}

/// Percent-encode a value for use as a single path segment
pub fn encode_path_segment(value: &str) -> String {
    let Ok(mut url) = reqwest::Url::parse("http://segment.invalid/") else {
        return value.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(value);
    }
    url.path().trim_start_matches('/').to_string()
}

fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}
