//! In-process stub of the hotel REST API for integration tests
//!
//! The stub answers from a table of canned responses and records every request
//! it receives, so tests can drive the real `reqwest` client and then assert on
//! the method, path, query string, headers and body that went over the wire.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// Path prefix the stub serves the API under
pub const API_PREFIX: &str = "/api";

/// Canned response for one method and path
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    content_type: Option<&'static str>,
    body: String,
}

impl StubResponse {
    /// JSON response
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json"),
            body: body.to_string(),
        }
    }

    /// Plain text response
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain;charset=UTF-8"),
            body: body.into(),
        }
    }

    /// Response with no body
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: String::new(),
        }
    }
}

impl IntoResponse for StubResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.content_type {
            Some(content_type) => {
                (status, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
            }
            None => status.into_response(),
        }
    }
}

/// A request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path relative to [`API_PREFIX`]
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Body parsed as JSON, `Null` when it is not JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }

    /// Decoded query string pairs in order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let query = self.query.as_deref().unwrap_or_default();
        reqwest::Url::parse(&format!("http://stub/?{query}"))
            .map(|url| {
                url.query_pairs()
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First value of a query parameter
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<Mutex<HashMap<(String, String), StubResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stub API server listening on an ephemeral local port
pub struct StubServer {
    base_url: String,
    state: StubState,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Bind to `127.0.0.1:0` and start serving
    pub async fn start() -> std::io::Result<Self> {
        let state = StubState::default();
        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Stub server stopped: {}", e);
            }
        });

        Ok(Self {
            base_url: format!("http://{address}{API_PREFIX}"),
            state,
            handle,
        })
    }

    /// Base address to configure the client with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register the response for `method` and `path` (relative to the API prefix)
    pub fn respond(&self, method: &str, path: &str, response: StubResponse) {
        self.state
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method.to_uppercase(), path.to_string()), response);
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_request(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest {
            method: method.to_string(),
            path: path.clone(),
            query: uri.query().map(str::to_string),
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body: String::from_utf8_lossy(&body).into_owned(),
        });

    let canned = state
        .responses
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&(method.to_string(), path.clone()))
        .cloned();

    match canned {
        Some(response) => response.into_response(),
        None => StubResponse::json(
            404,
            serde_json::json!({ "message": format!("No stub for {method} {path}") }),
        )
        .into_response(),
    }
}
