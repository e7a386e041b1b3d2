//! Integration tests for the shared API client against the stub server

use std::sync::{Arc, Mutex};

use common::test_support::{StubResponse, StubServer};
use common::{Anonymous, ApiClient, ApiError, PageRequest, TokenProvider};
use serde::Deserialize;
use serde_json::json;

struct FixedToken(Mutex<Option<String>>);

impl TokenProvider for FixedToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Room {
    id: i64,
    number: String,
}

fn client(server: &StubServer, tokens: Arc<dyn TokenProvider>) -> ApiClient {
    ApiClient::with_http_client(reqwest::Client::new(), server.base_url(), tokens)
}

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond("GET", "/rooms", StubResponse::json(200, json!([])));

    let tokens = Arc::new(FixedToken(Mutex::new(Some("abc123".to_string()))));
    let api = client(&server, tokens.clone());

    let _: Vec<Room> = api.get("/rooms").send_json().await.unwrap();
    assert_eq!(
        server.last_request().unwrap().authorization.as_deref(),
        Some("Bearer abc123")
    );

    // Token is read per request, not captured at construction
    *tokens.0.lock().unwrap() = None;
    let _: Vec<Room> = api.get("/rooms").send_json().await.unwrap();
    assert_eq!(server.last_request().unwrap().authorization, None);
}

#[tokio::test]
async fn test_anonymous_client_sends_no_authorization() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond("POST", "/auth/login", StubResponse::json(200, json!({})));

    let api = client(&server, Arc::new(Anonymous));
    let _: serde_json::Value = api
        .post("/auth/login")
        .json(&json!({"username": "a", "password": "b"}))
        .send_json()
        .await
        .unwrap();

    let request = server.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/auth/login");
    assert_eq!(request.authorization, None);
    assert_eq!(request.json(), json!({"username": "a", "password": "b"}));
}

#[tokio::test]
async fn test_paths_and_query_are_relative_to_base() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond(
        "GET",
        "/rooms/paged",
        StubResponse::json(200, json!([{"id": 1, "number": "101"}])),
    );

    let api = client(&server, Arc::new(Anonymous));
    let rooms: Vec<Room> = api
        .get("/rooms/paged")
        .query(&PageRequest::new(2, 5))
        .send_json()
        .await
        .unwrap();

    assert_eq!(
        rooms,
        vec![Room {
            id: 1,
            number: "101".to_string()
        }]
    );
    let request = server.last_request().unwrap();
    assert_eq!(request.query_param("pageNo").as_deref(), Some("2"));
    assert_eq!(request.query_param("pageSize").as_deref(), Some("5"));
}

#[tokio::test]
async fn test_error_uses_server_message() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond(
        "POST",
        "/auth/login",
        StubResponse::json(401, json!({"message": "Invalid credentials"})),
    );

    let api = client(&server, Arc::new(Anonymous));
    let error = api
        .post("/auth/login")
        .send_json::<serde_json::Value>()
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(error.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_error_without_message_is_generic() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond("DELETE", "/rooms/9", StubResponse::text(500, "boom"));

    let api = client(&server, Arc::new(Anonymous));
    let error = api.delete("/rooms/9").send_text().await.unwrap_err();

    assert!(matches!(error, ApiError::Status { status: 500, message: None }));
    assert_eq!(error.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn test_text_responses() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond(
        "DELETE",
        "/rooms/3",
        StubResponse::text(200, "Room deleted successfully"),
    );
    server.respond("PATCH", "/bookings/3/cancel", StubResponse::empty(200));

    let api = client(&server, Arc::new(Anonymous));
    assert_eq!(
        api.delete("/rooms/3").send_text().await.unwrap(),
        "Room deleted successfully"
    );
    assert_eq!(api.patch("/bookings/3/cancel").send_text().await.unwrap(), "");
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let server = StubServer::start().await.expect("Failed to start stub server");
    server.respond("GET", "/rooms/1", StubResponse::text(200, "not json"));

    let api = client(&server, Arc::new(Anonymous));
    let error = api.get("/rooms/1").send_json::<Room>().await.unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    let base_url = format!("http://127.0.0.1:{port}/api");

    let api = ApiClient::with_http_client(reqwest::Client::new(), &base_url, Arc::new(Anonymous));
    let error = api.get("/rooms").send_json::<Vec<Room>>().await.unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)));
    assert_eq!(error.status(), None);
}
