//! End-to-end console commands against the stub server

use clap::Parser;
use common::ClientConfig;
use common::test_support::{StubResponse, StubServer};
use console::cli::{Cli, Command};
use console::{Console, Output};
use serde_json::json;
use tempfile::TempDir;

struct Harness {
    server: StubServer,
    dir: TempDir,
}

impl Harness {
    async fn start() -> Self {
        let server = StubServer::start().await.expect("Failed to start stub server");
        server.respond(
            "POST",
            "/auth/login",
            StubResponse::json(
                200,
                json!({"token": "token-desk", "username": "desk", "role": "ROLE_RECEPTIONIST"}),
            ),
        );
        Self {
            server,
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.server.base_url().to_string(),
            session_path: self.dir.path().join("session.json"),
            log_level: "debug".to_string(),
        }
    }

    /// A fresh console process over the same session file
    fn console(&self) -> Console<common::FileStore> {
        Console::open(&self.config()).expect("Failed to open console")
    }
}

fn command(args: &[&str]) -> Command {
    let argv = std::iter::once("hotel-console").chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("Invalid command line").command
}

fn json_output(output: Output) -> serde_json::Value {
    match output {
        Output::Json(value) => value,
        Output::Text(text) => panic!("expected JSON output, got {text:?}"),
    }
}

async fn login(console: &mut Console<common::FileStore>) {
    let output = console
        .run(command(&["login", "-u", "desk", "-p", "secret"]))
        .await
        .unwrap();
    assert_eq!(output, Output::Text("Signed in as desk (ROLE_RECEPTIONIST)".to_string()));
}

#[tokio::test]
async fn test_resource_command_requires_sign_in() {
    let harness = Harness::start().await;
    let mut console = harness.console();

    let error = console.run(command(&["rooms", "list"])).await.unwrap_err();
    assert!(error.to_string().contains("Not signed in"));
    assert_eq!(console.shell().location(), "/login");
    assert!(harness.server.requests().is_empty());
}

#[tokio::test]
async fn test_session_survives_restart_and_sends_token() {
    let harness = Harness::start().await;
    harness
        .server
        .respond("GET", "/rooms", StubResponse::json(200, json!([])));

    login(&mut harness.console()).await;

    let mut console = harness.console();
    assert_eq!(console.shell().location(), "/dashboard");

    let rooms = json_output(
        console
            .run(command(&["rooms", "list", "--page", "2", "--size", "5"]))
            .await
            .unwrap(),
    );
    assert_eq!(rooms, json!([]));

    let request = harness.server.last_request().unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer token-desk"));
    assert_eq!(request.query.as_deref(), Some("pageNo=2&pageSize=5"));
    assert_eq!(console.shell().location(), "/rooms");
}

#[tokio::test]
async fn test_menu_follows_role() {
    let harness = Harness::start().await;
    let mut console = harness.console();

    assert!(console.run(command(&["menu"])).await.is_err());

    login(&mut console).await;
    let menu = json_output(console.run(command(&["menu"])).await.unwrap());
    let labels: Vec<&str> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["Dashboard", "Rooms", "Guests", "Bookings", "Feedbacks"]);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let harness = Harness::start().await;
    let mut console = harness.console();
    login(&mut console).await;

    let output = console.run(command(&["logout"])).await.unwrap();
    assert_eq!(output, Output::Text("Signed out".to_string()));

    let status = json_output(harness.console().run(command(&["status"])).await.unwrap());
    assert_eq!(status["authenticated"], json!(false));
    assert_eq!(status["user"], json!(null));
    assert_eq!(status["location"], json!("/login"));
}

#[tokio::test]
async fn test_open_reports_guard_decision() {
    let harness = Harness::start().await;
    let mut console = harness.console();

    let view = json_output(console.run(command(&["open", "/bookings"])).await.unwrap());
    assert_eq!(view, json!({"view": "page", "path": "/login"}));

    login(&mut console).await;
    let view = json_output(console.run(command(&["open", "/staff"])).await.unwrap());
    assert_eq!(view, json!({"view": "page", "path": "/staff"}));

    let view = json_output(console.run(command(&["open", "/nowhere"])).await.unwrap());
    assert_eq!(view, json!({"view": "not_found", "path": "/nowhere"}));
}

#[tokio::test]
async fn test_health_skips_guard() {
    let harness = Harness::start().await;
    harness.server.respond(
        "GET",
        "/feedbacks/health",
        StubResponse::json(200, json!({"status": "UP", "message": "Guest Feedback Service API is running"})),
    );

    let mut console = harness.console();
    let health = json_output(
        console
            .run(command(&["feedbacks", "health"]))
            .await
            .unwrap(),
    );
    assert_eq!(health["status"], json!("UP"));
    assert_eq!(harness.server.last_request().unwrap().authorization, None);
}

#[tokio::test]
async fn test_booking_transition_and_server_error() {
    let harness = Harness::start().await;
    harness.server.respond(
        "PATCH",
        "/bookings/4/check-in",
        StubResponse::text(200, "Booking checked-in successfully."),
    );
    harness.server.respond(
        "DELETE",
        "/guests/9",
        StubResponse::json(409, json!({"message": "Guest has active bookings"})),
    );

    let mut console = harness.console();
    login(&mut console).await;

    let output = console
        .run(command(&["bookings", "check-in", "4"]))
        .await
        .unwrap();
    assert_eq!(output, Output::Text("Booking checked-in successfully.".to_string()));

    let error = console
        .run(command(&["guests", "delete", "9"]))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Guest has active bookings");
}
