//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use application::{UserService, error::ApplicationError, ports::UserStore};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::User;
use infrastructure::AppConfig;
use presentation_http::{HitCounter, routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Mock user store for testing
struct MockUserStore {
    fail: bool,
    deleted: AtomicBool,
}

impl MockUserStore {
    fn new() -> Self {
        Self {
            fail: false,
            deleted: AtomicBool::new(false),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            deleted: AtomicBool::new(false),
        }
    }

    fn delete_was_called(&self) -> bool {
        self.deleted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn create_user(&self, email: &str) -> Result<User, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::Persistence("insert failed".to_string()));
        }
        Ok(User::new(email))
    }

    async fn delete_all_users(&self) -> Result<(), ApplicationError> {
        if self.fail {
            return Err(ApplicationError::Persistence("delete failed".to_string()));
        }
        self.deleted.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn state_with(platform: &str, store: Arc<MockUserStore>) -> AppState {
    let mut config = AppConfig::default();
    config.platform = platform.to_string();
    state_with_config(config, store)
}

fn state_with_config(config: AppConfig, store: Arc<MockUserStore>) -> AppState {
    AppState {
        users: Arc::new(UserService::new(store)),
        hits: Arc::new(HitCounter::new()),
        config: Arc::new(config),
    }
}

fn server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("failed to start test server")
}

#[tokio::test]
async fn healthz_returns_plain_ok() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server.get("/api/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
    assert_eq!(
        response.header("content-type"),
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn healthz_rejects_post() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server.post("/api/healthz").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server.get("/api/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validate_chirp_masks_banned_words() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({
            "body": "This is a kerfuffle opinion I need to share with the world"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "valid": true,
            "cleaned_body": "This is a **** opinion I need to share with the world"
        })
    );
}

#[tokio::test]
async fn validate_chirp_is_case_insensitive() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({"body": "KERFUFFLE Sharbert fornax"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["cleaned_body"],
        "**** **** ****"
    );
}

#[tokio::test]
async fn validate_chirp_leaves_embedded_words_alone() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({"body": "kerfufflee and kerfuffle!"}))
        .await;

    assert_eq!(
        response.json::<Value>()["cleaned_body"],
        "kerfufflee and kerfuffle!"
    );
}

#[tokio::test]
async fn validate_chirp_accepts_exactly_140_bytes() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({"body": "a".repeat(140)}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn validate_chirp_rejects_141_bytes() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({"body": "a".repeat(141)}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Chirp is too long"})
    );
}

#[tokio::test]
async fn validate_chirp_rejects_invalid_json() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .content_type("application/json")
        .bytes("{not valid json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Invalid request body"})
    );
}

#[tokio::test]
async fn validate_chirp_rejects_missing_body_field() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/validate_chirp")
        .json(&json!({"text": "wrong field"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Invalid request body"})
    );
}

#[tokio::test]
async fn create_user_returns_201_with_the_record() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server
        .post("/api/users")
        .json(&json!({"email": "a@b.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["email"], "a@b.com");
    assert!(!body["id"].as_str().expect("id must be a string").is_empty());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn create_user_store_failure_is_a_bare_500() {
    let server = server(state_with("prod", Arc::new(MockUserStore::failing())));

    let response = server
        .post("/api/users")
        .json(&json!({"email": "a@b.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn create_user_rejects_malformed_payload() {
    let server = server(state_with("prod", Arc::new(MockUserStore::new())));

    let response = server.post("/api/users").json(&json!({"name": "x"})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Invalid request body"})
    );
}

#[tokio::test]
async fn metrics_page_reports_the_visit_count() {
    let state = state_with("prod", Arc::new(MockUserStore::new()));
    let hits = Arc::clone(&state.hits);
    let server = server(state);

    for _ in 0..3 {
        hits.record();
    }

    let response = server.get("/admin/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.text(),
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited 3 times!</p></body></html>"
    );
}

#[tokio::test]
async fn reset_is_forbidden_outside_dev() {
    let store = Arc::new(MockUserStore::new());
    let state = state_with("prod", Arc::clone(&store));
    let hits = Arc::clone(&state.hits);
    let server = server(state);

    hits.record();
    hits.record();

    let response = server.post("/admin/reset").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.text(), "");
    assert_eq!(hits.count(), 2, "counter must be untouched");
    assert!(!store.delete_was_called(), "store must be untouched");
}

#[tokio::test]
async fn reset_in_dev_clears_users_and_counter() {
    let store = Arc::new(MockUserStore::new());
    let state = state_with("dev", Arc::clone(&store));
    let hits = Arc::clone(&state.hits);
    let server = server(state);

    for _ in 0..5 {
        hits.record();
    }

    let response = server.post("/admin/reset").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Counter reset to 0");
    assert_eq!(hits.count(), 0);
    assert!(store.delete_was_called());

    let metrics = server.get("/admin/metrics").await;
    assert!(metrics.text().contains("visited 0 times"));
}

#[tokio::test]
async fn reset_store_failure_is_500_and_keeps_the_counter() {
    let state = state_with("dev", Arc::new(MockUserStore::failing()));
    let hits = Arc::clone(&state.hits);
    let server = server(state);

    hits.record();

    let response = server.post("/admin/reset").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn static_files_are_served_with_the_prefix_stripped() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("hello.txt"), "hello from disk").expect("write fixture");

    let mut config = AppConfig::default();
    config.server.static_root = dir.path().display().to_string();
    let state = state_with_config(config, Arc::new(MockUserStore::new()));
    let server = server(state);

    let response = server.get("/app/hello.txt").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "hello from disk");
}

#[tokio::test]
async fn every_static_request_bumps_the_counter() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("hello.txt"), "hello from disk").expect("write fixture");

    let mut config = AppConfig::default();
    config.server.static_root = dir.path().display().to_string();
    let state = state_with_config(config, Arc::new(MockUserStore::new()));
    let hits = Arc::clone(&state.hits);
    let server = server(state);

    server.get("/app/hello.txt").await;
    server.get("/app/hello.txt").await;
    // Misses pass through the counting layer too.
    server.get("/app/missing.txt").await;

    assert_eq!(hits.count(), 3);
}

#[tokio::test]
async fn api_traffic_does_not_bump_the_counter() {
    let state = state_with("prod", Arc::new(MockUserStore::new()));
    let hits = Arc::clone(&state.hits);
    let server = server(state);

    server.get("/api/healthz").await;
    server
        .post("/api/validate_chirp")
        .json(&json!({"body": "hi"}))
        .await;

    assert_eq!(hits.count(), 0);
}
