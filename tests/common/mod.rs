// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use neocard_demo_api::config::Config;
use neocard_demo_api::routes::create_router;
use neocard_demo_api::AppState;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router wired to quiet test config: no latency, no injected errors,
/// snapshot in a throwaway directory that lives as long as the app.
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    // Keeps the snapshot directory alive for the test's duration
    pub snapshot_dir: TempDir,
}

#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    create_test_app_with(Config::test_default())
}

/// Build a test app with a customized config. The snapshot path is always
/// redirected into a fresh temp dir unless the caller already did so.
#[allow(dead_code)]
pub fn create_test_app_with(mut config: Config) -> TestApp {
    let snapshot_dir = tempfile::tempdir().expect("tempdir");
    if config.snapshot_path == Config::test_default().snapshot_path {
        config.snapshot_path = snapshot_dir.path().join("session.json");
    }
    let state = Arc::new(AppState::new(config));
    TestApp {
        router: create_router(state.clone()),
        state,
        snapshot_dir,
    }
}

/// One-shot a GET with an optional bearer token.
#[allow(dead_code)]
pub async fn get(app: &Router, path: &str, token: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(path);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// One-shot a JSON request with an optional bearer token.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: &Value,
) -> Response<Body> {
    let mut request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in with the given email and return (token, user id).
#[allow(dead_code)]
pub async fn login(app: &Router, email: &str) -> (String, u64) {
    let response = send_json(
        app,
        "POST",
        "/api/auth/login",
        None,
        &serde_json::json!({ "email": email, "password": "secret" }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let token = body["data"]["token"].as_str().unwrap().to_string();
    let id = body["data"]["user"]["id"].as_u64().unwrap();
    (token, id)
}
