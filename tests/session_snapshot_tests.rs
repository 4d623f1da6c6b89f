// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Session snapshot tests: the token the browser keeps must survive a
//! simulated process restart.

use axum::http::StatusCode;
use neocard_demo_api::config::Config;

mod common;
use common::{body_json, create_test_app_with, get, login, send_json};
use serde_json::json;

fn config_with_snapshot(path: std::path::PathBuf) -> Config {
    let mut config = Config::test_default();
    config.snapshot_path = path;
    config
}

#[tokio::test]
async fn login_snapshot_revives_the_session_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let app = create_test_app_with(config_with_snapshot(path.clone()));
    let (token, id) = login(&app.router, "survivor@example.com").await;
    assert!(path.exists());

    // "Restart": a brand new store fed the same snapshot file
    let restarted = create_test_app_with(config_with_snapshot(path.clone()));
    let response = get(&restarted.router, "/api/auth/me", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"].as_u64().unwrap(), id);
    assert_eq!(body["data"]["email"], "survivor@example.com");
}

#[tokio::test]
async fn snapshot_only_keeps_the_latest_login() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let app = create_test_app_with(config_with_snapshot(path.clone()));
    let (first_token, first_id) = login(&app.router, "first@example.com").await;
    let (_, second_id) = login(&app.router, "second@example.com").await;
    assert_ne!(first_id, second_id);

    // Only the second login survives the restart; the first token falls
    // back to a hash-derived identity
    let restarted = create_test_app_with(config_with_snapshot(path.clone()));
    let body = body_json(get(&restarted.router, "/api/auth/me", Some(&first_token)).await).await;
    let revived = body["data"]["id"].as_u64().unwrap();
    assert_ne!(revived, first_id);
    assert!((1..=1000).contains(&revived));
}

#[tokio::test]
async fn logout_clears_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let app = create_test_app_with(config_with_snapshot(path.clone()));
    let (token, _) = login(&app.router, "leaver@example.com").await;
    assert!(path.exists());

    let response = send_json(&app.router, "POST", "/api/auth/logout", Some(&token), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!path.exists());
}

#[tokio::test]
async fn foreign_logout_leaves_the_snapshot_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let app = create_test_app_with(config_with_snapshot(path.clone()));
    login(&app.router, "keeper@example.com").await;

    // Logging out some other token must not clobber the stored session
    let response = send_json(
        &app.router,
        "POST",
        "/api/auth/logout",
        Some("demo-token-somebody-else"),
        &json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(path.exists());
}

#[tokio::test]
async fn corrupt_snapshot_is_ignored_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    // Boot must not fail, and the API must work normally
    let app = create_test_app_with(config_with_snapshot(path));
    let (token, _) = login(&app.router, "fresh@example.com").await;
    let response = get(&app.router, "/api/auth/me", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
