// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Audit trail and media gallery endpoint tests.

use axum::http::StatusCode;

mod common;
use common::{body_json, create_test_app, get, login, send_json};
use serde_json::json;

#[tokio::test]
async fn audit_stats_match_the_log() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "auditor@example.com").await;

    let stats = body_json(get(&app.router, "/api/audit/stats", Some(&token)).await).await;
    assert_eq!(stats["data"]["currentBlock"].as_u64().unwrap(), 744_642);
    assert_eq!(stats["data"]["verifiedRecords"].as_u64().unwrap(), 5);
    assert_eq!(stats["data"]["pending"].as_u64().unwrap(), 1);
    assert!(stats["data"]["latency"].as_u64().unwrap() >= 15);

    let logs = body_json(get(&app.router, "/api/audit/logs", Some(&token)).await).await;
    let records = logs["data"].as_array().unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["block"].as_u64().unwrap(), 744_642);
    assert_eq!(records[0]["status"], "pending");
    for record in records {
        assert!(record["hash"].as_str().unwrap().starts_with("0x"));
        assert_eq!(record["uid"], "USR-00X23-KV");
    }
}

#[tokio::test]
async fn current_hash_is_anchored() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "anchor@example.com").await;

    let body = body_json(get(&app.router, "/api/audit/current-hash", Some(&token)).await).await;
    assert_eq!(body["data"]["hash"], "0xa7f92e9F5b332aaA12d");
    assert_eq!(body["data"]["blockNumber"].as_u64().unwrap(), 744_642);
    assert_eq!(body["data"]["verified"], true);
}

#[tokio::test]
async fn verify_hash_applies_the_plausibility_rule() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "verifier@example.com").await;

    let response = send_json(
        &app.router,
        "POST",
        "/api/audit/verify-hash",
        Some(&token),
        &json!({ "hash": "0xdeadbeefcafe1234" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["verified"], true);
    assert_eq!(body["data"]["transactionHash"], "0xdeadbeefcafe1234");
    assert!(body["data"]["blockNumber"].as_u64().is_some());

    // Too short, or missing the 0x prefix: not verified, no block details
    for bad in ["0x123", "deadbeefcafe1234"] {
        let response = send_json(
            &app.router,
            "POST",
            "/api/audit/verify-hash",
            Some(&token),
            &json!({ "hash": bad }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["data"]["verified"], false, "{bad}");
        assert!(body["data"].get("blockNumber").is_none());
    }
}

#[tokio::test]
async fn gallery_and_drone_show() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "curator@example.com").await;

    let gallery = body_json(get(&app.router, "/api/media/gallery", Some(&token)).await).await;
    let items = gallery["data"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    for item in items {
        assert!(["image", "video", "document"].contains(&item["type"].as_str().unwrap()));
        assert!(item["size"].as_str().unwrap().ends_with(" MB"));
    }

    let shows = body_json(get(&app.router, "/api/media/drone-show", Some(&token)).await).await;
    let videos = shows["data"].as_array().unwrap();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|item| item["type"] == "video"));
}

#[tokio::test]
async fn media_stats_count_the_gallery() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "counter@example.com").await;

    let body = body_json(get(&app.router, "/api/media/stats", Some(&token)).await).await;
    let stats = &body["data"];
    assert_eq!(stats["totalItems"].as_u64().unwrap(), 6);
    assert_eq!(stats["videos"].as_u64().unwrap(), 2);
    assert_eq!(stats["images"].as_u64().unwrap(), 2);
    assert_eq!(stats["documents"].as_u64().unwrap(), 2);
    assert_eq!(
        stats["verified"].as_u64().unwrap() + stats["pending"].as_u64().unwrap(),
        6
    );
    assert_eq!(stats["totalSize"], "91.0 MB");
    assert!(stats["fraudAlerts"].as_u64().unwrap() <= 3);
}

#[tokio::test]
async fn upload_returns_a_completed_receipt() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "uploader@example.com").await;

    let response = send_json(
        &app.router,
        "POST",
        "/api/media/upload",
        Some(&token),
        &json!({ "name": "proof.jpg", "size": 123456, "type": "image/jpeg" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "proof.jpg");
    assert_eq!(body["data"]["size"].as_u64().unwrap(), 123456);
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["progress"].as_u64().unwrap(), 100);
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());

    // Bodyless uploads still succeed with fabricated metadata
    let response = send_json(&app.router, "POST", "/api/media/upload", Some(&token), &json!({}))
        .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "upload.jpg");
}

#[tokio::test]
async fn verify_media_item() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "checker@example.com").await;

    let response = send_json(&app.router, "POST", "/api/media/3/verify", Some(&token), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["verified"], true);
}
