// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Scan endpoint tests: chart, feed, pagination, stats and the map.

use axum::http::StatusCode;

mod common;
use common::{body_json, create_test_app, get, login, send_json};
use serde_json::json;

/// Names in the fixed location catalog, kept in sync with the generator.
const CATALOG: [&str; 15] = [
    "Amsterdam Central",
    "Rotterdam Centraal",
    "Utrecht Centraal",
    "The Hague Central",
    "Eindhoven Central",
    "Tilburg Central",
    "Groningen Central",
    "Almere Centrum",
    "Breda Central",
    "Nijmegen Central",
    "Enschede Central",
    "Haarlem Central",
    "Arnhem Central",
    "Zaanstad Central",
    "Amersfoort Central",
];

#[tokio::test]
async fn chart_has_seven_labelled_points() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "chart@example.com").await;

    let body = body_json(get(&app.router, "/api/scans/chart", Some(&token)).await).await;
    let points = body["data"].as_array().unwrap();
    assert_eq!(points.len(), 7);
    assert_eq!(points[0]["day"], "Mon");
    assert_eq!(points[6]["day"], "Sun");
    for point in points {
        let scans = point["scans"].as_u64().unwrap();
        assert!((60..=100).contains(&scans));
    }
}

#[tokio::test]
async fn recent_returns_five_newest_first() {
    let app = create_test_app();
    let (token, id) = login(&app.router, "recent@example.com").await;

    let body = body_json(get(&app.router, "/api/scans/recent", Some(&token)).await).await;
    let scans = body["data"].as_array().unwrap();
    assert_eq!(scans.len(), 5);
    assert_eq!(scans[0]["id"], format!("scan_{id}_1"));

    let mut timestamps: Vec<&str> = scans
        .iter()
        .map(|scan| scan["timestamp"].as_str().unwrap())
        .collect();
    let sorted = {
        let mut t = timestamps.clone();
        t.sort_unstable_by(|a, b| b.cmp(a));
        t
    };
    assert_eq!(timestamps, sorted);
    timestamps.dedup();
    assert_eq!(timestamps.len(), 5);
}

#[tokio::test]
async fn history_never_exceeds_the_catalog() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "history@example.com").await;

    let body = body_json(
        get(&app.router, "/api/scans/history?page=1&limit=100", Some(&token)).await,
    )
    .await;
    let page = &body["data"];
    assert_eq!(page["total"].as_u64().unwrap(), 15);
    assert_eq!(page["data"].as_array().unwrap().len(), 15);
    assert_eq!(page["hasMore"], false);

    for scan in page["data"].as_array().unwrap() {
        let location = scan["location"].as_str().unwrap();
        assert!(CATALOG.contains(&location), "unknown location {location}");
    }
}

#[tokio::test]
async fn history_pages_with_defaults() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "pager@example.com").await;

    // Default window is page 1, limit 10
    let body = body_json(get(&app.router, "/api/scans/history", Some(&token)).await).await;
    assert_eq!(body["data"]["page"].as_u64().unwrap(), 1);
    assert_eq!(body["data"]["limit"].as_u64().unwrap(), 10);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"]["hasMore"], true);

    let body = body_json(
        get(&app.router, "/api/scans/history?page=2&limit=10", Some(&token)).await,
    )
    .await;
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["hasMore"], false);

    // Past the end: empty page, not an error
    let body = body_json(
        get(&app.router, "/api/scans/history?page=9&limit=10", Some(&token)).await,
    )
    .await;
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn stats_are_derived_from_the_generated_set() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "stats@example.com").await;

    let body = body_json(get(&app.router, "/api/scans/stats", Some(&token)).await).await;
    let stats = &body["data"];
    assert_eq!(stats["totalScans"].as_u64().unwrap(), 15);
    assert_eq!(stats["thisWeek"].as_u64().unwrap(), 7);
    assert_eq!(stats["uniqueLocations"].as_u64().unwrap(), 15);
    let sponsors = stats["sponsors"].as_u64().unwrap();
    assert!((1..=10).contains(&sponsors));
}

#[tokio::test]
async fn map_markers_cover_scans_and_sponsors() {
    let app = create_test_app();
    // A user who has never scanned still gets a fully populated map
    let (token, _) = login(&app.router, "fresh-map@example.com").await;

    let body = body_json(get(&app.router, "/api/scans/map-markers", Some(&token)).await).await;
    let markers = body["data"].as_array().unwrap();
    assert_eq!(markers.len(), 15 + 3);

    let scan_markers = markers.iter().filter(|m| m["type"] == "scan").count();
    let sponsor_markers = markers.iter().filter(|m| m["type"] == "sponsor").count();
    assert_eq!(scan_markers, 15);
    assert_eq!(sponsor_markers, 3);

    for marker in markers.iter().filter(|m| m["type"] == "sponsor") {
        assert!(marker["scanCount"].as_u64().unwrap() >= 3);
    }

    let recent = &body["metadata"]["mostRecentScan"];
    assert!(recent["id"].as_str().unwrap().starts_with("scan_"));
    assert!(CATALOG.contains(&recent["location"].as_str().unwrap()));
}

#[tokio::test]
async fn map_markers_are_stable_per_user() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "map-stable@example.com").await;

    let first = body_json(get(&app.router, "/api/scans/map-markers", Some(&token)).await).await;
    let second = body_json(get(&app.router, "/api/scans/map-markers", Some(&token)).await).await;

    let ids = |body: &serde_json::Value| {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[tokio::test]
async fn record_scan_issues_a_receipt() {
    let app = create_test_app();
    let (token, _) = login(&app.router, "scanner@example.com").await;

    let response = send_json(
        &app.router,
        "POST",
        "/api/scans/record",
        Some(&token),
        &json!({ "location": "Utrecht Centraal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let receipt = &body["data"];
    assert!(receipt["id"].as_str().unwrap().starts_with("scan_live_"));
    assert_eq!(receipt["location"], "Utrecht Centraal");
    assert_eq!(receipt["verified"], true);
    assert!(receipt["latitude"].as_f64().is_some());

    // Body is optional; an empty scan still succeeds
    let response = send_json(&app.router, "POST", "/api/scans/record", Some(&token), &json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(CATALOG.contains(&body["data"]["location"].as_str().unwrap()));
}
