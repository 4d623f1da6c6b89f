// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Scan history routes: charts, recent activity, pagination, stats and
//! the activity map.

use axum::{
    extract::{rejection::JsonRejection, Query},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

use crate::envelope::{ok, with_metadata, ApiResponse, Page};
use crate::generator::{self, catalog};
use crate::middleware::auth::AuthUser;
use crate::models::{MapMarker, MostRecentScan, ScanEvent};
use crate::time_utils::format_clock_time;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/scans/chart", get(scan_chart))
        .route("/api/scans/recent", get(recent_scans))
        .route("/api/scans/history", get(scan_history))
        .route("/api/scans/stats", get(scan_stats))
        .route("/api/scans/map-markers", get(map_markers))
        .route("/api/scans/record", post(record_scan))
}

/// Scans shown on the weekly bar chart.
const CHART_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Serialize)]
struct ChartPoint {
    day: &'static str,
    scans: u32,
}

async fn scan_chart(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<Vec<ChartPoint>>> {
    let scans = generator::scans_for_user(auth.user.id, CHART_DAYS.len(), Utc::now());
    let points = CHART_DAYS
        .iter()
        .copied()
        .zip(&scans)
        .map(|(day, scan)| ChartPoint {
            day,
            scans: scan.score,
        })
        .collect();
    ok(points)
}

/// Entries on the dashboard's recent-activity card.
const RECENT_SCANS: usize = 5;

async fn recent_scans(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<Vec<ScanEvent>>> {
    ok(generator::scans_for_user(
        auth.user.id,
        RECENT_SCANS,
        Utc::now(),
    ))
}

#[derive(Deserialize)]
pub struct HistoryParams {
    page: Option<u32>,
    limit: Option<u32>,
}

async fn scan_history(
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<HistoryParams>,
) -> Json<ApiResponse<Page<ScanEvent>>> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).max(1);
    let scans = generator::scans_for_user(auth.user.id, generator::MAX_SCANS, Utc::now());
    ok(Page::slice(scans, page, limit))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanStats {
    total_scans: u32,
    this_week: u32,
    unique_locations: u32,
    sponsors: u32,
}

async fn scan_stats(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<ScanStats>> {
    let scans = generator::scans_for_user(auth.user.id, generator::MAX_SCANS, Utc::now());
    // One scan per day, newest first, so the first seven are this week's
    let this_week = scans.len().min(7) as u32;
    let locations: HashSet<&str> = scans.iter().map(|scan| scan.location.as_str()).collect();
    let sponsors: HashSet<&str> = scans.iter().map(|scan| scan.details.brand.as_str()).collect();

    ok(ScanStats {
        total_scans: scans.len() as u32,
        this_week,
        unique_locations: locations.len() as u32,
        sponsors: sponsors.len() as u32,
    })
}

/// The activity map: one pin per generated scan plus the fixed sponsor
/// storefronts, with the newest scan called out in the metadata block.
async fn map_markers(
    Extension(auth): Extension<AuthUser>,
) -> Json<ApiResponse<Vec<MapMarker>>> {
    let now = Utc::now();
    let scans = generator::scans_for_user(auth.user.id, generator::MAX_SCANS, now);

    let most_recent = scans.first().map(|scan| MostRecentScan {
        id: scan.id.clone(),
        location: scan.location.clone(),
        lat: scan.latitude,
        lng: scan.longitude,
        timestamp: scan.timestamp.clone(),
    });

    let mut markers: Vec<MapMarker> = scans
        .iter()
        .map(|scan| MapMarker::Scan {
            id: scan.id.clone(),
            lat: scan.latitude,
            lng: scan.longitude,
            title: scan.location.clone(),
            description: format!("{} ({})", scan.details.product, scan.details.category),
            timestamp: scan.timestamp.clone(),
            points: scan.points,
            status: scan.status,
            scan_type: scan.kind,
            brand: scan.details.brand.clone(),
        })
        .collect();

    markers.extend(
        generator::sponsor_activity(auth.user.id)
            .into_iter()
            .map(|activity| MapMarker::Sponsor {
                id: activity.site.id.to_string(),
                lat: activity.site.lat,
                lng: activity.site.lng,
                title: activity.site.title.to_string(),
                description: activity.site.description.to_string(),
                scan_count: activity.scan_count,
                brand: activity.site.brand.to_string(),
            }),
    );

    with_metadata(markers, json!({ "mostRecentScan": most_recent }))
}

#[derive(Deserialize, Default)]
pub struct RecordScanPayload {
    location: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReceipt {
    id: String,
    time: String,
    date: String,
    location: String,
    sponsor: String,
    #[serde(rename = "type")]
    kind: &'static str,
    verified: bool,
    latitude: f64,
    longitude: f64,
}

/// Simulates scanning a card right now. Nothing is stored; the response
/// is a one-off receipt the scanner screen renders.
async fn record_scan(
    Extension(auth): Extension<AuthUser>,
    payload: Result<Json<RecordScanPayload>, JsonRejection>,
) -> Json<ApiResponse<ScanReceipt>> {
    // A missing or malformed body just means "scan wherever"
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let now = Utc::now();
    let mut rng = rand::thread_rng();

    let site = &catalog::LOCATIONS[rng.gen_range(0..catalog::LOCATIONS.len())];
    let location = payload.location.unwrap_or_else(|| site.name.to_string());
    let kind = catalog::SCAN_KINDS[rng.gen_range(0..catalog::SCAN_KINDS.len())];
    let sponsor = catalog::BRANDS[rng.gen_range(0..catalog::BRANDS.len())];

    tracing::info!(user_id = auth.user.id, %location, "Recorded live scan");

    ok(ScanReceipt {
        id: format!("scan_live_{}", generator::random_alphanumeric(10)),
        time: format_clock_time(now),
        date: now.format("%Y-%m-%d").to_string(),
        location,
        sponsor: sponsor.to_string(),
        kind: kind.label(),
        verified: true,
        latitude: site.lat,
        longitude: site.lng,
    })
}
