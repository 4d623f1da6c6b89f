// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Media gallery routes: fixture-backed browsing plus simulated uploads
//! and verification.

use axum::{
    extract::{rejection::JsonRejection, Path},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::envelope::{ok, ApiResponse};
use crate::fixtures;
use crate::middleware::auth::AuthUser;
use crate::models::{MediaItem, MediaKind, MediaStatus, UploadedFile};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/media/gallery", get(gallery))
        .route("/api/media/upload", post(upload))
        .route("/api/media/{id}/verify", post(verify_item))
        .route("/api/media/drone-show", get(drone_show))
        .route("/api/media/stats", get(media_stats))
}

async fn gallery() -> Json<ApiResponse<Vec<MediaItem>>> {
    ok(fixtures::media_gallery(Utc::now()))
}

/// The drone-show page shows only the video items.
async fn drone_show() -> Json<ApiResponse<Vec<MediaItem>>> {
    let videos: Vec<MediaItem> = fixtures::media_gallery(Utc::now())
        .into_iter()
        .filter(|item| item.kind == MediaKind::Video)
        .collect();
    ok(videos)
}

#[derive(Deserialize, Default)]
pub struct UploadPayload {
    name: Option<String>,
    size: Option<u64>,
    #[serde(rename = "type")]
    mime: Option<String>,
}

/// Simulates an upload. The bytes never exist; the receipt just reports
/// a completed transfer so the progress bar has somewhere to land.
async fn upload(
    Extension(auth): Extension<AuthUser>,
    payload: Result<Json<UploadPayload>, JsonRejection>,
) -> Json<ApiResponse<UploadedFile>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let id = Uuid::new_v4().to_string();
    let name = payload.name.unwrap_or_else(|| "upload.jpg".to_string());
    let size = payload
        .size
        .unwrap_or_else(|| rand::thread_rng().gen_range(100_000..5_000_000));

    tracing::info!(user_id = auth.user.id, file = %name, "Simulated media upload");

    ok(UploadedFile {
        url: format!("https://cdn.neocard.example/uploads/{id}"),
        id,
        name,
        size,
        mime: payload.mime.unwrap_or_else(|| "image/jpeg".to_string()),
        status: "completed".to_string(),
        progress: 100,
    })
}

#[derive(Serialize)]
struct VerifiedItem {
    verified: bool,
}

async fn verify_item(Path(id): Path<u32>) -> Json<ApiResponse<VerifiedItem>> {
    tracing::debug!(media_id = id, "Media item marked verified");
    ok(VerifiedItem { verified: true })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MediaStats {
    total_items: u32,
    verified: u32,
    pending: u32,
    videos: u32,
    images: u32,
    documents: u32,
    total_size: String,
    fraud_alerts: u32,
}

async fn media_stats() -> Json<ApiResponse<MediaStats>> {
    let gallery = fixtures::media_gallery(Utc::now());
    let count_kind =
        |kind: MediaKind| gallery.iter().filter(|item| item.kind == kind).count() as u32;

    ok(MediaStats {
        total_items: gallery.len() as u32,
        verified: gallery
            .iter()
            .filter(|item| item.status == MediaStatus::Verified)
            .count() as u32,
        pending: gallery
            .iter()
            .filter(|item| item.status == MediaStatus::Pending)
            .count() as u32,
        videos: count_kind(MediaKind::Video),
        images: count_kind(MediaKind::Image),
        documents: count_kind(MediaKind::Document),
        total_size: fixtures::media_total_size(),
        // The fraud widget wants a small, moving number
        fraud_alerts: rand::thread_rng().gen_range(0..=3),
    })
}
