// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Notification drawer routes. The feed is a fixture; read-state writes
//! are acknowledged and dropped, since the demo never re-reads them.

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::envelope::{ok, ApiResponse};
use crate::fixtures::{self, NotificationCounts};
use crate::models::Notification;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notifications", get(notification_feed))
        .route("/api/notifications/{id}/read", post(mark_read))
        .route("/api/notifications/mark-all-read", post(mark_all_read))
        .route("/api/notifications/stats", get(notification_stats))
}

async fn notification_feed() -> Json<ApiResponse<Vec<Notification>>> {
    ok(fixtures::notifications())
}

#[derive(Serialize)]
struct ReadAck {
    read: bool,
}

async fn mark_read(Path(id): Path<u32>) -> Json<ApiResponse<ReadAck>> {
    tracing::debug!(notification_id = id, "Notification marked read");
    ok(ReadAck { read: true })
}

#[derive(Serialize)]
struct ReadAllAck {
    updated: u32,
}

async fn mark_all_read() -> Json<ApiResponse<ReadAllAck>> {
    let unread = fixtures::notification_counts().unread;
    ok(ReadAllAck { updated: unread })
}

async fn notification_stats() -> Json<ApiResponse<NotificationCounts>> {
    ok(fixtures::notification_counts())
}
