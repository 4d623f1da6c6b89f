// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Reward routes: the tier ladder, offers, redemption and achievements.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::envelope::{ok, ApiResponse};
use crate::error::Result;
use crate::generator::catalog;
use crate::middleware::auth::AuthUser;
use crate::models::reward::{level_for_points, progress_in_level, LEVELS};
use crate::models::{Achievement, Level, Reward, RewardStatus};
use crate::store::RedemptionResult;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/rewards/levels", get(levels))
        .route("/api/rewards/current-level", get(current_level))
        .route("/api/rewards/available", get(available_rewards))
        .route("/api/rewards/history", get(reward_history))
        .route("/api/rewards/redeem", post(redeem))
        .route("/api/rewards/achievements", get(achievements))
        // Dev helper for UI work: resets the memoized offers
        .route("/api/debug/clear-rewards", post(clear_rewards))
}

async fn levels() -> Json<ApiResponse<Vec<Level>>> {
    ok(LEVELS.to_vec())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrentLevel {
    level: &'static str,
    progress: u32,
    points: u32,
}

async fn current_level(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<CurrentLevel>> {
    let points = auth.user.total_points;
    let level = level_for_points(points);
    ok(CurrentLevel {
        level: level.name,
        progress: progress_in_level(points, level),
        points,
    })
}

async fn available_rewards(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Json<ApiResponse<Vec<Reward>>> {
    let rewards: Vec<Reward> = state
        .store
        .rewards(auth.user.id, Utc::now())
        .into_iter()
        .filter(|reward| reward.status == RewardStatus::Available)
        .collect();
    ok(rewards)
}

async fn reward_history(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Json<ApiResponse<Vec<Reward>>> {
    let rewards: Vec<Reward> = state
        .store
        .rewards(auth.user.id, Utc::now())
        .into_iter()
        .filter(|reward| reward.status == RewardStatus::Redeemed)
        .collect();
    ok(rewards)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemPayload {
    reward_id: String,
}

async fn redeem(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    payload: std::result::Result<Json<RedeemPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<RedemptionResult>>> {
    let Json(payload) = payload?;
    let result = state.store.redeem(auth.user.id, &payload.reward_id).await?;
    Ok(ok(result))
}

async fn achievements() -> Json<ApiResponse<Vec<Achievement>>> {
    ok(catalog::ACHIEVEMENTS.to_vec())
}

#[derive(Serialize)]
struct ClearedRewards {
    cleared: bool,
}

async fn clear_rewards(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Json<ApiResponse<ClearedRewards>> {
    state.store.clear_rewards(auth.user.id);
    tracing::debug!(user_id = auth.user.id, "Cleared memoized rewards");
    ok(ClearedRewards { cleared: true })
}
