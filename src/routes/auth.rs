// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Session routes: login, registration, profile and logout.
//!
//! Demo mode accepts any credentials. Logging in with a new email
//! fabricates an account on the spot; logging in again with the same
//! email returns the same account with a fresh token.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::{get, post, put},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::envelope::{ok, ApiResponse};
use crate::error::{AppError, Result};
use crate::middleware::auth::{bearer_token, AuthUser};
use crate::models::{SessionSnapshot, User};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

/// Routes that work without a token.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/logout", post(logout))
}

/// Routes that run behind the auth middleware.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/profile", put(update_profile))
}

#[derive(Serialize)]
struct SessionData {
    user: User,
    token: String,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    email: String,
    // Present for shape only; any password is accepted in demo mode.
    #[allow(dead_code)]
    password: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<LoginPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<SessionData>>> {
    let Json(payload) = payload?;
    let now = Utc::now();
    let (user, token) = state.store.login(&payload.email, now);

    state.snapshot.save(&SessionSnapshot {
        user: user.clone(),
        token: token.clone(),
        last_login: format_utc_rfc3339(now),
    });

    Ok(ok(SessionData { user, token }))
}

#[derive(Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(length(min = 1))]
    name: String,
    #[validate(email)]
    email: String,
    #[allow(dead_code)]
    password: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RegisterPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<SessionData>>> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|_| AppError::BadRequest("Invalid request".to_string()))?;

    let now = Utc::now();
    let (user, token) = state.store.register(&payload.name, &payload.email, now)?;
    Ok(ok(SessionData { user, token }))
}

async fn get_me(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<User>> {
    ok(auth.user)
}

#[derive(Deserialize)]
pub struct ProfilePayload {
    name: Option<String>,
    email: Option<String>,
    avatar: Option<String>,
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    payload: std::result::Result<Json<ProfilePayload>, JsonRejection>,
) -> Result<Json<ApiResponse<User>>> {
    let Json(payload) = payload?;
    let user = state
        .store
        .update_profile(auth.user.id, payload.name, payload.email, payload.avatar)?;
    tracing::info!(user_id = user.id, "Profile updated");
    Ok(ok(user))
}

#[derive(Serialize)]
struct LogoutData {
    message: String,
}

/// Logout never fails: with a token it drops the live mapping (and the
/// snapshot when it stored that same token), without one it is a no-op.
async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<ApiResponse<LogoutData>> {
    if let Some(token) = bearer_token(&headers) {
        state.store.logout(token);
        if state
            .snapshot
            .load()
            .is_some_and(|snapshot| snapshot.token == token)
        {
            state.snapshot.clear();
        }
        tracing::info!("User logged out");
    }

    ok(LogoutData {
        message: "Logged out successfully".to_string(),
    })
}
