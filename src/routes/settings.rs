// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Settings page routes, all scoped to the authenticated user.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::envelope::{ok, ApiResponse};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::user::UserPreferences;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/settings", get(get_settings))
        .route("/api/settings/profile", put(update_profile))
        .route("/api/settings/preferences", put(update_preferences))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileSettings {
    name: String,
    email: String,
    avatar: String,
    uid: String,
    member_since: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SecuritySettings {
    two_factor_enabled: bool,
    active_sessions: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrivacySettings {
    share_activity: bool,
    show_profile: bool,
}

#[derive(Serialize)]
struct SettingsData {
    profile: ProfileSettings,
    preferences: UserPreferences,
    security: SecuritySettings,
    privacy: PrivacySettings,
}

async fn get_settings(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<SettingsData>> {
    let user = auth.user;
    ok(SettingsData {
        profile: ProfileSettings {
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            uid: user.uid,
            member_since: user.created_at,
        },
        preferences: user.preferences,
        // Security and privacy toggles are demo-fixed; the page renders
        // them read-mostly
        security: SecuritySettings {
            two_factor_enabled: false,
            active_sessions: 1,
        },
        privacy: PrivacySettings {
            share_activity: true,
            show_profile: true,
        },
    })
}

#[derive(Deserialize)]
pub struct ProfileUpdatePayload {
    name: Option<String>,
    email: Option<String>,
    avatar: Option<String>,
}

#[derive(Serialize)]
struct UpdateAck {
    message: String,
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    payload: std::result::Result<Json<ProfileUpdatePayload>, JsonRejection>,
) -> Result<Json<ApiResponse<UpdateAck>>> {
    let Json(payload) = payload?;
    state
        .store
        .update_profile(auth.user.id, payload.name, payload.email, payload.avatar)?;
    Ok(ok(UpdateAck {
        message: "Profile updated".to_string(),
    }))
}

async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    payload: std::result::Result<Json<UserPreferences>, JsonRejection>,
) -> Result<Json<ApiResponse<UpdateAck>>> {
    let Json(payload) = payload?;
    state.store.update_preferences(auth.user.id, payload)?;
    Ok(ok(UpdateAck {
        message: "Preferences updated".to_string(),
    }))
}
