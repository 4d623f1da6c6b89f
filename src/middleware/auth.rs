// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Bearer token authentication middleware.
//!
//! Any non-empty bearer token resolves to a user: known tokens through
//! the store's map, unknown ones through the hash fallback. Only a
//! missing or empty token is rejected, which mirrors how forgiving the
//! demo backend is meant to be.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use std::sync::Arc;

/// Authenticated user for the request, inserted by `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: crate::models::User,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ")
}

/// Middleware that requires a bearer token and resolves it to a user.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let user = state
        .store
        .user_for_token(&token, Utc::now())
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(AuthUser { user });
    Ok(next.run(request).await)
}
