// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Assistant routes. Replies are canned and keyword-matched; there is no
//! model behind this, only enough variety for the chat widget demo.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Extension, Json, Router,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::envelope::{ok, ApiResponse};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::reward::level_for_points;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ai/chat", post(chat))
        .route("/api/ai/status", get(ai_status))
}

#[derive(Deserialize)]
pub struct ChatPayload {
    message: String,
}

#[derive(Serialize)]
struct ChatReply {
    reply: String,
    suggestions: Vec<&'static str>,
}

/// Picks the canned reply whose topic keyword appears first in the
/// message, falling back to a generic greeting.
fn reply_for(message: &str, points: u32) -> ChatReply {
    let lowered = message.to_lowercase();

    if lowered.contains("point") || lowered.contains("balance") {
        return ChatReply {
            reply: format!(
                "You currently have {points} points. Every scan earns between 10 and 50 more, \
                 so a few scans a week adds up quickly."
            ),
            suggestions: vec!["How do I earn more points?", "Show my rewards"],
        };
    }
    if lowered.contains("reward") || lowered.contains("redeem") {
        return ChatReply {
            reply: "You can redeem any available reward from the Rewards page as long as your \
                    balance covers its cost. Redeemed rewards appear under History."
                .to_string(),
            suggestions: vec!["What is my balance?", "Show available rewards"],
        };
    }
    if lowered.contains("scan") || lowered.contains("location") {
        return ChatReply {
            reply: "Scan your NeoCard at any partner location using QR, NFC or barcode. Your \
                    scan history and the activity map show everywhere you've been."
                .to_string(),
            suggestions: vec!["Where can I scan?", "Show my scan stats"],
        };
    }
    if lowered.contains("level") || lowered.contains("tier") {
        let level = level_for_points(points);
        return ChatReply {
            reply: format!(
                "You're at {} level with {points} points. Levels run from Bronze to Diamond; \
                 keep scanning to move up.",
                level.name
            ),
            suggestions: vec!["What are the level thresholds?", "How do I level up faster?"],
        };
    }

    ChatReply {
        reply: "Hi! I can help with your points, rewards, scans and levels. What would you \
                like to know?"
            .to_string(),
        suggestions: vec![
            "What is my balance?",
            "How do rewards work?",
            "Where can I scan?",
        ],
    }
}

async fn chat(
    Extension(auth): Extension<AuthUser>,
    payload: std::result::Result<Json<ChatPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<ChatReply>>> {
    let Json(payload) = payload?;
    Ok(ok(reply_for(&payload.message, auth.user.total_points)))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AiStatus {
    available: bool,
    model: &'static str,
    response_time: u32,
}

async fn ai_status() -> Json<ApiResponse<AiStatus>> {
    ok(AiStatus {
        available: true,
        model: "neocard-assist-1",
        response_time: rand::thread_rng().gen_range(800..=2600),
    })
}
