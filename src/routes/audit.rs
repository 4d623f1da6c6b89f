// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Blockchain audit routes. The "chain" is a fixed fixture dataset; the
//! only logic here is the hash verification rule.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;

use crate::envelope::{ok, ApiResponse};
use crate::error::Result;
use crate::fixtures;
use crate::models::{AuditRecord, AuditStats, AuditStatus, BlockchainHash, HashVerification};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/audit/stats", get(audit_stats))
        .route("/api/audit/logs", get(audit_logs))
        .route("/api/audit/current-hash", get(current_hash))
        .route("/api/audit/verify-hash", post(verify_hash))
}

async fn audit_stats() -> Json<ApiResponse<AuditStats>> {
    let log = fixtures::audit_log(Utc::now());
    ok(AuditStats {
        current_block: fixtures::CURRENT_BLOCK,
        verified_records: log
            .iter()
            .filter(|record| record.status == AuditStatus::Verified)
            .count() as u32,
        pending: log
            .iter()
            .filter(|record| record.status == AuditStatus::Pending)
            .count() as u32,
        latency: rand::thread_rng().gen_range(15..=80),
    })
}

async fn audit_logs() -> Json<ApiResponse<Vec<AuditRecord>>> {
    ok(fixtures::audit_log(Utc::now()))
}

async fn current_hash() -> Json<ApiResponse<BlockchainHash>> {
    ok(BlockchainHash {
        hash: fixtures::CURRENT_HASH.to_string(),
        block_number: fixtures::CURRENT_BLOCK,
        timestamp: format_utc_rfc3339(Utc::now()),
        verified: true,
    })
}

/// Whether a submitted hash passes the demo's plausibility rule.
fn hash_is_plausible(hash: &str) -> bool {
    hash.starts_with("0x") && hash.len() > 10
}

#[derive(Deserialize)]
pub struct VerifyHashPayload {
    hash: String,
}

/// "Verifies" a hash: anything 0x-prefixed and long enough is treated as
/// anchored to the current block.
async fn verify_hash(
    payload: std::result::Result<Json<VerifyHashPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<HashVerification>>> {
    let Json(payload) = payload?;

    if !hash_is_plausible(&payload.hash) {
        return Ok(ok(HashVerification {
            verified: false,
            block_number: None,
            timestamp: None,
            transaction_hash: None,
        }));
    }

    Ok(ok(HashVerification {
        verified: true,
        block_number: Some(fixtures::CURRENT_BLOCK),
        timestamp: Some(format_utc_rfc3339(Utc::now())),
        transaction_hash: Some(payload.hash),
    }))
}
