// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Blockchain audit trail models.
//!
//! The audit page renders a plausible-looking proof ledger; nothing here
//! touches a real chain.

use serde::Serialize;

/// One row of the proof log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: u32,
    /// Card code the proof anchors ("USR-00X23-KV")
    pub uid: String,
    /// Anchoring transaction hash ("0x...")
    pub hash: String,
    pub block: u64,
    /// Display timestamp, e.g. "2025-10-20 10:49 UTC"
    pub timestamp: String,
    pub status: AuditStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Verified,
    Pending,
    Failed,
}

/// Headline numbers for the audit page.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStats {
    pub current_block: u64,
    pub verified_records: u32,
    pub pending: u32,
    /// Simulated chain RPC latency in milliseconds
    pub latency: u32,
}

/// The hash currently anchoring the user's records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainHash {
    pub hash: String,
    pub block_number: u64,
    pub timestamp: String,
    pub verified: bool,
}

/// Outcome of a hash lookup. Block details are present only when the
/// hash verified.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashVerification {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}
