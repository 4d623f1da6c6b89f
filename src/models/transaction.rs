// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Payment transaction model.

use serde::{Deserialize, Serialize};

/// One entry in a user's payment ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable id ("txn_{user}_{n}")
    pub id: String,
    pub user_id: u64,
    /// Monetary amount, two decimal places
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    /// When the transaction was posted (RFC3339)
    pub timestamp: String,
    pub description: String,
    /// Bank-style reference code, ten uppercase characters
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earnings,
    Payout,
    Bonus,
    Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionKind {
    /// Whether this kind adds to the balance (earnings, bonus) or
    /// draws it down (payout, penalty).
    pub fn is_credit(self) -> bool {
        matches!(self, TransactionKind::Earnings | TransactionKind::Bonus)
    }
}
