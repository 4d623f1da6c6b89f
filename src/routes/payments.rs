// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Payment routes: balance stats, the transaction ledger, the earnings
//! chart and a simulated M-Pesa STK push.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::envelope::{ok, ApiResponse};
use crate::error::Result;
use crate::generator;
use crate::middleware::auth::AuthUser;
use crate::models::transaction::{Transaction, TransactionKind, TransactionStatus};
use crate::AppState;

/// Ledger entries generated per user.
const LEDGER_SIZE: usize = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/payments/stats", get(payment_stats))
        .route("/api/payments/history", get(payment_history))
        .route("/api/payments/earnings-chart", get(earnings_chart))
        .route("/api/payments/mpesa/initiate", post(initiate_mpesa))
}

fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentStats {
    total_balance: f64,
    this_week: f64,
    pending_payouts: f64,
}

async fn payment_stats(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<PaymentStats>> {
    let ledger = generator::transactions_for_user(auth.user.id, LEDGER_SIZE, Utc::now());

    let total_balance: f64 = ledger
        .iter()
        .filter(|txn| txn.status == TransactionStatus::Completed)
        .map(|txn| {
            if txn.kind.is_credit() {
                txn.amount
            } else {
                -txn.amount
            }
        })
        .sum();

    // Entries are two days apart, newest first, so the first four fall
    // inside the current week
    let this_week: f64 = ledger
        .iter()
        .take(4)
        .filter(|txn| txn.kind.is_credit() && txn.status == TransactionStatus::Completed)
        .map(|txn| txn.amount)
        .sum();

    let pending_payouts: f64 = ledger
        .iter()
        .filter(|txn| {
            txn.kind == TransactionKind::Payout && txn.status == TransactionStatus::Pending
        })
        .map(|txn| txn.amount)
        .sum();

    ok(PaymentStats {
        // The balance card never shows a deficit
        total_balance: round2(total_balance.max(0.0)),
        this_week: round2(this_week),
        pending_payouts: round2(pending_payouts),
    })
}

async fn payment_history(
    Extension(auth): Extension<AuthUser>,
) -> Json<ApiResponse<Vec<Transaction>>> {
    ok(generator::transactions_for_user(
        auth.user.id,
        LEDGER_SIZE,
        Utc::now(),
    ))
}

#[derive(Serialize)]
struct EarningsPoint {
    week: String,
    amount: f64,
}

async fn earnings_chart(
    Extension(auth): Extension<AuthUser>,
) -> Json<ApiResponse<Vec<EarningsPoint>>> {
    let ledger = generator::transactions_for_user(auth.user.id, LEDGER_SIZE, Utc::now());
    let points = ledger
        .iter()
        .take(6)
        .enumerate()
        .map(|(i, txn)| EarningsPoint {
            week: format!("W{}", i + 1),
            amount: round2(txn.amount),
        })
        .collect();
    ok(points)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MpesaPayload {
    pub phone_number: String,
    pub amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MpesaReceipt {
    merchant_request_id: String,
    checkout_request_id: String,
    response_code: String,
    response_description: String,
    customer_message: String,
}

/// Fakes a successful STK push: the "transaction" is accepted instantly
/// and never settles anywhere.
async fn initiate_mpesa(
    Extension(auth): Extension<AuthUser>,
    payload: std::result::Result<Json<MpesaPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<MpesaReceipt>>> {
    let Json(payload) = payload?;
    tracing::info!(
        user_id = auth.user.id,
        amount = payload.amount,
        "Simulated M-Pesa payout request"
    );

    Ok(ok(MpesaReceipt {
        merchant_request_id: format!("ws_MR_{}", Uuid::new_v4().simple()),
        checkout_request_id: format!("ws_CO_{}", Uuid::new_v4().simple()),
        response_code: "0".to_string(),
        response_description: "Success. Request accepted for processing".to_string(),
        customer_message: "Success. Request accepted for processing".to_string(),
    }))
}
