// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Network condition simulation.
//!
//! Every API request sleeps for a per-route latency window and then has
//! a small chance of failing with a synthetic 500, so the dashboard sees
//! spinners and error toasts the way it would against a real backend.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Inclusive latency window in milliseconds for one route. Heavier
/// operations (uploads, mpesa, AI chat) get visibly longer windows.
fn latency_window(method: &str, path: &str) -> (u64, u64) {
    match (method, path) {
        ("POST", "/api/auth/login") => (300, 800),
        ("POST", "/api/auth/register") => (400, 800),
        ("GET", "/api/auth/me") => (200, 500),
        ("PUT", "/api/auth/profile") => (400, 700),
        ("POST", "/api/auth/logout") => (200, 400),
        ("GET", "/api/scans/chart") => (200, 400),
        ("GET", "/api/scans/recent") => (300, 600),
        ("GET", "/api/scans/history") => (400, 800),
        ("GET", "/api/scans/stats") => (200, 400),
        ("GET", "/api/scans/map-markers") => (300, 500),
        ("POST", "/api/scans/record") => (500, 1000),
        ("GET", "/api/rewards/levels") => (200, 400),
        ("GET", "/api/rewards/current-level") => (200, 400),
        ("GET", "/api/rewards/available") => (300, 600),
        ("GET", "/api/rewards/history") => (300, 600),
        ("POST", "/api/rewards/redeem") => (500, 1000),
        ("GET", "/api/rewards/achievements") => (200, 400),
        ("GET", "/api/payments/stats") => (200, 400),
        ("GET", "/api/payments/history") => (300, 600),
        ("GET", "/api/payments/earnings-chart") => (200, 400),
        ("POST", "/api/payments/mpesa/initiate") => (1000, 2000),
        ("GET", "/api/audit/stats") => (200, 400),
        ("GET", "/api/audit/logs") => (300, 600),
        ("GET", "/api/audit/current-hash") => (200, 400),
        ("POST", "/api/audit/verify-hash") => (500, 1000),
        ("GET", "/api/media/gallery") => (300, 600),
        ("POST", "/api/media/upload") => (1000, 3000),
        ("GET", "/api/media/drone-show") => (300, 600),
        ("GET", "/api/media/stats") => (300, 600),
        ("GET", "/api/notifications") => (300, 600),
        ("POST", "/api/notifications/mark-all-read") => (300, 500),
        ("GET", "/api/notifications/stats") => (200, 400),
        ("POST", "/api/ai/chat") => (1000, 3000),
        ("GET", "/api/ai/status") => (200, 400),
        ("GET", "/api/settings") => (300, 600),
        ("PUT", "/api/settings/profile") => (500, 1000),
        ("PUT", "/api/settings/preferences") => (400, 800),
        // Debug helpers respond instantly
        ("POST", "/api/debug/clear-rewards") => (0, 0),
        ("POST", p) if p.starts_with("/api/media/") && p.ends_with("/verify") => (500, 1000),
        ("POST", p) if p.starts_with("/api/notifications/") && p.ends_with("/read") => (200, 400),
        _ => (200, 600),
    }
}

/// Middleware that applies the latency window and the error rate.
pub async fn simulate_network(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Only the dashboard API is simulated; /health always answers clean
    if !request.uri().path().starts_with("/api/") {
        return Ok(next.run(request).await);
    }

    if state.config.simulate_latency {
        let (low, high) = latency_window(request.method().as_str(), request.uri().path());
        if high > 0 {
            let wait = rand::thread_rng().gen_range(low..=high);
            tokio::time::sleep(Duration::from_millis(wait)).await;
        }
    }

    if state.config.error_rate > 0.0 && rand::thread_rng().gen_bool(state.config.error_rate) {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "Injected synthetic network error"
        );
        return Err(AppError::Injected);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_have_their_own_windows() {
        assert_eq!(latency_window("POST", "/api/auth/login"), (300, 800));
        assert_eq!(latency_window("POST", "/api/media/upload"), (1000, 3000));
        assert_eq!(latency_window("POST", "/api/ai/chat"), (1000, 3000));
        assert_eq!(latency_window("POST", "/api/debug/clear-rewards"), (0, 0));
    }

    #[test]
    fn parameterized_routes_match_by_shape() {
        assert_eq!(latency_window("POST", "/api/media/4/verify"), (500, 1000));
        assert_eq!(latency_window("POST", "/api/notifications/2/read"), (200, 400));
        // The exact arm wins over the {id}/read shape
        assert_eq!(
            latency_window("POST", "/api/notifications/mark-all-read"),
            (300, 500)
        );
    }

    #[test]
    fn unknown_routes_fall_back_to_a_default_window() {
        assert_eq!(latency_window("GET", "/api/unknown"), (200, 600));
    }
}
