// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! NeoCard Demo API Server
//!
//! Stands in for the loyalty dashboard's backend: every endpoint the SPA
//! calls is answered from simulated per-user data, with configurable
//! latency and error injection so the UI can be exercised realistically.

use neocard_demo_api::{config::Config, routes::create_router, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        error_rate = config.error_rate,
        simulate_latency = config.simulate_latency,
        "Starting NeoCard demo API"
    );

    // Build shared state; a leftover session snapshot re-seeds the store
    let state = Arc::new(AppState::new(config));

    // Build router
    let app = create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("neocard_demo_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
