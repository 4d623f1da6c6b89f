// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! NeoCard demo API: the loyalty dashboard's backend, simulated.
//!
//! Serves the whole dashboard contract from in-memory synthetic data so
//! the SPA can run without a real backend. State lives for the process
//! lifetime only, apart from a small session snapshot file that keeps
//! the browser's saved token working across restarts.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;
pub mod time_utils;

use config::Config;
use store::{MemoryStore, SnapshotStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: MemoryStore,
    pub snapshot: SnapshotStore,
}

impl AppState {
    /// Build the state for one process: a fresh in-memory store, re-seeded
    /// from the session snapshot when one survives from an earlier run.
    pub fn new(config: Config) -> Self {
        let store = MemoryStore::new(config.starting_points);
        let snapshot = SnapshotStore::new(config.snapshot_path.clone());
        if let Some(session) = snapshot.load() {
            store.restore_session(session);
        }
        Self {
            config,
            store,
            snapshot,
        }
    }
}
