// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Session snapshot persistence.
//!
//! The latest login is mirrored to a small JSON file so a restarted
//! process still recognizes the token the browser kept. Best effort
//! only: I/O failures are logged and the API keeps serving.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::models::SessionSnapshot;

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the snapshot, if a readable and well-formed one exists.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read session snapshot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Ignoring corrupt session snapshot");
                None
            }
        }
    }

    /// Write the snapshot for the most recent login.
    pub fn save(&self, snapshot: &SessionSnapshot) {
        match serde_json::to_string_pretty(snapshot) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    tracing::warn!(path = %self.path.display(), error = %err, "Failed to write session snapshot");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize session snapshot");
            }
        }
    }

    /// Remove the snapshot. Missing files are fine; logout after a wiped
    /// disk should not turn into an error.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to remove session snapshot");
            }
        }
    }
}
