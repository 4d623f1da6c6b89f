// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Per-user state: token mappings, user records, memoized rewards and
//! the session snapshot file.

pub mod memory;
pub mod snapshot;

pub use memory::{MemoryStore, RedemptionResult};
pub use snapshot::SnapshotStore;
