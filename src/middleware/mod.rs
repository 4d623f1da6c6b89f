// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Middleware modules (authentication, network simulation).

pub mod auth;
pub mod simulation;

pub use auth::require_auth;
pub use simulation::simulate_network;
