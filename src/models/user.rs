//! User model for the in-memory store and API.

use serde::{Deserialize, Serialize};

/// A dashboard user. Fabricated on login/register or lazily on the first
/// authenticated request carrying an unknown-but-parseable token; never
/// deleted for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric id, unique and stable for the session lifetime
    pub id: u64,
    /// Public user code ("USR-XXXXXXXX")
    pub uid: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL
    pub avatar: String,
    /// Account status flag
    pub status: UserStatus,
    /// Onboarding tier shown on the overview page
    pub activation_level: u32,
    /// Loyalty point balance (never negative)
    pub total_points: u32,
    /// When the account was created (RFC3339)
    pub created_at: String,
    /// Last authenticated activity (RFC3339)
    pub last_active: String,
    /// Per-user toggles surfaced in the settings page
    pub preferences: UserPreferences,
}

/// Account status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
}

/// Simple on/off preferences carried on the user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub notifications: bool,
    pub email_updates: bool,
    pub dark_mode: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            email_updates: true,
            dark_mode: false,
        }
    }
}

/// Snapshot of the current identity, persisted so a restarted process can
/// restore the token→user mapping (the browser keeps the same record in
/// localStorage). A cache to reconcile, never a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
    pub last_login: String,
}
