//! Notification feed models.

use serde::Serialize;

/// One entry in the notification drawer. `details` is a free-form block
/// whose shape depends on `kind`; the drawer renders it in a modal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Icon name the frontend maps to a glyph ("Gift", "Shield", ...)
    pub icon: String,
    pub title: String,
    pub message: String,
    /// Humanized age, e.g. "5 minutes ago"
    pub time: String,
    pub read: bool,
    /// Display label for the kind ("Rewards", "Security", ...)
    pub category: String,
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reward,
    Security,
    Achievement,
    Sponsor,
}
