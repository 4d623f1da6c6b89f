// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Showcase datasets for the audit, media and notification pages.
//!
//! These are the same for every user, unlike the per-user streams in
//! [`crate::generator`]. Timestamps are anchored to the request time so
//! the pages always look fresh.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::models::audit::{AuditRecord, AuditStatus};
use crate::models::media::{MediaItem, MediaKind, MediaStatus};
use crate::models::notification::{Notification, NotificationKind};
use crate::time_utils::{format_block_time, format_utc_rfc3339};

/// Chain head shown on the audit page.
pub const CURRENT_BLOCK: u64 = 744_642;

/// Hash currently anchoring the demo card.
pub const CURRENT_HASH: &str = "0xa7f92e9F5b332aaA12d";

/// Card code printed on every proof row.
pub const DEMO_CARD_UID: &str = "USR-00X23-KV";

const AUDIT_HASHES: [&str; 6] = [
    CURRENT_HASH,
    "0xb8e03f0C6c443bbB23e",
    "0xc9f14a1D7d554ccC34f",
    "0xd0a25b2E8e665ddD45a",
    "0xe1b36c3F9f776eeE56b",
    "0xf2c47d4A0a887ffF67c",
];

/// Proof log rows, newest first, one block per minute.
pub fn audit_log(now: DateTime<Utc>) -> Vec<AuditRecord> {
    AUDIT_HASHES
        .iter()
        .enumerate()
        .map(|(i, hash)| AuditRecord {
            id: i as u32 + 1,
            uid: DEMO_CARD_UID.to_string(),
            hash: hash.to_string(),
            block: CURRENT_BLOCK - i as u64,
            timestamp: format_block_time(now - Duration::minutes(i as i64)),
            // The newest anchor is still waiting for confirmations
            status: if i == 0 {
                AuditStatus::Pending
            } else {
                AuditStatus::Verified
            },
        })
        .collect()
}

struct MediaSpec {
    id: u32,
    title: &'static str,
    kind: MediaKind,
    status: MediaStatus,
    size_mb: f64,
    days_ago: i64,
    seed: &'static str,
    description: Option<&'static str>,
}

const MEDIA_TABLE: [MediaSpec; 6] = [
    MediaSpec {
        id: 1,
        title: "Amsterdam Light Festival Drone Show",
        kind: MediaKind::Video,
        status: MediaStatus::Verified,
        size_mb: 48.2,
        days_ago: 2,
        seed: "drone-amsterdam",
        description: Some("Aerial highlights from the Amsterdam light festival flyover."),
    },
    MediaSpec {
        id: 2,
        title: "Rotterdam Harbour Drone Show",
        kind: MediaKind::Video,
        status: MediaStatus::Verified,
        size_mb: 36.9,
        days_ago: 9,
        seed: "drone-rotterdam",
        description: Some("Evening formation flight over the Rotterdam harbour cranes."),
    },
    MediaSpec {
        id: 3,
        title: "Scan proof - Amsterdam Central",
        kind: MediaKind::Image,
        status: MediaStatus::Verified,
        size_mb: 2.4,
        days_ago: 1,
        seed: "proof-amsterdam",
        description: None,
    },
    MediaSpec {
        id: 4,
        title: "Scan proof - Utrecht Centraal",
        kind: MediaKind::Image,
        status: MediaStatus::Pending,
        size_mb: 1.8,
        days_ago: 0,
        seed: "proof-utrecht",
        description: None,
    },
    MediaSpec {
        id: 5,
        title: "Partner agreement - TechStore",
        kind: MediaKind::Document,
        status: MediaStatus::Verified,
        size_mb: 0.6,
        days_ago: 30,
        seed: "doc-techstore",
        description: None,
    },
    MediaSpec {
        id: 6,
        title: "Sponsor briefing - Digicomp",
        kind: MediaKind::Document,
        status: MediaStatus::Pending,
        size_mb: 1.1,
        days_ago: 12,
        seed: "doc-digicomp",
        description: None,
    },
];

/// The proof-of-scan gallery.
pub fn media_gallery(now: DateTime<Utc>) -> Vec<MediaItem> {
    MEDIA_TABLE
        .iter()
        .map(|spec| {
            let ext = match spec.kind {
                MediaKind::Video => "mp4",
                MediaKind::Image => "jpg",
                MediaKind::Document => "pdf",
            };
            MediaItem {
                id: spec.id,
                title: spec.title.to_string(),
                kind: spec.kind,
                thumbnail: format!("https://picsum.photos/seed/{}/320/180", spec.seed),
                url: format!("https://cdn.neocard.example/media/{}.{ext}", spec.seed),
                upload_date: format_utc_rfc3339(now - Duration::days(spec.days_ago)),
                status: spec.status,
                size: format!("{:.1} MB", spec.size_mb),
                description: spec.description.map(str::to_string),
            }
        })
        .collect()
}

/// Combined gallery size, formatted the way the stats card shows it.
pub fn media_total_size() -> String {
    let total: f64 = MEDIA_TABLE.iter().map(|spec| spec.size_mb).sum();
    format!("{total:.1} MB")
}

/// Ages of the notification feed entries, newest first.
const NOTIFICATION_AGES_MINUTES: [i64; 4] = [5, 60, 120, 180];

fn humanize_age(minutes: i64) -> String {
    if minutes < 60 {
        format!("{minutes} minutes ago")
    } else if minutes < 120 {
        "1 hour ago".to_string()
    } else {
        format!("{} hours ago", minutes / 60)
    }
}

/// The notification drawer feed. Two entries are unread so the badge
/// counter has something to show.
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Reward,
            icon: "Gift".to_string(),
            title: "New Reward Available".to_string(),
            message: "You've unlocked a EUR 5 discount voucher at TechStore".to_string(),
            time: humanize_age(NOTIFICATION_AGES_MINUTES[0]),
            read: false,
            category: "Rewards".to_string(),
            details: json!({
                "rewardTitle": "EUR 5 Discount Voucher",
                "sponsor": "TechStore",
                "value": "EUR 5.00",
                "pointsRequired": 50,
                "description": "Get EUR 5 off your next purchase at TechStore. Valid on all electronics and accessories.",
                "terms": "Minimum purchase of EUR 25 required. Cannot be combined with other offers.",
                "actionUrl": "/rewards",
                "actionText": "Redeem Now"
            }),
        },
        Notification {
            id: 2,
            kind: NotificationKind::Security,
            icon: "Shield".to_string(),
            title: "Security Alert".to_string(),
            message: "Your blockchain hash has been verified successfully".to_string(),
            time: humanize_age(NOTIFICATION_AGES_MINUTES[1]),
            read: false,
            category: "Security".to_string(),
            details: json!({
                "alertType": "Blockchain Verification",
                "severity": "Low",
                "hash": CURRENT_HASH,
                "blockNumber": CURRENT_BLOCK,
                "description": "Your card's blockchain hash has been verified and recorded on chain.",
                "actionUrl": "/audit",
                "actionText": "View Audit Log"
            }),
        },
        Notification {
            id: 3,
            kind: NotificationKind::Achievement,
            icon: "TrendingUp".to_string(),
            title: "Level Up!".to_string(),
            message: "Congratulations! You've reached Silver level".to_string(),
            time: humanize_age(NOTIFICATION_AGES_MINUTES[2]),
            read: true,
            category: "Achievements".to_string(),
            details: json!({
                "achievementName": "Silver Level Reached",
                "level": "Silver",
                "pointsEarned": 150,
                "totalPoints": 250,
                "nextLevel": "Gold",
                "pointsToNext": 250,
                "actionUrl": "/rewards",
                "actionText": "View Rewards"
            }),
        },
        Notification {
            id: 4,
            kind: NotificationKind::Sponsor,
            icon: "Bell".to_string(),
            title: "Sponsor Update".to_string(),
            message: "Digicomp has added new scan locations".to_string(),
            time: humanize_age(NOTIFICATION_AGES_MINUTES[3]),
            read: true,
            category: "Sponsors".to_string(),
            details: json!({
                "sponsorName": "Digicomp",
                "updateType": "New Scan Locations",
                "locationsAdded": 3,
                "newLocations": ["Downtown Mall", "Tech Plaza", "University Campus"],
                "description": "Digicomp has expanded their network with 3 new scan locations in your area.",
                "actionUrl": "/scan-history",
                "actionText": "View Map"
            }),
        },
    ]
}

/// Unread/today counters for the notification badge, derived from the
/// same table the feed is built from.
pub fn notification_counts() -> NotificationCounts {
    let feed = notifications();
    NotificationCounts {
        unread: feed.iter().filter(|n| !n.read).count() as u32,
        today: NOTIFICATION_AGES_MINUTES
            .iter()
            .filter(|minutes| **minutes < 24 * 60)
            .count() as u32,
        rewards: feed
            .iter()
            .filter(|n| !n.read && n.kind == NotificationKind::Reward)
            .count() as u32,
        security: feed
            .iter()
            .filter(|n| !n.read && n.kind == NotificationKind::Security)
            .count() as u32,
    }
}

/// Badge counters for the notification drawer.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct NotificationCounts {
    pub unread: u32,
    pub today: u32,
    pub rewards: u32,
    pub security: u32,
}
