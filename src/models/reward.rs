// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Reward and loyalty level models.

use serde::{Deserialize, Serialize};

/// A redeemable reward offered to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Stable id ("reward_{user}_{n}")
    pub id: String,
    pub user_id: u64,
    pub title: String,
    pub description: String,
    /// Cost to redeem, 25..=200
    pub points: u32,
    pub category: RewardCategory,
    pub status: RewardStatus,
    /// When the offer lapses (RFC3339)
    pub expiry_date: String,
    /// Illustration URL
    pub image: String,
    pub sponsor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardCategory {
    #[serde(rename = "Gift Card")]
    GiftCard,
    #[serde(rename = "Discount")]
    Discount,
    #[serde(rename = "Free Item")]
    FreeItem,
    #[serde(rename = "Experience")]
    Experience,
}

/// Redemption moves a reward from `Available` to `Redeemed`, one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    Available,
    Redeemed,
}

/// A loyalty tier with its point band and gradient color used by the UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    pub color: &'static str,
}

/// The fixed tier ladder, lowest first.
pub const LEVELS: [Level; 5] = [
    Level {
        name: "Bronze",
        min: 0,
        max: 100,
        color: "from-orange-900 to-orange-700",
    },
    Level {
        name: "Silver",
        min: 100,
        max: 250,
        color: "from-gray-400 to-gray-300",
    },
    Level {
        name: "Gold",
        min: 250,
        max: 500,
        color: "from-yellow-600 to-yellow-400",
    },
    Level {
        name: "Platinum",
        min: 500,
        max: 1000,
        color: "from-cyan-600 to-cyan-400",
    },
    Level {
        name: "Diamond",
        min: 1000,
        max: 9999,
        color: "from-purple-600 to-purple-400",
    },
];

/// Returns the tier a point balance falls into. Balances past the top band
/// stay Diamond.
pub fn level_for_points(points: u32) -> &'static Level {
    LEVELS
        .iter()
        .rev()
        .find(|level| points >= level.min)
        .unwrap_or(&LEVELS[0])
}

/// Percent progress through the current tier band, clamped to 0..=100.
pub fn progress_in_level(points: u32, level: &Level) -> u32 {
    if points >= level.max {
        return 100;
    }
    let span = level.max - level.min;
    if span == 0 {
        return 100;
    }
    (points.saturating_sub(level.min)) * 100 / span
}

/// A badge shown on the rewards page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}
