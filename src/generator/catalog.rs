// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Fixed candidate pools the generator draws from.
//!
//! Keeping every name and coordinate in one table is what makes the
//! simulated data stable: the same seed always lands on the same rows.

use crate::models::reward::Achievement;
use crate::models::scan::{ScanKind, ScanStatus};
use crate::models::transaction::{TransactionKind, TransactionStatus};
use crate::models::RewardCategory;

/// A partner location where cards can be scanned.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// The scan location catalog. Scan counts are capped at this table's
/// length; past it the generator cycles from the top.
pub const LOCATIONS: [Location; 15] = [
    Location { name: "Amsterdam Central", lat: 52.3791, lng: 4.9003 },
    Location { name: "Rotterdam Centraal", lat: 51.9225, lng: 4.4792 },
    Location { name: "Utrecht Centraal", lat: 52.0893, lng: 5.1100 },
    Location { name: "The Hague Central", lat: 52.0802, lng: 4.3101 },
    Location { name: "Eindhoven Central", lat: 51.4416, lng: 5.4697 },
    Location { name: "Tilburg Central", lat: 51.5606, lng: 5.0919 },
    Location { name: "Groningen Central", lat: 53.2194, lng: 6.5665 },
    Location { name: "Almere Centrum", lat: 52.3508, lng: 5.2647 },
    Location { name: "Breda Central", lat: 51.5719, lng: 4.7683 },
    Location { name: "Nijmegen Central", lat: 51.8426, lng: 5.8528 },
    Location { name: "Enschede Central", lat: 52.2206, lng: 6.8958 },
    Location { name: "Haarlem Central", lat: 52.3792, lng: 4.6368 },
    Location { name: "Arnhem Central", lat: 51.9851, lng: 5.8987 },
    Location { name: "Zaanstad Central", lat: 52.4531, lng: 4.8136 },
    Location { name: "Amersfoort Central", lat: 52.1552, lng: 5.3872 },
];

pub const SCAN_KINDS: [ScanKind; 3] = [ScanKind::QrScan, ScanKind::NfcTap, ScanKind::BarcodeScan];

pub const SCAN_STATUSES: [ScanStatus; 3] =
    [ScanStatus::Success, ScanStatus::Pending, ScanStatus::Failed];

pub const PRODUCTS: [&str; 12] = [
    "Wireless Earbuds",
    "Espresso Beans",
    "Travel Mug",
    "USB-C Charger",
    "Canvas Tote",
    "Bluetooth Speaker",
    "Notebook Set",
    "Steel Water Bottle",
    "Desk Lamp",
    "Laptop Sleeve",
    "Pocket Umbrella",
    "Gift Wrap Set",
];

pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Groceries",
    "Home & Garden",
    "Clothing",
    "Books",
    "Sports",
    "Beauty",
    "Toys",
];

pub const BRANDS: [&str; 10] = [
    "TechStore",
    "Digicomp",
    "NeoCard",
    "Blokker Group",
    "Van Dijk Retail",
    "Hema Partners",
    "Coolblue Labs",
    "Jumbo Markets",
    "Etos Care",
    "Praxis Home",
];

/// Title, blurb and illustration for one reward offer.
#[derive(Debug, Clone, Copy)]
pub struct RewardTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const REWARD_TEMPLATES: [RewardTemplate; 8] = [
    RewardTemplate {
        title: "Free Coffee Voucher",
        description: "One hot drink at any partner kiosk.",
        image: "https://picsum.photos/seed/coffee/400/300",
    },
    RewardTemplate {
        title: "10% Electronics Discount",
        description: "Ten percent off a single electronics purchase.",
        image: "https://picsum.photos/seed/electronics/400/300",
    },
    RewardTemplate {
        title: "Cinema Ticket",
        description: "One standard seat at a partner cinema.",
        image: "https://picsum.photos/seed/cinema/400/300",
    },
    RewardTemplate {
        title: "EUR 10 Gift Card",
        description: "Ten euro gift card valid at all partner stores.",
        image: "https://picsum.photos/seed/giftcard/400/300",
    },
    RewardTemplate {
        title: "Museum Day Pass",
        description: "Full-day entry to a participating museum.",
        image: "https://picsum.photos/seed/museum/400/300",
    },
    RewardTemplate {
        title: "Lunch Deal",
        description: "A lunch combo at a partner restaurant.",
        image: "https://picsum.photos/seed/lunch/400/300",
    },
    RewardTemplate {
        title: "Train Day Ticket",
        description: "Unlimited off-peak rail travel for one day.",
        image: "https://picsum.photos/seed/train/400/300",
    },
    RewardTemplate {
        title: "Bluetooth Speaker",
        description: "Compact speaker, while stocks last.",
        image: "https://picsum.photos/seed/speaker/400/300",
    },
];

pub const REWARD_CATEGORIES: [RewardCategory; 4] = [
    RewardCategory::GiftCard,
    RewardCategory::Discount,
    RewardCategory::FreeItem,
    RewardCategory::Experience,
];

pub const TRANSACTION_KINDS: [TransactionKind; 4] = [
    TransactionKind::Earnings,
    TransactionKind::Payout,
    TransactionKind::Bonus,
    TransactionKind::Penalty,
];

pub const TRANSACTION_STATUSES: [TransactionStatus; 3] = [
    TransactionStatus::Completed,
    TransactionStatus::Pending,
    TransactionStatus::Failed,
];

pub const TRANSACTION_DESCRIPTIONS: [&str; 8] = [
    "Scan rewards payout",
    "Weekly earnings transfer",
    "Campaign bonus",
    "Referral bonus",
    "Partner promotion credit",
    "Chargeback adjustment",
    "Balance correction",
    "Monthly loyalty payout",
];

/// A sponsor storefront pinned on the activity map.
#[derive(Debug, Clone, Copy)]
pub struct SponsorSite {
    pub id: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub title: &'static str,
    pub description: &'static str,
    pub brand: &'static str,
    /// Inclusive bounds for the simulated visit count
    pub min_scans: u32,
    pub max_scans: u32,
}

pub const SPONSOR_SITES: [SponsorSite; 3] = [
    SponsorSite {
        id: "sponsor-1",
        lat: 52.3676,
        lng: 4.9041,
        title: "TechStore Downtown",
        description: "Electronics & Gadgets",
        brand: "TechStore",
        min_scans: 5,
        max_scans: 25,
    },
    SponsorSite {
        id: "sponsor-2",
        lat: 51.9225,
        lng: 4.4792,
        title: "Digicomp Plaza",
        description: "Computer Services",
        brand: "Digicomp",
        min_scans: 3,
        max_scans: 18,
    },
    SponsorSite {
        id: "sponsor-3",
        lat: 52.0893,
        lng: 5.1100,
        title: "NeoCard Center",
        description: "Official NeoCard Hub",
        brand: "NeoCard",
        min_scans: 10,
        max_scans: 35,
    },
];

/// Badges shown on the rewards page. Unlock flags are fixed for the demo.
pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { id: 1, title: "First Scan", icon: "Zap", unlocked: true },
    Achievement { id: 2, title: "Week Warrior", icon: "Star", unlocked: true },
    Achievement { id: 3, title: "Multi-Location", icon: "Trophy", unlocked: true },
    Achievement { id: 4, title: "100 Scans", icon: "Gift", unlocked: false },
];

/// Avatar URL for a display name, using the UI Avatars service.
pub fn avatar_url(name: &str) -> String {
    let encoded = name.replace(' ', "+");
    format!(
        "https://ui-avatars.com/api/?name={encoded}&background=random&color=fff&size=400&rounded=true"
    )
}
