// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Scan event model for storage and API.

use serde::{Deserialize, Serialize};

/// A single card scan at a partner location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    /// Stable id ("scan_{user}_{n}")
    pub id: String,
    pub user_id: u64,
    /// When the scan happened (RFC3339)
    pub timestamp: String,
    /// Location display name
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Scan quality score, 60..=100
    pub score: u32,
    #[serde(rename = "type")]
    pub kind: ScanKind,
    pub status: ScanStatus,
    /// Points earned by this scan, 10..=50
    pub points: u32,
    pub details: ScanDetails,
}

/// How the card was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanKind {
    #[serde(rename = "QR Scan")]
    QrScan,
    #[serde(rename = "NFC Tap")]
    NfcTap,
    #[serde(rename = "Barcode Scan")]
    BarcodeScan,
}

impl ScanKind {
    /// Display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            ScanKind::QrScan => "QR Scan",
            ScanKind::NfcTap => "NFC Tap",
            ScanKind::BarcodeScan => "Barcode Scan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Success,
    Pending,
    Failed,
}

/// Product details attached to a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDetails {
    pub product: String,
    pub category: String,
    pub brand: String,
}

/// A pin on the scan activity map. Scan markers carry per-event fields,
/// sponsor markers carry an aggregate scan count.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum MapMarker {
    #[serde(rename = "scan", rename_all = "camelCase")]
    Scan {
        id: String,
        lat: f64,
        lng: f64,
        title: String,
        description: String,
        timestamp: String,
        points: u32,
        status: ScanStatus,
        scan_type: ScanKind,
        brand: String,
    },
    #[serde(rename = "sponsor", rename_all = "camelCase")]
    Sponsor {
        id: String,
        lat: f64,
        lng: f64,
        title: String,
        description: String,
        scan_count: u32,
        brand: String,
    },
}

/// Highlight for the map header, pointing at the latest scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostRecentScan {
    pub id: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub timestamp: String,
}
