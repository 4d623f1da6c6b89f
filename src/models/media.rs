// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Media gallery models.

use serde::Serialize;

/// An item in the proof-of-scan media gallery.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub thumbnail: String,
    pub url: String,
    /// When the item was uploaded (RFC3339)
    pub upload_date: String,
    pub status: MediaStatus,
    /// Display size, e.g. "2.4 MB"
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    Verified,
    Pending,
}

/// Receipt for a simulated file upload. Nothing is stored; the response
/// just tells the uploader the transfer completed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
    pub url: String,
    pub status: String,
    pub progress: u32,
}
