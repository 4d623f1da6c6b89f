// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Success envelope shared by every endpoint.
//!
//! The dashboard's API client unwraps `{"success": true, "data": ...}` and
//! optionally reads a top-level `metadata` object next to the payload. List
//! endpoints that page nest a [`Page`] inside `data` rather than adding
//! sibling fields.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// One page of a list, with the window bookkeeping the client reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Cuts the `page`/`limit` window out of `items`.
    pub fn slice(items: Vec<T>, page: u32, limit: u32) -> Self {
        let total = items.len() as u32;
        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = start.saturating_add(limit).min(total);
        let data: Vec<T> = items
            .into_iter()
            .skip(start as usize)
            .take(end.saturating_sub(start) as usize)
            .collect();
        Self {
            data,
            total,
            page,
            limit,
            has_more: end < total,
        }
    }
}

/// Wraps a payload in the success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
        metadata: None,
    })
}

/// Success envelope plus a free-form metadata block.
pub fn with_metadata<T: Serialize>(
    data: T,
    metadata: serde_json::Value,
) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
        metadata: Some(metadata),
    })
}
