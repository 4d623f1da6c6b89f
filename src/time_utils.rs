// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Timestamp formatting helpers.
//!
//! All API timestamps are RFC3339 UTC with second precision; a few
//! dashboard widgets want friendlier display strings.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC datetime as RFC3339 with seconds precision and a `Z`
/// suffix, e.g. `2026-08-23T14:05:00Z`.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 12-hour clock time like `02:34 PM`, used on printed scan receipts.
pub fn format_clock_time(date: DateTime<Utc>) -> String {
    date.format("%I:%M %p").to_string()
}

/// Block timestamp style used by the audit page, e.g. `2025-10-20 10:49 UTC`.
pub fn format_block_time(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M UTC").to_string()
}
