// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Data models for the demo API.

pub mod audit;
pub mod media;
pub mod notification;
pub mod reward;
pub mod scan;
pub mod transaction;
pub mod user;

pub use audit::{AuditRecord, AuditStats, AuditStatus, BlockchainHash, HashVerification};
pub use media::{MediaItem, MediaKind, MediaStatus, UploadedFile};
pub use notification::{Notification, NotificationKind};
pub use reward::{Achievement, Level, Reward, RewardCategory, RewardStatus};
pub use scan::{MapMarker, MostRecentScan, ScanDetails, ScanEvent, ScanKind, ScanStatus};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use user::{SessionSnapshot, User, UserPreferences, UserStatus};
