// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! In-memory per-user state.
//!
//! Token mappings, user records and memoized reward lists live in
//! dashmaps for the lifetime of the process; everything else the API
//! serves is regenerated deterministically on demand. Redemptions take
//! a per-user async mutex so concurrent requests cannot double-spend
//! a balance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::generator::{self, catalog};
use crate::models::user::{User, UserPreferences, UserStatus};
use crate::models::{Reward, RewardStatus, SessionSnapshot};
use crate::time_utils::format_utc_rfc3339;

/// First id handed to login/register accounts. Hash-mapped tokens land
/// in 1..=1000, so explicit accounts start above that band and the two
/// populations never collide.
const FIRST_ASSIGNED_ID: u64 = 1001;

/// The outcome of a successful redemption.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionResult {
    pub success: bool,
    pub message: String,
    pub remaining_points: u32,
    pub reward: Reward,
}

pub struct MemoryStore {
    /// bearer token -> user id
    tokens: DashMap<String, u64>,
    /// user id -> user record
    users: DashMap<u64, User>,
    /// user id -> memoized reward offers
    rewards: DashMap<u64, Vec<Reward>>,
    /// Per-user mutex to serialize redemptions.
    redeem_locks: DashMap<u64, Arc<Mutex<()>>>,
    next_user_id: AtomicU64,
    /// Balance granted to fresh accounts (and refilled on a zero balance)
    starting_points: u32,
}

impl MemoryStore {
    pub fn new(starting_points: u32) -> Self {
        Self {
            tokens: DashMap::new(),
            users: DashMap::new(),
            rewards: DashMap::new(),
            redeem_locks: DashMap::new(),
            next_user_id: AtomicU64::new(FIRST_ASSIGNED_ID),
            starting_points,
        }
    }

    /// Re-seed the store from a session snapshot written by an earlier
    /// process, so the browser's saved token keeps resolving to the same
    /// account across restarts.
    pub fn restore_session(&self, snapshot: SessionSnapshot) {
        let user_id = snapshot.user.id;
        self.next_user_id.fetch_max(user_id + 1, Ordering::SeqCst);
        self.users.insert(user_id, snapshot.user);
        self.tokens.insert(snapshot.token, user_id);
        tracing::info!(user_id, "Restored session from snapshot");
    }

    // ─── Identity Resolution ─────────────────────────────────────────────

    /// Resolve a bearer token to a user id.
    ///
    /// Known tokens come straight from the map. Unknown non-empty tokens
    /// are mapped by hashing their third dash-separated segment into
    /// 1..=1000 and the mapping is remembered, so a stale browser token
    /// keeps working after a server restart. Only an empty token fails.
    pub fn resolve_token(&self, token: &str) -> Option<u64> {
        if token.is_empty() {
            return None;
        }
        if let Some(id) = self.tokens.get(token) {
            return Some(*id);
        }
        let id = fallback_id(token);
        self.tokens.insert(token.to_string(), id);
        tracing::debug!(user_id = id, "Mapped unknown token via hash fallback");
        Some(id)
    }

    /// Resolve a token all the way to a user record, fabricating the
    /// record if this id has never been seen.
    pub fn user_for_token(&self, token: &str, now: DateTime<Utc>) -> Option<User> {
        let id = self.resolve_token(token)?;
        Some(self.get_or_fabricate(id, now))
    }

    fn get_or_fabricate(&self, user_id: u64, now: DateTime<Utc>) -> User {
        self.users
            .entry(user_id)
            .or_insert_with(|| generator::fabricate_user(user_id, self.starting_points, now))
            .clone()
    }

    /// Look up a user without fabricating one.
    pub fn user(&self, user_id: u64) -> Option<User> {
        self.users.get(&user_id).map(|user| user.clone())
    }

    // ─── Accounts ────────────────────────────────────────────────────────

    /// Log a user in by email, creating the account on first sight.
    /// Returns the user and a fresh bearer token.
    pub fn login(&self, email: &str, now: DateTime<Utc>) -> (User, String) {
        let existing = self
            .users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone());

        let user = match existing {
            Some(mut user) => {
                user.last_active = format_utc_rfc3339(now);
                self.users.insert(user.id, user.clone());
                user
            }
            None => {
                let name = email.split('@').next().unwrap_or(email).to_string();
                self.create_account(name, email.to_string(), now)
            }
        };

        let token = issue_token();
        self.tokens.insert(token.clone(), user.id);
        tracing::info!(user_id = user.id, "User logged in");
        (user, token)
    }

    /// Create a new account. Rejects an email that already has one.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<(User, String), AppError> {
        if self.users.iter().any(|entry| entry.value().email == email) {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }

        let user = self.create_account(name.to_string(), email.to_string(), now);
        let token = issue_token();
        self.tokens.insert(token.clone(), user.id);
        tracing::info!(user_id = user.id, "User registered");
        Ok((user, token))
    }

    fn create_account(&self, name: String, email: String, now: DateTime<Utc>) -> User {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            uid: format!("USR-{}", generator::random_alphanumeric(8).to_uppercase()),
            avatar: catalog::avatar_url(&name),
            name,
            email,
            status: UserStatus::Active,
            activation_level: 1,
            total_points: self.starting_points,
            created_at: format_utc_rfc3339(now),
            last_active: format_utc_rfc3339(now),
            preferences: UserPreferences::default(),
        };
        self.users.insert(id, user.clone());
        user
    }

    /// Drop a token mapping. The user record stays.
    pub fn logout(&self, token: &str) {
        self.tokens.remove(token);
    }

    /// Update profile fields, leaving unspecified ones alone.
    pub fn update_profile(
        &self,
        user_id: u64,
        name: Option<String>,
        email: Option<String>,
        avatar: Option<String>,
    ) -> Result<User, AppError> {
        let mut user = self.users.get_mut(&user_id).ok_or(AppError::UserNotFound)?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(avatar) = avatar {
            user.avatar = avatar;
        }
        Ok(user.clone())
    }

    /// Replace the user's preference toggles.
    pub fn update_preferences(
        &self,
        user_id: u64,
        preferences: UserPreferences,
    ) -> Result<User, AppError> {
        let mut user = self.users.get_mut(&user_id).ok_or(AppError::UserNotFound)?;
        user.preferences = preferences;
        Ok(user.clone())
    }

    // ─── Rewards ─────────────────────────────────────────────────────────

    /// The user's reward offers, generated once and then memoized so
    /// redemption state survives between requests.
    pub fn rewards(&self, user_id: u64, now: DateTime<Utc>) -> Vec<Reward> {
        self.rewards
            .entry(user_id)
            .or_insert_with(|| {
                generator::rewards_for_user(user_id, generator::REWARDS_PER_USER, now)
            })
            .clone()
    }

    /// Forget the memoized rewards so the next request regenerates them.
    pub fn clear_rewards(&self, user_id: u64) {
        self.rewards.remove(&user_id);
    }

    /// Redeem a reward, atomically against other redemptions by the same
    /// user.
    ///
    /// A zero balance is refilled to the starting balance before the
    /// affordability check, so a demo account can always be walked through
    /// the happy path. The balance can never go negative: the cost is
    /// checked under the lock before it is subtracted.
    pub async fn redeem(
        &self,
        user_id: u64,
        reward_id: &str,
    ) -> Result<RedemptionResult, AppError> {
        let lock = self
            .redeem_locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        {
            let mut user = self.users.get_mut(&user_id).ok_or(AppError::UserNotFound)?;
            if user.total_points == 0 {
                user.total_points = self.starting_points;
                tracing::debug!(user_id, "Refilled empty balance");
            }
        }

        let reward = {
            let rewards = self.rewards.get(&user_id).ok_or_else(|| {
                AppError::NotFound("No rewards found for user".to_string())
            })?;
            rewards
                .iter()
                .find(|reward| reward.id == reward_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Reward not found".to_string()))?
        };

        if reward.status != RewardStatus::Available {
            return Err(AppError::BadRequest(
                "Reward is not available for redemption".to_string(),
            ));
        }

        let remaining_points = {
            let mut user = self.users.get_mut(&user_id).ok_or(AppError::UserNotFound)?;
            if user.total_points < reward.points {
                return Err(AppError::BadRequest("Insufficient points".to_string()));
            }
            user.total_points -= reward.points;
            user.total_points
        };

        if let Some(mut rewards) = self.rewards.get_mut(&user_id) {
            if let Some(entry) = rewards.iter_mut().find(|entry| entry.id == reward_id) {
                entry.status = RewardStatus::Redeemed;
            }
        }

        let mut reward = reward;
        reward.status = RewardStatus::Redeemed;
        tracing::info!(user_id, reward_id, remaining_points, "Reward redeemed");

        Ok(RedemptionResult {
            success: true,
            message: format!("Reward \"{}\" redeemed successfully!", reward.title),
            remaining_points,
            reward,
        })
    }
}

fn issue_token() -> String {
    format!("demo-token-{}", generator::random_alphanumeric(32))
}

/// Map a token to a stable id in 1..=1000 by folding the third
/// dash-separated segment (or "default" when there is none) through a
/// 31x rolling hash with 32-bit wrapping.
fn fallback_id(token: &str) -> u64 {
    let segment = token
        .split('-')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .unwrap_or("default");

    let mut acc: i32 = 0;
    for c in segment.chars() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(c as i32);
    }
    u64::from(acc.unsigned_abs() % 1000 + 1)
}
