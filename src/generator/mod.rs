// SPDX-License-Identifier: MIT
// Copyright 2026 Kardiverse Technologies Ltd.

//! Deterministic per-user data generation.
//!
//! Every user's scans, rewards and transactions are drawn from an rng
//! seeded with the user id, so repeated requests see the same records
//! without the server storing any of them. Only timestamps move, since
//! they are anchored to the request time.

pub mod catalog;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::scan::{ScanDetails, ScanEvent};
use crate::models::user::{User, UserPreferences, UserStatus};
use crate::models::{Reward, RewardStatus, Transaction};
use crate::time_utils::format_utc_rfc3339;

/// Most scans a single request can ask for; the location catalog bounds it.
pub const MAX_SCANS: usize = catalog::LOCATIONS.len();

/// Rewards generated per user before the store memoizes them.
pub const REWARDS_PER_USER: usize = 8;

/// Independent generation streams for one user. The offsets keep a user's
/// scans, rewards and transactions uncorrelated while staying reproducible.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Scans = 1,
    Rewards = 2,
    Transactions = 3,
    Profile = 4,
    Map = 5,
}

fn stream_rng(user_id: u64, stream: Stream) -> StdRng {
    StdRng::seed_from_u64(user_id.wrapping_mul(1000).wrapping_add(stream as u64))
}

fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random alphanumeric string seeded from the thread rng; used for demo
/// tokens, checkout ids and other one-shot identifiers.
pub fn random_alphanumeric(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

fn seeded_alphanumeric(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generates the user's scan feed, newest first, one location per day.
///
/// `count` is capped at the catalog size; the same user always gets the
/// same ids, locations, scores and points, and a shorter request is a
/// prefix of a longer one.
pub fn scans_for_user(user_id: u64, count: usize, now: DateTime<Utc>) -> Vec<ScanEvent> {
    let mut rng = stream_rng(user_id, Stream::Scans);
    let count = count.min(catalog::LOCATIONS.len());

    (0..count)
        .map(|i| {
            let location = &catalog::LOCATIONS[i % catalog::LOCATIONS.len()];
            ScanEvent {
                id: format!("scan_{user_id}_{}", i + 1),
                user_id,
                timestamp: format_utc_rfc3339(now - Duration::days(i as i64)),
                location: location.name.to_string(),
                latitude: location.lat,
                longitude: location.lng,
                score: rng.gen_range(60..=100),
                kind: *pick(&mut rng, &catalog::SCAN_KINDS),
                status: *pick(&mut rng, &catalog::SCAN_STATUSES),
                points: rng.gen_range(10..=50),
                details: ScanDetails {
                    product: pick(&mut rng, &catalog::PRODUCTS).to_string(),
                    category: pick(&mut rng, &catalog::CATEGORIES).to_string(),
                    brand: pick(&mut rng, &catalog::BRANDS).to_string(),
                },
            }
        })
        .collect()
}

/// Generates the user's reward offers. All of them start out available;
/// redemption state lives in the store, not here.
pub fn rewards_for_user(user_id: u64, count: usize, now: DateTime<Utc>) -> Vec<Reward> {
    let mut rng = stream_rng(user_id, Stream::Rewards);

    (0..count)
        .map(|i| {
            let template = pick(&mut rng, &catalog::REWARD_TEMPLATES);
            let expiry = now + Duration::days(rng.gen_range(30..=365));
            Reward {
                id: format!("reward_{user_id}_{}", i + 1),
                user_id,
                title: template.title.to_string(),
                description: template.description.to_string(),
                points: rng.gen_range(25..=200),
                category: *pick(&mut rng, &catalog::REWARD_CATEGORIES),
                status: RewardStatus::Available,
                expiry_date: format_utc_rfc3339(expiry),
                image: template.image.to_string(),
                sponsor: pick(&mut rng, &catalog::BRANDS).to_string(),
            }
        })
        .collect()
}

/// Generates the user's payment ledger, newest first, one entry every
/// two days. Amounts are whole cents between 10.00 and 500.00.
pub fn transactions_for_user(user_id: u64, count: usize, now: DateTime<Utc>) -> Vec<Transaction> {
    let mut rng = stream_rng(user_id, Stream::Transactions);

    (0..count)
        .map(|i| {
            let cents: u64 = rng.gen_range(1_000..=50_000);
            Transaction {
                id: format!("txn_{user_id}_{}", i + 1),
                user_id,
                amount: cents as f64 / 100.0,
                kind: *pick(&mut rng, &catalog::TRANSACTION_KINDS),
                status: *pick(&mut rng, &catalog::TRANSACTION_STATUSES),
                timestamp: format_utc_rfc3339(now - Duration::days(i as i64 * 2)),
                description: pick(&mut rng, &catalog::TRANSACTION_DESCRIPTIONS).to_string(),
                reference: seeded_alphanumeric(&mut rng, 10).to_uppercase(),
            }
        })
        .collect()
}

/// Fabricates a full user record for an id that has no stored user.
///
/// Identity fields (uid, email, name) are deterministic so the same token
/// keeps resolving to the same-looking account across restarts.
pub fn fabricate_user(user_id: u64, starting_points: u32, now: DateTime<Utc>) -> User {
    let mut rng = stream_rng(user_id, Stream::Profile);
    let name = format!("Demo User {user_id}");
    let created_at = now - Duration::days(rng.gen_range(30..=365));

    User {
        id: user_id,
        uid: format!("USR-{}", seeded_alphanumeric(&mut rng, 8).to_uppercase()),
        name: name.clone(),
        email: format!("demo{user_id}@example.com"),
        avatar: catalog::avatar_url(&name),
        status: UserStatus::Active,
        activation_level: 1,
        total_points: starting_points,
        created_at: format_utc_rfc3339(created_at),
        last_active: format_utc_rfc3339(now),
        preferences: UserPreferences::default(),
    }
}

/// Sponsor storefront with its simulated visit count for one user.
#[derive(Debug, Clone, Copy)]
pub struct SponsorActivity {
    pub site: &'static catalog::SponsorSite,
    pub scan_count: u32,
}

/// Visit counts for the fixed sponsor sites, stable per user.
pub fn sponsor_activity(user_id: u64) -> Vec<SponsorActivity> {
    let mut rng = stream_rng(user_id, Stream::Map);
    catalog::SPONSOR_SITES
        .iter()
        .map(|site| SponsorActivity {
            site,
            scan_count: rng.gen_range(site.min_scans..=site.max_scans),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn scans_are_reproducible_per_user() {
        let first = scans_for_user(42, 10, fixed_now());
        let second = scans_for_user(42, 10, fixed_now());
        assert_eq!(first.len(), 10);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.location, b.location);
            assert_eq!(a.score, b.score);
            assert_eq!(a.points, b.points);
            assert_eq!(a.details.product, b.details.product);
        }
    }

    #[test]
    fn different_users_get_different_scans() {
        let a: Vec<u32> = scans_for_user(1, 15, fixed_now())
            .iter()
            .map(|s| s.score * 100 + s.points)
            .collect();
        let b: Vec<u32> = scans_for_user(2, 15, fixed_now())
            .iter()
            .map(|s| s.score * 100 + s.points)
            .collect();
        assert_ne!(a, b);
    }

    #[test]
    fn scan_count_is_capped_at_catalog_size() {
        let scans = scans_for_user(7, 50, fixed_now());
        assert_eq!(scans.len(), catalog::LOCATIONS.len());
        // Every location appears exactly once at the cap
        let mut names: Vec<_> = scans.iter().map(|s| s.location.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog::LOCATIONS.len());
    }

    #[test]
    fn shorter_scan_request_is_a_prefix() {
        let five = scans_for_user(9, 5, fixed_now());
        let fifteen = scans_for_user(9, 15, fixed_now());
        for (a, b) in five.iter().zip(&fifteen) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.score, b.score);
            assert_eq!(a.points, b.points);
        }
    }

    #[test]
    fn scans_respect_value_ranges() {
        for scan in scans_for_user(33, 15, fixed_now()) {
            assert!((60..=100).contains(&scan.score));
            assert!((10..=50).contains(&scan.points));
        }
    }

    #[test]
    fn rewards_are_reproducible_and_available() {
        let first = rewards_for_user(5, REWARDS_PER_USER, fixed_now());
        let second = rewards_for_user(5, REWARDS_PER_USER, fixed_now());
        assert_eq!(first.len(), REWARDS_PER_USER);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.points, b.points);
            assert_eq!(a.status, RewardStatus::Available);
            assert!((25..=200).contains(&a.points));
        }
    }

    #[test]
    fn transactions_have_two_decimal_amounts() {
        for txn in transactions_for_user(11, 10, fixed_now()) {
            assert!((10.0..=500.0).contains(&txn.amount));
            let cents = (txn.amount * 100.0).round();
            assert!((txn.amount * 100.0 - cents).abs() < 1e-6);
            assert_eq!(txn.reference.len(), 10);
            assert_eq!(txn.reference, txn.reference.to_uppercase());
        }
    }

    #[test]
    fn fabricated_user_is_stable() {
        let a = fabricate_user(4, 200, fixed_now());
        let b = fabricate_user(4, 200, fixed_now());
        assert_eq!(a.uid, b.uid);
        assert_eq!(a.name, "Demo User 4");
        assert_eq!(a.email, "demo4@example.com");
        assert_eq!(a.total_points, 200);
        assert!(a.avatar.contains("Demo+User+4"));
    }

    #[test]
    fn sponsor_counts_stay_in_bounds() {
        for activity in sponsor_activity(21) {
            assert!(activity.scan_count >= activity.site.min_scans);
            assert!(activity.scan_count <= activity.site.max_scans);
        }
    }
}
