// ABOUTME: Integration tests for the in-memory LRU plan cache
// ABOUTME: Covers TTL expiry, per-user invalidation, eviction, and the cleanup task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use anyhow::Result;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use stride_coach::cache::memory::InMemoryPlanCache;
use stride_coach::cache::{CacheConfig, PlanCache, PlanCacheKey};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TestData {
    value: String,
    count: u32,
}

fn sample_data(value: &str, count: u32) -> TestData {
    TestData {
        value: value.to_owned(),
        count,
    }
}

/// Helper: cache with background cleanup disabled so tests control expiry
async fn create_test_cache(max_entries: usize) -> Result<InMemoryPlanCache> {
    let cache = InMemoryPlanCache::new(CacheConfig {
        max_entries,
        enable_background_cleanup: false,
        ..CacheConfig::default()
    })
    .await?;
    Ok(cache)
}

/// Helper: key for the Monday `weeks` after 2025-06-02
fn week_key(user_id: Uuid, weeks: u64) -> PlanCacheKey {
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap() + Days::new(7 * weeks);
    PlanCacheKey::new(user_id, monday)
}

#[tokio::test]
async fn test_set_and_get_roundtrip() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let key = week_key(Uuid::new_v4(), 0);
    let data = sample_data("weekly plan", 7);

    cache.set(&key, &data, Duration::from_secs(60)).await?;
    let fetched: Option<TestData> = cache.get(&key).await?;

    assert_eq!(fetched, Some(data));
    Ok(())
}

#[tokio::test]
async fn test_get_missing_key_returns_none() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let fetched: Option<TestData> = cache.get(&week_key(Uuid::new_v4(), 0)).await?;
    assert_eq!(fetched, None);
    Ok(())
}

#[tokio::test]
async fn test_entries_expire_after_ttl() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let key = week_key(Uuid::new_v4(), 0);
    cache
        .set(&key, &sample_data("short lived", 1), Duration::from_millis(300))
        .await?;

    let fetched: Option<TestData> = cache.get(&key).await?;
    assert!(fetched.is_some());

    tokio::time::sleep(Duration::from_millis(400)).await;
    let fetched: Option<TestData> = cache.get(&key).await?;
    assert_eq!(fetched, None);
    Ok(())
}

#[tokio::test]
async fn test_ttl_reports_remaining_time() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let key = week_key(Uuid::new_v4(), 0);
    cache
        .set(&key, &sample_data("timed", 1), Duration::from_secs(10))
        .await?;

    let remaining = cache.ttl(&key).await?.unwrap();
    assert!(remaining <= Duration::from_secs(10));
    assert!(remaining >= Duration::from_secs(8));
    Ok(())
}

#[tokio::test]
async fn test_ttl_is_none_for_missing_or_expired_entries() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let key = week_key(Uuid::new_v4(), 0);

    assert_eq!(cache.ttl(&key).await?, None);

    cache
        .set(&key, &sample_data("gone soon", 1), Duration::from_millis(300))
        .await?;
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(cache.ttl(&key).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_invalidate_removes_single_entry() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let user_id = Uuid::new_v4();
    let this_week = week_key(user_id, 0);
    let next_week = week_key(user_id, 1);
    cache
        .set(&this_week, &sample_data("current", 1), Duration::from_secs(60))
        .await?;
    cache
        .set(&next_week, &sample_data("upcoming", 2), Duration::from_secs(60))
        .await?;

    cache.invalidate(&this_week).await?;

    let removed: Option<TestData> = cache.get(&this_week).await?;
    let kept: Option<TestData> = cache.get(&next_week).await?;
    assert_eq!(removed, None);
    assert_eq!(kept, Some(sample_data("upcoming", 2)));
    Ok(())
}

#[tokio::test]
async fn test_invalidate_user_removes_only_their_weeks() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    for weeks in 0..3 {
        cache
            .set(
                &week_key(alice, weeks),
                &sample_data("alice", 1),
                Duration::from_secs(60),
            )
            .await?;
    }
    cache
        .set(&week_key(bob, 0), &sample_data("bob", 1), Duration::from_secs(60))
        .await?;

    let removed = cache.invalidate_user(alice).await?;
    assert_eq!(removed, 3);

    for weeks in 0..3 {
        let gone: Option<TestData> = cache.get(&week_key(alice, weeks)).await?;
        assert_eq!(gone, None);
    }
    let kept: Option<TestData> = cache.get(&week_key(bob, 0)).await?;
    assert_eq!(kept, Some(sample_data("bob", 1)));
    Ok(())
}

#[tokio::test]
async fn test_users_with_the_same_week_are_isolated() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    cache
        .set(&week_key(alice, 0), &sample_data("alice", 1), Duration::from_secs(60))
        .await?;
    cache
        .set(&week_key(bob, 0), &sample_data("bob", 2), Duration::from_secs(60))
        .await?;

    let for_alice: Option<TestData> = cache.get(&week_key(alice, 0)).await?;
    let for_bob: Option<TestData> = cache.get(&week_key(bob, 0)).await?;
    assert_eq!(for_alice, Some(sample_data("alice", 1)));
    assert_eq!(for_bob, Some(sample_data("bob", 2)));
    Ok(())
}

#[tokio::test]
async fn test_lru_evicts_oldest_entries_at_capacity() -> Result<()> {
    let cache = create_test_cache(3).await?;
    let user_id = Uuid::new_v4();
    for weeks in 0..5 {
        cache
            .set(
                &week_key(user_id, weeks),
                &sample_data("week", u32::try_from(weeks)?),
                Duration::from_secs(60),
            )
            .await?;
    }

    // Capacity 3: the two oldest inserts were evicted
    for weeks in 0..2 {
        let evicted: Option<TestData> = cache.get(&week_key(user_id, weeks)).await?;
        assert_eq!(evicted, None);
    }
    for weeks in 2..5 {
        let kept: Option<TestData> = cache.get(&week_key(user_id, weeks)).await?;
        assert!(kept.is_some());
    }
    Ok(())
}

#[tokio::test]
async fn test_clear_all_empties_the_cache() -> Result<()> {
    let cache = create_test_cache(100).await?;
    let user_id = Uuid::new_v4();
    for weeks in 0..4 {
        cache
            .set(&week_key(user_id, weeks), &sample_data("w", 1), Duration::from_secs(60))
            .await?;
    }

    cache.clear_all().await?;

    for weeks in 0..4 {
        let gone: Option<TestData> = cache.get(&week_key(user_id, weeks)).await?;
        assert_eq!(gone, None);
    }
    Ok(())
}

#[tokio::test]
async fn test_health_check_passes() -> Result<()> {
    let cache = create_test_cache(100).await?;
    cache.health_check().await?;
    Ok(())
}

#[tokio::test]
async fn test_background_cleanup_sweeps_expired_entries() -> Result<()> {
    let cache = InMemoryPlanCache::new(CacheConfig {
        max_entries: 100,
        cleanup_interval: Duration::from_millis(200),
        enable_background_cleanup: true,
    })
    .await?;
    let user_id = Uuid::new_v4();
    cache
        .set(
            &week_key(user_id, 0),
            &sample_data("expiring", 1),
            Duration::from_millis(200),
        )
        .await?;
    cache
        .set(
            &week_key(user_id, 1),
            &sample_data("durable", 2),
            Duration::from_secs(60),
        )
        .await?;

    tokio::time::sleep(Duration::from_millis(600)).await;

    let swept: Option<TestData> = cache.get(&week_key(user_id, 0)).await?;
    let kept: Option<TestData> = cache.get(&week_key(user_id, 1)).await?;
    assert_eq!(swept, None);
    assert_eq!(kept, Some(sample_data("durable", 2)));
    Ok(())
}

#[tokio::test]
async fn test_cache_key_display_format() {
    let user_id = Uuid::new_v4();
    let key = PlanCacheKey::new(user_id, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());

    assert_eq!(key.to_string(), format!("user:{user_id}:week:2025-06-02"));
    assert!(key.to_string().starts_with(&PlanCacheKey::user_prefix(user_id)));
}
