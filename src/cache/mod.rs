// ABOUTME: Cache abstraction for generated training plans keyed by user and week
// ABOUTME: Pluggable backend trait with an in-memory LRU implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

/// In-memory cache implementation
pub mod memory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use stride_core::errors::AppResult;
use uuid::Uuid;

/// Configuration for cache backends
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries held before LRU eviction
    pub max_entries: usize,
    /// How often the background task sweeps expired entries
    pub cleanup_interval: Duration,
    /// Whether to run the background cleanup task
    pub enable_background_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            cleanup_interval: Duration::from_secs(300),
            enable_background_cleanup: true,
        }
    }
}

/// Cache key for a user's plan in a specific training week
///
/// Keys are scoped to the Monday that starts the week, so regenerating a
/// plan mid-week overwrites the same entry instead of accumulating stale
/// siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanCacheKey {
    /// Owner of the cached plan
    pub user_id: Uuid,
    /// Monday of the week the plan covers
    pub week_start: NaiveDate,
}

impl PlanCacheKey {
    /// Create a cache key for a user's week
    #[must_use]
    pub const fn new(user_id: Uuid, week_start: NaiveDate) -> Self {
        Self {
            user_id,
            week_start,
        }
    }

    /// String prefix shared by every key belonging to a user
    ///
    /// Used to drop all of a user's cached weeks when their training
    /// configuration changes.
    #[must_use]
    pub fn user_prefix(user_id: Uuid) -> String {
        format!("user:{user_id}:week:")
    }
}

impl fmt::Display for PlanCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}:week:{}", self.user_id, self.week_start)
    }
}

/// Cache backend trait
///
/// Follows the provider pattern used elsewhere in the codebase: backends are
/// constructed from a [`CacheConfig`] and store serialized values with a per
/// entry TTL.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
///
/// use chrono::NaiveDate;
/// use stride_coach::cache::memory::InMemoryPlanCache;
/// use stride_coach::cache::{CacheConfig, PlanCache, PlanCacheKey};
/// use uuid::Uuid;
///
/// # async fn example() -> stride_core::errors::AppResult<()> {
/// let config = CacheConfig {
///     enable_background_cleanup: false,
///     ..CacheConfig::default()
/// };
/// let cache = InMemoryPlanCache::new(config).await?;
///
/// let week = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let key = PlanCacheKey::new(Uuid::new_v4(), week);
/// cache
///     .set(&key, &"cached value", Duration::from_secs(60))
///     .await?;
/// let hit: Option<String> = cache.get(&key).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait PlanCache: Send + Sync + Clone {
    /// Create a new cache backend from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be initialized.
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store a value under the given key with a TTL
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or stored.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &PlanCacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Fetch a value by key, or `None` on a miss or expired entry
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value cannot be deserialized.
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &PlanCacheKey) -> AppResult<Option<T>>;

    /// Remove a single entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to remove the entry.
    async fn invalidate(&self, key: &PlanCacheKey) -> AppResult<()>;

    /// Remove every cached week belonging to a user, returning the count
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to scan or remove entries.
    async fn invalidate_user(&self, user_id: Uuid) -> AppResult<u64>;

    /// Remaining TTL for an entry, or `None` if absent or expired
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to inspect the entry.
    async fn ttl(&self, key: &PlanCacheKey) -> AppResult<Option<Duration>>;

    /// Check whether the backend is reachable and serving requests
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unhealthy.
    async fn health_check(&self) -> AppResult<()>;

    /// Remove every entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to clear its store.
    async fn clear_all(&self) -> AppResult<()>;
}
