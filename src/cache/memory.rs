// ABOUTME: In-memory plan cache with LRU eviction and per-entry TTL
// ABOUTME: Runs an optional background task that sweeps expired entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::{Deserialize, Serialize};
use stride_core::errors::AppResult;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, trace};
use uuid::Uuid;

use super::{CacheConfig, PlanCache, PlanCacheKey};

/// Fallback capacity when the configured `max_entries` is zero
const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

type SharedStore = Arc<RwLock<LruCache<String, CacheEntry>>>;

/// A serialized value with its expiry deadline
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn remaining_ttl(&self) -> Option<Duration> {
        let now = Instant::now();
        if now < self.expires_at {
            Some(self.expires_at - now)
        } else {
            None
        }
    }
}

/// In-memory [`PlanCache`] backend
///
/// Entries are evicted least-recently-used once `max_entries` is reached,
/// and expired entries are dropped lazily on access plus periodically by a
/// background sweep task.
#[derive(Clone)]
pub struct InMemoryPlanCache {
    store: SharedStore,
    shutdown_tx: Option<Arc<mpsc::Sender<()>>>,
}

impl InMemoryPlanCache {
    fn spawn_cleanup_task(store: &SharedStore, cleanup_interval: Duration) -> mpsc::Sender<()> {
        let (tx, mut rx) = mpsc::channel(1);
        let store = Arc::clone(store);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(cleanup_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let removed = Self::cleanup_expired(&store).await;
                        if removed > 0 {
                            debug!(removed, "Swept expired plan cache entries");
                        }
                    }
                    _ = rx.recv() => {
                        debug!("Plan cache cleanup task shutting down");
                        break;
                    }
                }
            }
        });
        tx
    }

    async fn cleanup_expired(store: &SharedStore) -> usize {
        let mut store = store.write().await;
        let expired: Vec<String> = store
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        let removed = expired.len();
        for key in &expired {
            store.pop(key);
        }
        removed
    }
}

#[async_trait::async_trait]
impl PlanCache for InMemoryPlanCache {
    async fn new(config: CacheConfig) -> AppResult<Self> {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(DEFAULT_CACHE_CAPACITY);
        let store = Arc::new(RwLock::new(LruCache::new(capacity)));

        let shutdown_tx = if config.enable_background_cleanup {
            let tx = Self::spawn_cleanup_task(&store, config.cleanup_interval);
            Some(Arc::new(tx))
        } else {
            None
        };

        debug!(
            max_entries = config.max_entries,
            background_cleanup = config.enable_background_cleanup,
            "In-memory plan cache initialized"
        );

        Ok(Self { store, shutdown_tx })
    }

    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &PlanCacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let data = serde_json::to_vec(value)?;
        let entry = CacheEntry::new(data, ttl);
        let cache_key = key.to_string();

        let mut store = self.store.write().await;
        trace!(key = %cache_key, ttl_secs = ttl.as_secs(), "Storing plan cache entry");
        store.put(cache_key, entry);
        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &PlanCacheKey) -> AppResult<Option<T>> {
        let cache_key = key.to_string();
        let mut store = self.store.write().await;

        match store.get(&cache_key) {
            Some(entry) if !entry.is_expired() => {
                let value = serde_json::from_slice(&entry.data)?;
                trace!(key = %cache_key, "Plan cache hit");
                Ok(Some(value))
            }
            Some(_) => {
                // Expired entries are dropped on access rather than waiting
                // for the background sweep
                store.pop(&cache_key);
                trace!(key = %cache_key, "Plan cache entry expired");
                Ok(None)
            }
            None => {
                trace!(key = %cache_key, "Plan cache miss");
                Ok(None)
            }
        }
    }

    async fn invalidate(&self, key: &PlanCacheKey) -> AppResult<()> {
        let cache_key = key.to_string();
        let mut store = self.store.write().await;
        store.pop(&cache_key);
        trace!(key = %cache_key, "Plan cache entry invalidated");
        Ok(())
    }

    async fn invalidate_user(&self, user_id: Uuid) -> AppResult<u64> {
        let prefix = PlanCacheKey::user_prefix(user_id);
        let mut store = self.store.write().await;

        let matching: Vec<String> = store
            .iter()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(&prefix))
            .cloned()
            .collect();
        for key in &matching {
            store.pop(key);
        }

        let removed = matching.len() as u64;
        debug!(%user_id, removed, "Invalidated cached plans for user");
        Ok(removed)
    }

    async fn ttl(&self, key: &PlanCacheKey) -> AppResult<Option<Duration>> {
        let store = self.store.read().await;
        Ok(store.peek(&key.to_string()).and_then(CacheEntry::remaining_ttl))
    }

    async fn health_check(&self) -> AppResult<()> {
        let store = self.store.read().await;
        trace!(entries = store.len(), "Plan cache healthy");
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        let mut store = self.store.write().await;
        store.clear();
        debug!("Plan cache cleared");
        Ok(())
    }
}

impl Drop for InMemoryPlanCache {
    fn drop(&mut self) {
        // Capacity-1 channel: the first drop signals the cleanup task, later
        // clones find the channel full and skip it
        if let Some(tx) = &self.shutdown_tx {
            if tx.try_send(()).is_err() {
                trace!("Plan cache cleanup task already signaled to stop");
            }
        }
    }
}
