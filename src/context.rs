// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Wires the provider, cache, stores, and plan service from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! # Application Context
//!
//! One container owns every shared resource, built once at startup and
//! handed to the router as `Arc<AppContext>`. Handlers never construct
//! collaborators themselves; everything arrives through this struct.

use std::sync::Arc;
use std::time::Duration;

use stride_core::errors::AppResult;
use stride_intelligence::PlanTuningConfig;
use tracing::info;

use crate::cache::memory::InMemoryPlanCache;
use crate::cache::{CacheConfig, PlanCache};
use crate::config::environment::ServerConfig;
use crate::providers::synthetic::{SyntheticProvider, DEFAULT_SEED};
use crate::providers::FitnessProvider;
use crate::services::PlanService;
use crate::storage::memory::{InMemoryConfigStore, InMemoryModificationStore};
use crate::storage::{PlanModificationStore, TrainingConfigStore};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct AppContext {
    /// Plan orchestration service wired with its collaborators
    pub plan_service: Arc<PlanService<InMemoryPlanCache>>,
    /// Server configuration loaded from the environment
    pub config: Arc<ServerConfig>,
}

impl AppContext {
    /// Build the full resource graph from configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the plan cache cannot be initialized.
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let cache_config = CacheConfig {
            max_entries: config.plan_cache.max_entries,
            ..CacheConfig::default()
        };
        let cache = InMemoryPlanCache::new(cache_config).await?;

        let seed = config.provider.synthetic_seed.unwrap_or(DEFAULT_SEED);
        let provider: Arc<dyn FitnessProvider> = Arc::new(SyntheticProvider::new(seed));
        info!(provider = provider.name(), seed, "Fitness provider initialized");

        let config_store: Arc<dyn TrainingConfigStore> = Arc::new(InMemoryConfigStore::new());
        let modification_store: Arc<dyn PlanModificationStore> =
            Arc::new(InMemoryModificationStore::new());

        let plan_service = Arc::new(PlanService::new(
            provider,
            cache,
            config_store,
            modification_store,
            PlanTuningConfig::default(),
            Duration::from_secs(config.plan_cache.ttl_seconds),
        ));

        Ok(Self {
            plan_service,
            config: Arc::new(config),
        })
    }
}
