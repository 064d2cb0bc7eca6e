// ABOUTME: Orchestrates the training plan pipeline around the pure analytics kernel
// ABOUTME: Fetches provider data, caches generated plans, and records modifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{PlanModification, TrainingConfig, TrainingPlan, WeeklyMileageSummary};
use stride_intelligence::{
    ActivityAnalyzer, GeneratedPlan, PlanGenerator, PlanTuningConfig, WeeklyMileageCalculator,
    ANALYSIS_WINDOW_DAYS,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::{PlanCache, PlanCacheKey};
use crate::providers::FitnessProvider;
use crate::storage::{PlanModificationStore, TrainingConfigStore};

/// Weekly mileage looks back eight weeks so the confidence ladder can reach
/// its four-complete-week threshold even with the current week excluded
const MILEAGE_WINDOW_DAYS: i64 = 56;

/// Upper bound accepted for self-reported weekly mileage
const MAX_WEEKLY_MILEAGE: f64 = 300.0;

/// Orchestrates plan generation around the pure analytics kernel
///
/// All collaborators are injected at construction: the fitness provider,
/// the plan cache, and the persistence stores. The service owns no
/// computation itself; the kernel modules do the math.
pub struct PlanService<C: PlanCache> {
    provider: Arc<dyn FitnessProvider>,
    cache: C,
    config_store: Arc<dyn TrainingConfigStore>,
    modification_store: Arc<dyn PlanModificationStore>,
    analyzer: ActivityAnalyzer,
    generator: PlanGenerator,
    plan_ttl: StdDuration,
}

impl<C: PlanCache> PlanService<C> {
    /// Wire a service from its collaborators
    ///
    /// `plan_ttl` is how long a generated plan stays valid in the cache;
    /// `force_refresh` on [`Self::training_plan`] bypasses it.
    pub fn new(
        provider: Arc<dyn FitnessProvider>,
        cache: C,
        config_store: Arc<dyn TrainingConfigStore>,
        modification_store: Arc<dyn PlanModificationStore>,
        tuning: PlanTuningConfig,
        plan_ttl: StdDuration,
    ) -> Self {
        Self {
            provider,
            cache,
            config_store,
            modification_store,
            analyzer: ActivityAnalyzer::new(),
            generator: PlanGenerator::new(tuning),
            plan_ttl,
        }
    }

    /// Trailing average weekly running mileage for a user
    ///
    /// Always computed fresh from provider data; summaries are cheap and
    /// never cached.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider fetch fails.
    pub async fn weekly_mileage(&self, user_id: Uuid) -> AppResult<WeeklyMileageSummary> {
        let now = Utc::now();
        let start = now - Duration::days(MILEAGE_WINDOW_DAYS);
        let activities = self.provider.get_activities(user_id, start, now).await?;

        debug!(
            %user_id,
            activity_count = activities.len(),
            provider = self.provider.name(),
            "Calculating weekly mileage"
        );
        Ok(WeeklyMileageCalculator::calculate(
            &activities,
            now.date_naive(),
        ))
    }

    /// The user's training plan for the current week
    ///
    /// Served from cache when a fresh copy exists; `force_refresh` bypasses
    /// the cache, recomputes, and overwrites the cached entry. Any recovery
    /// modification the generator emits is upserted into the modification
    /// store keyed on (user, week).
    ///
    /// # Errors
    ///
    /// Returns `not_found` when the user has no training configuration, or
    /// an error when the provider fetch or cache access fails.
    pub async fn training_plan(
        &self,
        user_id: Uuid,
        force_refresh: bool,
    ) -> AppResult<TrainingPlan> {
        let now = Utc::now();
        let week_start = WeeklyMileageCalculator::week_start(now.date_naive());
        let key = PlanCacheKey::new(user_id, week_start);

        if !force_refresh {
            if let Some(plan) = self.cache.get::<TrainingPlan>(&key).await? {
                debug!(%user_id, %week_start, "Serving cached training plan");
                return Ok(plan);
            }
        }

        let config = self.config_store.get(user_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Training configuration for user {user_id}"))
                .with_user_id(user_id)
        })?;

        let start = now - Duration::days(i64::from(ANALYSIS_WINDOW_DAYS));
        let activities = self.provider.get_activities(user_id, start, now).await?;
        let health = self.provider.get_daily_health(user_id, start, now).await?;

        let analysis = self.analyzer.analyze(&activities, &health, now);
        let GeneratedPlan { plan, modification } =
            self.generator.generate(user_id, &config, &analysis, now);

        if let Some(modification) = modification {
            self.modification_store.upsert(modification).await?;
        }

        self.cache.set(&key, &plan, self.plan_ttl).await?;
        info!(
            %user_id,
            %week_start,
            total_miles = plan.week_summary.total_miles,
            phase = %plan.week_summary.phase,
            "Generated training plan"
        );
        Ok(plan)
    }

    /// Recorded recovery modifications for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error when the modification store cannot be read.
    pub async fn modification_history(&self, user_id: Uuid) -> AppResult<Vec<PlanModification>> {
        self.modification_store.list_for_user(user_id).await
    }

    /// The user's training configuration
    ///
    /// # Errors
    ///
    /// Returns `not_found` when the user has never saved a configuration.
    pub async fn get_config(&self, user_id: Uuid) -> AppResult<TrainingConfig> {
        self.config_store.get(user_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Training configuration for user {user_id}"))
                .with_user_id(user_id)
        })
    }

    /// Save the user's training configuration and drop their cached plans
    ///
    /// A settings change makes any cached plan stale, so every cached week
    /// for the user is invalidated.
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` or `value_out_of_range` when the
    /// configuration fails validation, or an error when the store or cache
    /// cannot be written.
    pub async fn update_config(
        &self,
        user_id: Uuid,
        config: TrainingConfig,
    ) -> AppResult<TrainingConfig> {
        validate_config(&config)?;

        self.config_store.upsert(user_id, config.clone()).await?;
        let invalidated = self.cache.invalidate_user(user_id).await?;
        debug!(%user_id, invalidated, "Training configuration updated, cached plans dropped");
        Ok(config)
    }

    /// Whether the service's collaborators are ready to serve requests
    ///
    /// # Errors
    ///
    /// Returns an error when the plan cache is unhealthy.
    pub async fn readiness(&self) -> AppResult<()> {
        self.cache.health_check().await
    }
}

fn validate_config(config: &TrainingConfig) -> AppResult<()> {
    if !config.current_weekly_mileage.is_finite() || config.current_weekly_mileage < 0.0 {
        return Err(AppError::invalid_input(
            "current_weekly_mileage must be a non-negative number",
        ));
    }
    if config.current_weekly_mileage > MAX_WEEKLY_MILEAGE {
        return Err(AppError::value_out_of_range(format!(
            "current_weekly_mileage must be at most {MAX_WEEKLY_MILEAGE}"
        )));
    }
    Ok(())
}
