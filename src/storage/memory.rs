// ABOUTME: In-memory training config and modification stores on sharded concurrent maps
// ABOUTME: DashMap gives lock-free reads and per-shard writes without a global mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use stride_core::errors::AppResult;
use stride_core::models::{PlanModification, TrainingConfig};
use tracing::debug;
use uuid::Uuid;

use super::{PlanModificationStore, TrainingConfigStore};

/// In-memory [`TrainingConfigStore`]
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    configs: Arc<DashMap<Uuid, TrainingConfig>>,
}

impl InMemoryConfigStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrainingConfigStore for InMemoryConfigStore {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<TrainingConfig>> {
        Ok(self.configs.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, user_id: Uuid, config: TrainingConfig) -> AppResult<()> {
        self.configs.insert(user_id, config);
        debug!(%user_id, "Stored training configuration");
        Ok(())
    }
}

/// In-memory [`PlanModificationStore`] keyed by (user, week)
#[derive(Clone, Default)]
pub struct InMemoryModificationStore {
    modifications: Arc<DashMap<(Uuid, NaiveDate), PlanModification>>,
}

impl InMemoryModificationStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanModificationStore for InMemoryModificationStore {
    async fn upsert(&self, modification: PlanModification) -> AppResult<()> {
        let key = (modification.user_id, modification.week_start);
        debug!(
            user_id = %modification.user_id,
            week_start = %modification.week_start,
            "Recording plan modification"
        );
        self.modifications.insert(key, modification);
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<PlanModification>> {
        let mut records: Vec<PlanModification> = self
            .modifications
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by_key(|modification| Reverse(modification.created_at));
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stride_core::models::TrainingPhase;

    fn modification(
        user_id: Uuid,
        week_start: NaiveDate,
        adjusted_mileage: u32,
        created_hour: u32,
    ) -> PlanModification {
        PlanModification {
            id: Uuid::new_v4(),
            user_id,
            week_start,
            phase: TrainingPhase::Build,
            original_mileage: 30,
            adjusted_mileage,
            recovery_factor: 0.9,
            concerns: vec!["Sleep quality low".to_owned()],
            created_at: Utc.with_ymd_and_hms(2025, 6, 2, created_hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_upsert_replaces_same_user_and_week() {
        let store = InMemoryModificationStore::new();
        let user = Uuid::new_v4();
        let week = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        store.upsert(modification(user, week, 27, 8)).await.unwrap();
        store.upsert(modification(user, week, 24, 9)).await.unwrap();

        let records = store.list_for_user(user).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].adjusted_mileage, 24);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let store = InMemoryModificationStore::new();
        let user = Uuid::new_v4();
        let older_week = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
        let newer_week = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        store
            .upsert(modification(user, older_week, 25, 8))
            .await
            .unwrap();
        store
            .upsert(modification(user, newer_week, 27, 9))
            .await
            .unwrap();

        let records = store.list_for_user(user).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].week_start, newer_week);
        assert_eq!(records[1].week_start, older_week);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user() {
        let store = InMemoryModificationStore::new();
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();
        let week = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        store.upsert(modification(user, week, 27, 8)).await.unwrap();
        store.upsert(modification(other, week, 22, 8)).await.unwrap();

        let records = store.list_for_user(user).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, user);
    }

    #[tokio::test]
    async fn test_config_store_roundtrip_and_missing_user() {
        use stride_core::models::{GoalKind, IntensityPreference, TrainingConfig};

        let store = InMemoryConfigStore::new();
        let user = Uuid::new_v4();

        assert!(store.get(user).await.unwrap().is_none());

        let config = TrainingConfig {
            goal: GoalKind::GeneralFitness,
            goal_date: None,
            current_weekly_mileage: 25.0,
            intensity: IntensityPreference::Normal,
        };
        store.upsert(user, config.clone()).await.unwrap();

        let stored = store.get(user).await.unwrap().unwrap();
        assert!((stored.current_weekly_mileage - 25.0).abs() < f64::EPSILON);

        let updated = TrainingConfig {
            current_weekly_mileage: 30.0,
            ..config
        };
        store.upsert(user, updated).await.unwrap();
        let stored = store.get(user).await.unwrap().unwrap();
        assert!((stored.current_weekly_mileage - 30.0).abs() < f64::EPSILON);
    }
}
