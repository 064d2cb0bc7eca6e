// ABOUTME: Persistence seams for user training settings and plan modification history
// ABOUTME: Trait definitions with in-memory implementations; real databases sit behind the same traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

/// In-memory store implementations backed by sharded concurrent maps
pub mod memory;

use async_trait::async_trait;
use stride_core::errors::AppResult;
use stride_core::models::{PlanModification, TrainingConfig};
use uuid::Uuid;

/// Read/write access to a user's training configuration
#[async_trait]
pub trait TrainingConfigStore: Send + Sync {
    /// The user's current configuration, or `None` if never set
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn get(&self, user_id: Uuid) -> AppResult<Option<TrainingConfig>>;

    /// Create or replace the user's configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn upsert(&self, user_id: Uuid, config: TrainingConfig) -> AppResult<()>;
}

/// Records of recovery-driven plan adjustments
#[async_trait]
pub trait PlanModificationStore: Send + Sync {
    /// Record a modification, replacing any prior record for the same
    /// user and week
    ///
    /// Regenerating a plan mid-week must not accumulate duplicate history
    /// rows, so the (user, week) pair is the upsert key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn upsert(&self, modification: PlanModification) -> AppResult<()>;

    /// All recorded modifications for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<PlanModification>>;
}
