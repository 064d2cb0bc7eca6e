// ABOUTME: Fitness data provider seam for activity and daily health retrieval
// ABOUTME: Real platform adapters (Strava, Garmin) and the synthetic provider share one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! # Fitness Providers
//!
//! The [`FitnessProvider`] trait is the seam between the plan service and
//! whatever platform the user's data lives on. All providers return the
//! shared domain models ([`Activity`], [`DailyHealth`]) and the unified
//! `AppResult` error type, so the rest of the application never sees
//! platform-specific shapes.
//!
//! The shipped implementation is [`synthetic::SyntheticProvider`], which
//! generates deterministic seeded data. Real Strava/Garmin adapters would
//! implement the same trait; their OAuth plumbing lives outside this
//! service.

/// Deterministic seeded provider for development and testing
pub mod synthetic;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stride_core::errors::AppResult;
use stride_core::models::{Activity, DailyHealth};
use uuid::Uuid;

/// Source of a user's activity and daily health records
///
/// Implementations must be `Send + Sync` so one instance can serve
/// concurrent requests.
#[async_trait]
pub trait FitnessProvider: Send + Sync {
    /// Provider name (e.g., "garmin", "strava", "synthetic")
    fn name(&self) -> &'static str;

    /// Activities for a user within an inclusive time range
    ///
    /// # Errors
    ///
    /// Returns an error when the upstream platform cannot be reached or
    /// rejects the request.
    async fn get_activities(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Activity>>;

    /// Daily health records (resting HR, sleep, stress) for an inclusive range
    ///
    /// # Errors
    ///
    /// Returns an error when the upstream platform cannot be reached or
    /// rejects the request.
    async fn get_daily_health(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<DailyHealth>>;
}
