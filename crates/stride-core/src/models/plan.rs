// ABOUTME: Training plan output artifact with weekly summary and daily schedule
// ABOUTME: Includes the plan modification record written when recovery derates a week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TrainingPhase;

/// Kind of workout scheduled for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// No running
    Rest,
    /// Conversational-pace mileage
    Easy,
    /// Tempo, intervals, or hills
    Quality,
    /// The week's longest continuous run
    Long,
}

/// One day of the weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWorkout {
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Kind of session
    pub kind: WorkoutKind,
    /// Planned distance in miles (0 for rest days)
    pub miles: f64,
    /// Short human-readable description
    pub description: String,
}

/// Headline numbers for the planned week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Planned weekly total in miles, after any recovery adjustment
    pub total_miles: u32,
    /// Training phase the week falls in
    pub phase: TrainingPhase,
    /// Recovery derate applied to the base target (1.0 = none)
    pub recovery_factor: f64,
}

/// The output artifact of plan generation
///
/// Produced once per generation call; cached by the service keyed by user
/// with a time-to-live, and invalidated on explicit force-refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// User the plan belongs to
    pub user_id: Uuid,
    /// Monday of the week this plan covers
    pub week_start: NaiveDate,
    /// Headline numbers for the week
    pub week_summary: WeekSummary,
    /// Seven calendar days, Monday through Sunday
    pub schedule: Vec<DailyWorkout>,
    /// When this plan was generated
    pub generated_at: DateTime<Utc>,
}

impl TrainingPlan {
    /// Sum of the scheduled daily distances
    ///
    /// The schedule builder reconciles rounding so this matches
    /// `week_summary.total_miles` for every generated plan.
    #[must_use]
    pub fn total_scheduled_miles(&self) -> f64 {
        self.schedule.iter().map(|workout| workout.miles).sum()
    }
}

/// Record of a recovery-driven change to a planned week
///
/// Written whenever the recovery factor derates the plan below its unadjusted
/// baseline. One record per user per week: regeneration for the same week
/// replaces the existing record rather than appending a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanModification {
    /// Unique identifier for this record
    pub id: Uuid,
    /// User whose plan was modified
    pub user_id: Uuid,
    /// Monday of the week the modification applies to
    pub week_start: NaiveDate,
    /// Training phase of the affected week
    pub phase: TrainingPhase,
    /// Weekly mileage before the recovery adjustment
    pub original_mileage: u32,
    /// Weekly mileage after the recovery adjustment
    pub adjusted_mileage: u32,
    /// The multiplicative derate that was applied (< 1.0)
    pub recovery_factor: f64,
    /// Human-readable concerns that triggered the adjustment
    pub concerns: Vec<String>,
    /// When the modification was recorded
    pub created_at: DateTime<Utc>,
}
