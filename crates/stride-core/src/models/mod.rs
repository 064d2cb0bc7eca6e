// ABOUTME: Core data models and types for the Stride Coach service
// ABOUTME: Re-exports Activity, DailyHealth, TrainingConfig, TrainingPlan and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! # Data Models
//!
//! Core data structures used throughout the Stride Coach service. These models
//! provide a unified representation of fitness data from providers like Garmin
//! and Strava, plus the derived artifacts the planning pipeline produces.
//!
//! ## Design Principles
//!
//! - **Provider Agnostic**: models abstract away provider-specific differences
//! - **Extensible**: optional fields accommodate different provider capabilities
//! - **Serializable**: all models support JSON serialization for the REST API

// Domain modules
mod activity;
mod analysis;
mod health;
mod mileage;
mod plan;
mod sport;
mod training;

// Re-export all public types for convenience
// Activity domain
pub use activity::{Activity, ActivityBuilder};

// Sport types
pub use sport::SportType;

// Health domain
pub use health::DailyHealth;

// Derived mileage summary
pub use mileage::{Confidence, WeeklyMileageSummary};

// Analysis window results
pub use analysis::{AnalysisResults, TrainingLoadSummary};

// Training configuration domain
pub use training::{GoalKind, IntensityPreference, TrainingConfig, TrainingPhase};

// Plan domain
pub use plan::{DailyWorkout, PlanModification, TrainingPlan, WeekSummary, WorkoutKind};
