// ABOUTME: Training analytics kernel for the Stride Coach platform
// ABOUTME: Pure calculation modules with no I/O, invoked once per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! The deterministic analytics kernel behind Stride Coach. Every entry point
//! here is a pure function of its inputs (activity lists, health records, user
//! configuration, and a reference date) - no I/O, no shared mutable state, no
//! internal concurrency. The surrounding service layer owns fetching,
//! caching, and persistence.
//!
//! ## Modules
//!
//! - **`weekly_mileage`**: trailing average weekly running mileage with a
//!   confidence label
//! - **`training_load`**: acute/chronic exponential moving averages of daily
//!   load
//! - **`analyzer`**: derives [`stride_core::models::AnalysisResults`] from the
//!   28-day activity and health window
//! - **`recovery`**: turns analysis signals into a plan derate with concerns
//! - **`plan_generator`**: phase-aware weekly plan with a day-by-day schedule
//! - **`config`**: tunable multiplier tables, recovery thresholds, and
//!   schedule policy

/// Derives analysis results from the trailing activity/health window
pub mod analyzer;

/// Tunable policy: multiplier tables, recovery thresholds, schedule shape
pub mod config;

/// Recovery-adjusted weekly plan generation
pub mod plan_generator;

/// Recovery assessment from analysis signals
pub mod recovery;

/// Acute and chronic training load from daily mileage
pub mod training_load;

/// Trailing average weekly mileage with confidence
pub mod weekly_mileage;

pub use analyzer::{ActivityAnalyzer, ANALYSIS_WINDOW_DAYS};
pub use config::{
    MultiplierConfig, PlanTuningConfig, RecoveryThresholds, SchedulePolicy, DEFAULT_MULTIPLIER,
};
pub use plan_generator::{GeneratedPlan, PlanGenerator};
pub use recovery::{RecoveryAssessment, RecoveryEvaluator};
pub use training_load::TrainingLoadCalculator;
pub use weekly_mileage::WeeklyMileageCalculator;
