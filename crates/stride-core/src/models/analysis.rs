// ABOUTME: Analysis results derived from the 28-day activity and health window
// ABOUTME: Rolling training load plus averaged recovery indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use serde::{Deserialize, Serialize};

/// Rolling training load derived from daily mileage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadSummary {
    /// 7-day exponential moving average of daily load (fatigue)
    pub acute_load: f64,
    /// 28-day exponential moving average of daily load (fitness)
    pub chronic_load: f64,
    /// Acute:chronic ratio; `None` when chronic load is effectively zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_ratio: Option<f64>,
}

/// Derived signals from the trailing activity/health window
///
/// Recomputed per plan-generation request. Signals a provider never reported
/// stay `None` and place no constraint on the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Length of the trailing window in days
    pub window_days: u32,
    /// Rolling training load over the window
    pub training_load: TrainingLoadSummary,
    /// Recent resting HR minus baseline (BPM); positive means elevated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_hr_trend: Option<f64>,
    /// Mean sleep score over the last 7 days (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<f64>,
    /// Mean stress signal over the last 7 days (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<f64>,
}

impl AnalysisResults {
    /// An analysis with no recovery signals and zero load
    ///
    /// Useful when no window data exists; the plan generator treats it as a
    /// fully rested athlete (recovery factor 1.0).
    #[must_use]
    pub const fn baseline(window_days: u32) -> Self {
        Self {
            window_days,
            training_load: TrainingLoadSummary {
                acute_load: 0.0,
                chronic_load: 0.0,
                load_ratio: None,
            },
            resting_hr_trend: None,
            sleep_quality: None,
            stress_level: None,
        }
    }
}
