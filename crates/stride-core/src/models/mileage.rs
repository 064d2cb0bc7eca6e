// ABOUTME: Derived weekly mileage summary with confidence label
// ABOUTME: Ephemeral output of the weekly mileage calculator, recomputed per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use serde::{Deserialize, Serialize};

/// Qualitative reliability label for a computed mileage average
///
/// Driven purely by data volume: how many complete weeks and how many runs
/// backed the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// At least 4 complete weeks and 8 runs
    High,
    /// At least 2 complete weeks and 4 runs
    Medium,
    /// Anything less
    Low,
}

/// Trailing average weekly running mileage with supporting counts
///
/// Derived and ephemeral: recomputed on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMileageSummary {
    /// Rounded average of complete-week mileage totals
    pub calculated_mileage: u32,
    /// Count of complete weeks containing at least one run
    pub weeks_analyzed: u32,
    /// Number of runs behind the average
    pub total_run_count: u32,
    /// Reliability of the average given the data volume
    pub confidence: Confidence,
}
