// ABOUTME: Benchmark test fixtures generating realistic running histories
// ABOUTME: Deterministic index arithmetic keeps measurements reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Benchmark test fixtures for generating realistic fitness data.
//!
//! Values derive from index arithmetic rather than a RNG so repeated
//! benchmark runs see identical inputs.

use chrono::{DateTime, Duration, Utc};
use stride_core::models::{Activity, ActivityBuilder, DailyHealth, SportType};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RunBatchSize {
    /// Small history (10 runs) - quick benchmarks
    Small,
    /// Medium history (100 runs) - a committed half year of training
    Medium,
}

impl RunBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

/// Generate a deterministic batch of runs going backwards from now
#[must_use]
pub fn generate_runs(size: RunBatchSize) -> Vec<Activity> {
    let base_date = Utc::now();
    (0..size.count())
        .map(|index| generate_run(index, base_date))
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_run(index: usize, base_date: DateTime<Utc>) -> Activity {
    // Wrap within eight weeks so every batch size stays inside the
    // analysis windows the planning pipeline actually reads
    let days_ago = ((index * 2) % 56) as i64;
    let start_date = base_date - Duration::days(days_ago) - Duration::hours(7);
    let miles = 3.0 + ((index * 251) % 90) as f64 / 10.0;
    let pace_secs_per_mile = 540.0 + ((index * 17) % 80) as f64;
    let duration_seconds = (miles * pace_secs_per_mile) as u64;
    let avg_hr = 135 + ((index * 13) % 30) as u32;

    ActivityBuilder::new(
        format!("bench-run-{index}"),
        format!("Benchmark Run {index}"),
        SportType::Run,
        start_date,
        duration_seconds,
        "benchmark",
    )
    .distance_miles(miles)
    .elevation_gain_feet(((index * 31) % 500) as f64)
    .average_heart_rate(avg_hr)
    .max_heart_rate(avg_hr + 25)
    .average_pace_secs_per_mile(pace_secs_per_mile)
    .calories(((duration_seconds / 60) * 10) as u32)
    .build()
}

/// Generate one wearable health record per day going backwards from now
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
pub fn generate_daily_health(days: usize) -> Vec<DailyHealth> {
    let base_date = Utc::now();
    (0..days)
        .map(|index| DailyHealth {
            date: base_date - Duration::days(index as i64),
            resting_heart_rate: Some(50 + ((index * 7) % 6) as u32),
            sleep_score: Some(65.0 + ((index * 13) % 30) as f32),
            stress_level: Some(20.0 + ((index * 19) % 40) as f32),
            body_battery_drain: Some(30.0 + ((index * 11) % 40) as f32),
            hrv_status: (index % 3 != 0).then(|| "balanced".to_owned()),
            provider: "benchmark".to_owned(),
        })
        .collect()
}
