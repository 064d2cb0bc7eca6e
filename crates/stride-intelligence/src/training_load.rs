// ABOUTME: Acute and chronic training load from a daily mileage series
// ABOUTME: Exponential moving averages over 7-day and 28-day windows plus their ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use stride_core::models::{Activity, TrainingLoadSummary};

/// Standard acute window, short-term fatigue
const ACUTE_WINDOW_DAYS: i64 = 7;

/// Standard chronic window, long-term fitness
const CHRONIC_WINDOW_DAYS: i64 = 28;

/// Chronic load below this means no established baseline, so no ratio
const MIN_CHRONIC_LOAD: f64 = 0.1;

/// Calculator for acute and chronic training load
pub struct TrainingLoadCalculator {
    acute_window_days: i64,
    chronic_window_days: i64,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLoadCalculator {
    /// Create a calculator with the standard 7-day and 28-day windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            acute_window_days: ACUTE_WINDOW_DAYS,
            chronic_window_days: CHRONIC_WINDOW_DAYS,
        }
    }

    /// Create a calculator with custom window sizes
    #[must_use]
    pub const fn with_windows(acute_days: i64, chronic_days: i64) -> Self {
        Self {
            acute_window_days: acute_days,
            chronic_window_days: chronic_days,
        }
    }

    /// Calculate acute load, chronic load, and their ratio from activities
    ///
    /// Daily load is the total distance covered that day across every sport
    /// that records distance. The ratio is only reported once a chronic
    /// baseline exists; a brand-new athlete has no meaningful ratio.
    #[must_use]
    pub fn calculate(&self, activities: &[Activity]) -> TrainingLoadSummary {
        let samples: Vec<(DateTime<Utc>, f64)> = activities
            .iter()
            .filter_map(|activity| {
                activity
                    .distance_miles()
                    .map(|miles| (activity.start_date(), miles))
            })
            .collect();

        if samples.is_empty() {
            return TrainingLoadSummary {
                acute_load: 0.0,
                chronic_load: 0.0,
                load_ratio: None,
            };
        }

        let acute_load = Self::calculate_ema(&samples, self.acute_window_days);
        let chronic_load = Self::calculate_ema(&samples, self.chronic_window_days);
        let load_ratio = (chronic_load > MIN_CHRONIC_LOAD).then(|| acute_load / chronic_load);

        TrainingLoadSummary {
            acute_load,
            chronic_load,
            load_ratio,
        }
    }

    /// Calculate an exponential moving average over a daily mileage series
    ///
    /// EMA formula: `EMA_today` = (`miles_today` x α) + (`EMA_yesterday` x (1 - α))
    /// where α = 2 / (N + 1) and N is the window size in days
    fn calculate_ema(samples: &[(DateTime<Utc>, f64)], window_days: i64) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }

        // Provider APIs typically return newest-first; the EMA walk needs oldest-first
        let mut sorted = samples.to_vec();
        sorted.sort_by_key(|(date, _)| *date);

        #[allow(clippy::cast_precision_loss)]
        let alpha = 2.0 / (window_days as f64 + 1.0);

        let first_date = sorted[0].0;
        let last_date = sorted[sorted.len() - 1].0;
        let days_span = (last_date - first_date).num_days();

        // Missing days carry zero load so rest days decay the average
        let mut daily_miles = HashMap::new();
        for (date, miles) in samples {
            *daily_miles.entry(date.date_naive()).or_insert(0.0) += miles;
        }

        let mut ema = 0.0;
        for day_offset in 0..=days_span {
            let current_date = first_date + Duration::days(day_offset);
            let miles = daily_miles
                .get(&current_date.date_naive())
                .copied()
                .unwrap_or(0.0);
            ema = miles.mul_add(alpha, ema * (1.0 - alpha));
        }

        ema
    }
}
