// ABOUTME: Trailing-window analysis of activities and daily health into recovery signals
// ABOUTME: Produces training load, resting HR trend, and sleep/stress averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::training_load::TrainingLoadCalculator;
use chrono::{DateTime, Duration, Utc};
use stride_core::models::{Activity, AnalysisResults, DailyHealth};

/// Length of the trailing analysis window in days
pub const ANALYSIS_WINDOW_DAYS: u32 = 28;

/// Recent slice of the window used for sleep, stress, and the HR numerator
const RECENT_WINDOW_DAYS: i64 = 7;

/// Readings required on each side of the resting HR comparison
///
/// Below this the trend is noise: one bad night against two good ones would
/// swing the whole plan.
const MIN_HR_READINGS: usize = 3;

/// Derives recovery signals from the trailing activity and health window
///
/// Pure with respect to its inputs: the caller supplies the reference date,
/// so the same data always produces the same analysis.
pub struct ActivityAnalyzer {
    load_calculator: TrainingLoadCalculator,
}

impl Default for ActivityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityAnalyzer {
    /// Create an analyzer with the standard load windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            load_calculator: TrainingLoadCalculator::new(),
        }
    }

    /// Create an analyzer with a custom load calculator
    #[must_use]
    pub const fn with_load_calculator(load_calculator: TrainingLoadCalculator) -> Self {
        Self { load_calculator }
    }

    /// Analyze the trailing window ending at `reference_date`
    ///
    /// Activities and health entries outside the window are ignored, as are
    /// entries stamped after the reference date. Signals without enough data
    /// stay `None` rather than guessing.
    #[must_use]
    pub fn analyze(
        &self,
        activities: &[Activity],
        daily_health: &[DailyHealth],
        reference_date: DateTime<Utc>,
    ) -> AnalysisResults {
        let window_start = reference_date - Duration::days(i64::from(ANALYSIS_WINDOW_DAYS));
        let recent_cutoff = reference_date - Duration::days(RECENT_WINDOW_DAYS);

        let windowed_activities: Vec<Activity> = activities
            .iter()
            .filter(|activity| {
                activity.start_date() >= window_start && activity.start_date() <= reference_date
            })
            .cloned()
            .collect();

        let windowed_health: Vec<&DailyHealth> = daily_health
            .iter()
            .filter(|entry| entry.date >= window_start && entry.date <= reference_date)
            .collect();

        AnalysisResults {
            window_days: ANALYSIS_WINDOW_DAYS,
            training_load: self.load_calculator.calculate(&windowed_activities),
            resting_hr_trend: Self::resting_hr_trend(&windowed_health, recent_cutoff),
            sleep_quality: Self::recent_mean(&windowed_health, recent_cutoff, |entry| {
                entry.sleep_score
            }),
            stress_level: Self::recent_mean(
                &windowed_health,
                recent_cutoff,
                DailyHealth::stress_signal,
            ),
        }
    }

    /// Recent resting HR mean minus the baseline mean from earlier in the window
    ///
    /// Requires `MIN_HR_READINGS` on both sides; otherwise the comparison has
    /// nothing trustworthy to say and the trend is `None`.
    fn resting_hr_trend(health: &[&DailyHealth], recent_cutoff: DateTime<Utc>) -> Option<f64> {
        let mut recent = Vec::new();
        let mut baseline = Vec::new();
        for entry in health {
            if let Some(hr) = entry.resting_heart_rate {
                if entry.date >= recent_cutoff {
                    recent.push(f64::from(hr));
                } else {
                    baseline.push(f64::from(hr));
                }
            }
        }

        (recent.len() >= MIN_HR_READINGS && baseline.len() >= MIN_HR_READINGS)
            .then(|| Self::mean(&recent) - Self::mean(&baseline))
    }

    /// Mean of a health signal over entries at or after `recent_cutoff`
    fn recent_mean<F>(
        health: &[&DailyHealth],
        recent_cutoff: DateTime<Utc>,
        selector: F,
    ) -> Option<f64>
    where
        F: Fn(&DailyHealth) -> Option<f32>,
    {
        let values: Vec<f64> = health
            .iter()
            .filter(|entry| entry.date >= recent_cutoff)
            .filter_map(|entry| selector(entry).map(f64::from))
            .collect();

        (!values.is_empty()).then(|| Self::mean(&values))
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
