// ABOUTME: Trailing average weekly running mileage with a confidence label
// ABOUTME: Monday-start week bucketing with the in-progress week excluded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashMap;
use stride_core::models::{Activity, Confidence, WeeklyMileageSummary};

/// Weeks required (with the run threshold) for a high-confidence average
const HIGH_CONFIDENCE_MIN_WEEKS: u32 = 4;
/// Runs required (with the week threshold) for a high-confidence average
const HIGH_CONFIDENCE_MIN_RUNS: u32 = 8;
/// Weeks required (with the run threshold) for a medium-confidence average
const MEDIUM_CONFIDENCE_MIN_WEEKS: u32 = 2;
/// Runs required (with the week threshold) for a medium-confidence average
const MEDIUM_CONFIDENCE_MIN_RUNS: u32 = 4;

/// Computes a trailing average weekly running mileage from raw activities
///
/// Pure calculation: deterministic for a given activity list and reference
/// date, no side effects. Malformed input (negative distances, nonsense
/// dates) is the caller's responsibility to have normalized already.
pub struct WeeklyMileageCalculator;

impl WeeklyMileageCalculator {
    /// Compute the weekly mileage summary for `activities` as of `today`
    ///
    /// The pipeline: keep only runs, bucket them into Monday-start calendar
    /// weeks, drop the week still in progress, then average the per-week
    /// distance totals. Weeks without a single run never enter the
    /// denominator, so a skipped week does not drag the average down.
    ///
    /// When no complete week contains a run, the summary reports zero mileage
    /// and zero weeks with low confidence, and `total_run_count` falls back
    /// to the number of runs seen before bucketing.
    #[must_use]
    pub fn calculate(activities: &[Activity], today: NaiveDate) -> WeeklyMileageSummary {
        let runs: Vec<&Activity> = activities
            .iter()
            .filter(|activity| activity.sport_type().is_run())
            .collect();

        let current_week = Self::week_start(today);

        let mut weekly_totals: HashMap<NaiveDate, f64> = HashMap::new();
        let mut counted_runs: u32 = 0;
        for run in &runs {
            let week = Self::week_start(run.start_date().date_naive());
            if week == current_week {
                // Week in progress; counting it as complete would understate volume
                continue;
            }
            *weekly_totals.entry(week).or_insert(0.0) += run.distance_miles().unwrap_or(0.0);
            counted_runs += 1;
        }

        if weekly_totals.is_empty() {
            return WeeklyMileageSummary {
                calculated_mileage: 0,
                weeks_analyzed: 0,
                total_run_count: u32::try_from(runs.len()).unwrap_or(u32::MAX),
                confidence: Confidence::Low,
            };
        }

        let weeks_analyzed = u32::try_from(weekly_totals.len()).unwrap_or(u32::MAX);
        let total: f64 = weekly_totals.values().sum();
        let calculated_mileage = (total / f64::from(weeks_analyzed)).round() as u32;

        WeeklyMileageSummary {
            calculated_mileage,
            weeks_analyzed,
            total_run_count: counted_runs,
            confidence: Self::confidence(weeks_analyzed, counted_runs),
        }
    }

    /// Monday of the Monday-start calendar week containing `date`
    ///
    /// Sunday belongs to the week that started six days earlier. This
    /// convention is business policy; do not substitute Sunday-start or ISO
    /// week numbering.
    #[must_use]
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date - Days::new(u64::from(date.weekday().num_days_from_monday()))
    }

    /// Rule ladder mapping data volume to a confidence label
    ///
    /// High takes precedence when both thresholds are met. The thresholds are
    /// frozen; tuning them silently would change the meaning of every stored
    /// confidence value.
    const fn confidence(weeks_analyzed: u32, total_run_count: u32) -> Confidence {
        if weeks_analyzed >= HIGH_CONFIDENCE_MIN_WEEKS
            && total_run_count >= HIGH_CONFIDENCE_MIN_RUNS
        {
            Confidence::High
        } else if weeks_analyzed >= MEDIUM_CONFIDENCE_MIN_WEEKS
            && total_run_count >= MEDIUM_CONFIDENCE_MIN_RUNS
        {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}
