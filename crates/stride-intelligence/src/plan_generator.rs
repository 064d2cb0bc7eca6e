// ABOUTME: Weekly training plan generation from mileage, goal, and recovery state
// ABOUTME: Phase-aware mileage targets, recovery derating, and a seven-day schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::config::PlanTuningConfig;
use crate::recovery::{RecoveryAssessment, RecoveryEvaluator};
use crate::weekly_mileage::WeeklyMileageCalculator;
use chrono::{DateTime, Days, NaiveDate, Utc};
use stride_core::models::{
    AnalysisResults, DailyWorkout, GoalKind, IntensityPreference, PlanModification, TrainingConfig,
    TrainingPhase, TrainingPlan, WeekSummary, WorkoutKind,
};
use uuid::Uuid;

/// Saturday, index into the Monday-start week
const LONG_RUN_DAY: usize = 5;

/// Wednesday, index into the Monday-start week
const QUALITY_DAY: usize = 2;

/// A generated plan plus the modification record when recovery cut the target
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    /// The weekly plan itself
    pub plan: TrainingPlan,
    /// Present only when the recovery factor reduced the mileage target
    pub modification: Option<PlanModification>,
}

/// Generates a weekly training plan for one athlete
///
/// The generator is deterministic: the same config, analysis, and timestamp
/// always produce the same plan apart from the modification record's id.
pub struct PlanGenerator {
    tuning: PlanTuningConfig,
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(PlanTuningConfig::default())
    }
}

impl PlanGenerator {
    /// Create a generator with the given tuning
    #[must_use]
    pub const fn new(tuning: PlanTuningConfig) -> Self {
        Self { tuning }
    }

    /// Generate the plan for the week containing `now`
    ///
    /// The target is the athlete's current weekly mileage scaled by the phase
    /// and intensity multipliers, then derated by the recovery factor. A
    /// modification record is produced only when the derate actually cut
    /// mileage, so an untouched plan leaves no audit trail entry.
    #[must_use]
    pub fn generate(
        &self,
        user_id: Uuid,
        config: &TrainingConfig,
        analysis: &AnalysisResults,
        now: DateTime<Utc>,
    ) -> GeneratedPlan {
        let week_start = WeeklyMileageCalculator::week_start(now.date_naive());
        let phase = Self::derive_phase(config, week_start);

        let phase_scale = self.tuning.multipliers.phase_multiplier(phase);
        let intensity_scale = self.tuning.multipliers.intensity_multiplier(config.intensity);
        let base_target =
            (config.current_weekly_mileage * phase_scale * intensity_scale).round() as u32;

        let RecoveryAssessment { factor, concerns } =
            RecoveryEvaluator::assess(analysis, &self.tuning.recovery);
        let adjusted_target = (f64::from(base_target) * factor).round() as u32;

        let modification = (factor < 1.0).then(|| PlanModification {
            id: Uuid::new_v4(),
            user_id,
            week_start,
            phase,
            original_mileage: base_target,
            adjusted_mileage: adjusted_target,
            recovery_factor: factor,
            concerns,
            created_at: now,
        });

        let schedule = self.build_schedule(week_start, adjusted_target, config.intensity);

        let plan = TrainingPlan {
            user_id,
            week_start,
            week_summary: WeekSummary {
                total_miles: adjusted_target,
                phase,
                recovery_factor: factor,
            },
            schedule,
            generated_at: now,
        };

        GeneratedPlan { plan, modification }
    }

    /// Training phase for the plan week given the athlete's goal
    ///
    /// Without a dated race the athlete sits in a steady build. A race date
    /// in the past is treated the same way; stale goals should not freeze an
    /// athlete in race week forever.
    fn derive_phase(config: &TrainingConfig, week_start: NaiveDate) -> TrainingPhase {
        match (config.goal, config.goal_date) {
            (GoalKind::Race, Some(race_date)) => Self::race_phase(race_date, week_start),
            _ => TrainingPhase::Build,
        }
    }

    /// Phase ladder counting whole weeks from the plan week to race week
    fn race_phase(race_date: NaiveDate, week_start: NaiveDate) -> TrainingPhase {
        let race_week = WeeklyMileageCalculator::week_start(race_date);
        let weeks_until = (race_week - week_start).num_weeks();
        match weeks_until {
            ..=-1 => TrainingPhase::Build,
            0 => TrainingPhase::RaceWeek,
            1..=3 => TrainingPhase::Taper,
            4..=6 => TrainingPhase::Peak,
            7..=12 => TrainingPhase::Build,
            _ => TrainingPhase::Base,
        }
    }

    /// Distribute the weekly target across seven days
    ///
    /// Worked in half-mile units so the day totals always sum back to the
    /// weekly target exactly. The long run takes its share plus any rounding
    /// remainder; a day whose share lands on zero becomes a rest day.
    fn build_schedule(
        &self,
        week_start: NaiveDate,
        total_miles: u32,
        intensity: IntensityPreference,
    ) -> Vec<DailyWorkout> {
        let policy = &self.tuning.schedule;
        let rest_indices = Self::rest_day_indices(policy.rest_days(intensity));
        let easy_day_count = 7 - rest_indices.len() as u32 - 2;

        let total_halves = total_miles * 2;
        let long_halves =
            ((f64::from(total_halves) * policy.long_run_fraction).round() as u32).min(total_halves);
        let quality_halves = ((f64::from(total_halves) * policy.quality_fraction).round() as u32)
            .min(total_halves - long_halves);
        let easy_total_halves = total_halves - long_halves - quality_halves;
        let easy_halves = easy_total_halves / easy_day_count;
        // Fold the indivisible remainder into the long run so nothing is lost
        let long_halves = long_halves + easy_total_halves % easy_day_count;

        let mut schedule = Vec::with_capacity(7);
        for offset in 0..7_u64 {
            let date = week_start + Days::new(offset);
            let index = offset as usize;
            let (kind, halves) = if rest_indices.contains(&index) {
                (WorkoutKind::Rest, 0)
            } else if index == LONG_RUN_DAY {
                (WorkoutKind::Long, long_halves)
            } else if index == QUALITY_DAY {
                (WorkoutKind::Quality, quality_halves)
            } else {
                (WorkoutKind::Easy, easy_halves)
            };

            // A workout with no distance is just a rest day
            let kind = if halves == 0 { WorkoutKind::Rest } else { kind };
            schedule.push(DailyWorkout {
                date,
                kind,
                miles: f64::from(halves) / 2.0,
                description: Self::describe(kind),
            });
        }

        schedule
    }

    /// Rest day placement for a given weekly rest count
    ///
    /// Friday rests before the Saturday long run; Monday recovers from the
    /// prior week; Sunday closes out a conservative week.
    const fn rest_day_indices(count: u8) -> &'static [usize] {
        match count {
            0 => &[],
            1 => &[4],
            2 => &[0, 4],
            _ => &[0, 4, 6],
        }
    }

    fn describe(kind: WorkoutKind) -> String {
        match kind {
            WorkoutKind::Rest => "Rest day",
            WorkoutKind::Easy => "Easy run",
            WorkoutKind::Quality => "Quality session: tempo or intervals",
            WorkoutKind::Long => "Long run",
        }
        .to_owned()
    }
}
