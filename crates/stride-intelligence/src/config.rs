// ABOUTME: Tunable planning policy configuration with representative defaults
// ABOUTME: Multiplier tables, recovery thresholds and derates, schedule distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Plan Tuning Configuration
//!
//! Policy values collaborators may tune without touching the kernel: the
//! phase/intensity multiplier tables, the recovery thresholds and derates,
//! and the weekly schedule distribution. Defaults carry the values the
//! planning pipeline shipped with.
//!
//! The weekly-mileage confidence thresholds and the Monday-start week
//! convention are deliberately NOT configurable; they are frozen invariants
//! of the calculator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stride_core::models::{IntensityPreference, TrainingPhase};

/// Multiplier applied when a table carries no entry for a key
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Top-level tuning configuration for plan generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanTuningConfig {
    /// Phase and intensity multiplier tables
    pub multipliers: MultiplierConfig,
    /// Recovery concern thresholds and derates
    pub recovery: RecoveryThresholds,
    /// Weekly schedule distribution policy
    pub schedule: SchedulePolicy,
}

/// Multiplier tables keyed by training phase and intensity preference
///
/// A key absent from a table contributes [`DEFAULT_MULTIPLIER`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Weekly-volume multiplier per training phase
    pub phase: HashMap<TrainingPhase, f64>,
    /// Weekly-volume multiplier per intensity preference
    pub intensity: HashMap<IntensityPreference, f64>,
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self {
            phase: HashMap::from([
                (TrainingPhase::Base, 0.85),
                (TrainingPhase::Build, 1.0),
                (TrainingPhase::Peak, 1.1),
                (TrainingPhase::Taper, 0.6),
                (TrainingPhase::RaceWeek, 0.3),
            ]),
            intensity: HashMap::from([
                (IntensityPreference::Conservative, 0.85),
                (IntensityPreference::Normal, 1.0),
                (IntensityPreference::Aggressive, 1.15),
            ]),
        }
    }
}

impl MultiplierConfig {
    /// Multiplier for a training phase, defaulting when unconfigured
    #[must_use]
    pub fn phase_multiplier(&self, phase: TrainingPhase) -> f64 {
        self.phase.get(&phase).copied().unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Multiplier for an intensity preference, defaulting when unconfigured
    #[must_use]
    pub fn intensity_multiplier(&self, intensity: IntensityPreference) -> f64 {
        self.intensity
            .get(&intensity)
            .copied()
            .unwrap_or(DEFAULT_MULTIPLIER)
    }
}

/// Thresholds that trigger recovery concerns, and the derate each applies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryThresholds {
    /// Resting HR this many BPM over baseline is a concern
    pub resting_hr_elevated_bpm: f64,
    /// Sleep quality below this score (0-100) is a concern
    pub sleep_quality_floor: f64,
    /// Stress above this level (0-100) is a concern
    pub stress_ceiling: f64,
    /// Acute:chronic load ratio above this is a concern
    pub load_ratio_ceiling: f64,
    /// Derate applied for an elevated resting HR
    pub resting_hr_derate: f64,
    /// Derate applied for poor sleep
    pub sleep_derate: f64,
    /// Derate applied for high stress
    pub stress_derate: f64,
    /// Derate applied for an elevated load ratio
    pub load_derate: f64,
    /// Stacked derates never reduce the plan below this factor
    pub min_recovery_factor: f64,
}

impl Default for RecoveryThresholds {
    fn default() -> Self {
        Self {
            resting_hr_elevated_bpm: 5.0,
            sleep_quality_floor: 60.0,
            stress_ceiling: 75.0,
            load_ratio_ceiling: 1.3,
            resting_hr_derate: 0.90,
            sleep_derate: 0.90,
            stress_derate: 0.95,
            load_derate: 0.90,
            min_recovery_factor: 0.60,
        }
    }
}

/// Weekly schedule distribution policy
///
/// Presentation-layer defaults: how the adjusted weekly total is spread over
/// the seven days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// Fraction of weekly miles assigned to the long run
    pub long_run_fraction: f64,
    /// Fraction of weekly miles assigned to the quality session
    pub quality_fraction: f64,
    /// Rest days per week for conservative runners
    pub conservative_rest_days: u8,
    /// Rest days per week for normal progression
    pub normal_rest_days: u8,
    /// Rest days per week for aggressive runners
    pub aggressive_rest_days: u8,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            long_run_fraction: 0.30,
            quality_fraction: 0.20,
            conservative_rest_days: 3,
            normal_rest_days: 2,
            aggressive_rest_days: 1,
        }
    }
}

impl SchedulePolicy {
    /// Rest days per week for an intensity preference
    #[must_use]
    pub const fn rest_days(&self, intensity: IntensityPreference) -> u8 {
        match intensity {
            IntensityPreference::Conservative => self.conservative_rest_days,
            IntensityPreference::Normal => self.normal_rest_days,
            IntensityPreference::Aggressive => self.aggressive_rest_days,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers_match_shipped_tables() {
        let config = MultiplierConfig::default();
        assert!((config.phase_multiplier(TrainingPhase::Taper) - 0.6).abs() < f64::EPSILON);
        assert!((config.phase_multiplier(TrainingPhase::RaceWeek) - 0.3).abs() < f64::EPSILON);
        assert!(
            (config.intensity_multiplier(IntensityPreference::Aggressive) - 1.15).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_missing_table_entry_defaults_to_one() {
        let config = MultiplierConfig {
            phase: HashMap::new(),
            intensity: HashMap::new(),
        };
        assert!((config.phase_multiplier(TrainingPhase::Peak) - 1.0).abs() < f64::EPSILON);
        assert!(
            (config.intensity_multiplier(IntensityPreference::Normal) - 1.0).abs() < f64::EPSILON
        );
    }

    #[test]
    fn test_tuning_config_round_trips_through_json() {
        let config = PlanTuningConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PlanTuningConfig = serde_json::from_str(&json).unwrap();
        assert!(
            (back.multipliers.phase_multiplier(TrainingPhase::Base) - 0.85).abs() < f64::EPSILON
        );
        assert!((back.recovery.min_recovery_factor - 0.60).abs() < f64::EPSILON);
    }
}
