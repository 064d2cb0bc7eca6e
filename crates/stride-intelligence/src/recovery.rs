// ABOUTME: Recovery assessment turning analysis signals into a mileage derate factor
// ABOUTME: Each flagged concern scales the factor down multiplicatively, with a floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use crate::config::RecoveryThresholds;
use stride_core::models::AnalysisResults;

/// Outcome of a recovery assessment
#[derive(Debug, Clone)]
pub struct RecoveryAssessment {
    /// Multiplier in (0, 1] applied to the weekly mileage target
    pub factor: f64,
    /// Specific signals that pulled the factor below 1.0
    pub concerns: Vec<String>,
}

/// Evaluates recovery signals into a single mileage derate factor
///
/// Signals the analysis could not compute place no constraint: an athlete
/// without a sleep tracker is not penalized for the missing data.
pub struct RecoveryEvaluator;

impl RecoveryEvaluator {
    /// Assess recovery from the analysis window against the given thresholds
    ///
    /// The derates compound, so an athlete failing every check lands well
    /// below any single derate, but never below the configured floor. A plan
    /// cut harder than the floor stops being training.
    #[must_use]
    pub fn assess(
        analysis: &AnalysisResults,
        thresholds: &RecoveryThresholds,
    ) -> RecoveryAssessment {
        let mut factor = 1.0;
        let mut concerns = Vec::new();

        // Check for elevated resting heart rate
        if let Some(trend) = analysis.resting_hr_trend {
            if trend > thresholds.resting_hr_elevated_bpm {
                factor *= thresholds.resting_hr_derate;
                concerns.push(format!(
                    "Resting heart rate elevated ({trend:+.0} bpm over baseline)"
                ));
            }
        }

        // Check for poor sleep
        if let Some(sleep) = analysis.sleep_quality {
            if sleep < thresholds.sleep_quality_floor {
                factor *= thresholds.sleep_derate;
                concerns.push(format!(
                    "Sleep quality low (averaging {sleep:.0} over the last week)"
                ));
            }
        }

        // Check for sustained high stress
        if let Some(stress) = analysis.stress_level {
            if stress > thresholds.stress_ceiling {
                factor *= thresholds.stress_derate;
                concerns.push(format!(
                    "Stress level high (averaging {stress:.0} over the last week)"
                ));
            }
        }

        // Check for an acute load spike over the chronic baseline
        if let Some(ratio) = analysis.training_load.load_ratio {
            if ratio > thresholds.load_ratio_ceiling {
                factor *= thresholds.load_derate;
                concerns.push(format!(
                    "Acute training load spike ({ratio:.2}x chronic baseline)"
                ));
            }
        }

        RecoveryAssessment {
            factor: factor.max(thresholds.min_recovery_factor),
            concerns,
        }
    }
}
