// ABOUTME: User training configuration and training phase types
// ABOUTME: Goal kind, goal date, self-reported mileage, and intensity preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-owned training configuration
///
/// Owned and mutated exclusively by the user through the settings API;
/// read-only input to the plan generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// What the user is training for
    pub goal: GoalKind,
    /// Target date for a race goal, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_date: Option<NaiveDate>,
    /// Self-reported current weekly mileage (miles)
    pub current_weekly_mileage: f64,
    /// How aggressively the plan should progress
    #[serde(default)]
    pub intensity: IntensityPreference,
}

/// What the user is training toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Training for a specific race on `goal_date`
    Race,
    /// Maintaining general fitness with no target event
    GeneralFitness,
}

/// How aggressively weekly volume should progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityPreference {
    /// Reduced volume for injury-prone or returning runners
    Conservative,
    /// Standard progression
    #[default]
    Normal,
    /// Elevated volume for experienced runners
    Aggressive,
}

/// Training phase within a goal-oriented cycle
///
/// Derived from the goal date; drives the phase multiplier applied to weekly
/// mileage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Aerobic foundation, reduced volume
    Base,
    /// Progressive volume at full load
    Build,
    /// Highest volume ahead of the taper
    Peak,
    /// Sharp volume reduction in the final weeks
    Taper,
    /// Minimal volume in the race week itself
    RaceWeek,
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Build => write!(f, "build"),
            Self::Peak => write!(f, "peak"),
            Self::Taper => write!(f, "taper"),
            Self::RaceWeek => write!(f, "race_week"),
        }
    }
}

impl fmt::Display for IntensityPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "conservative"),
            Self::Normal => write!(f, "normal"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = TrainingConfig {
            goal: GoalKind::Race,
            goal_date: NaiveDate::from_ymd_opt(2025, 10, 12),
            current_weekly_mileage: 32.0,
            intensity: IntensityPreference::Aggressive,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"race\""));
        assert!(json.contains("\"aggressive\""));

        let back: TrainingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_intensity_defaults_to_normal() {
        let json = r#"{"goal":"general_fitness","current_weekly_mileage":20.0}"#;
        let config: TrainingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.intensity, IntensityPreference::Normal);
        assert!(config.goal_date.is_none());
    }

    #[test]
    fn test_phase_display_matches_wire_format() {
        assert_eq!(TrainingPhase::RaceWeek.to_string(), "race_week");
        assert_eq!(
            serde_json::to_string(&TrainingPhase::RaceWeek).unwrap(),
            "\"race_week\""
        );
    }
}
