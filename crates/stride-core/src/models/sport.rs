// ABOUTME: Sport type enumeration for fitness activities
// ABOUTME: Defines supported sport types with provider-string parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of supported sport/activity types
///
/// Covers the activity types the planning pipeline cares about. The `Other`
/// variant holds provider-specific activity types that don't map to a standard
/// category; only `Run` contributes to weekly mileage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running activity
    Run,
    /// Cycling/biking activity
    Ride,
    /// Swimming activity
    Swim,
    /// Walking activity
    Walk,
    /// Hiking activity
    Hike,
    /// Weight/strength training
    StrengthTraining,
    /// Yoga practice
    Yoga,
    /// Generic workout/exercise activity
    Workout,
    /// Other activity type not covered by standard categories
    Other(String),
}

impl SportType {
    /// Map a raw provider activity-type string to a `SportType`
    ///
    /// Garmin reports lowercase snake-cased names ("running",
    /// "treadmill_running") while Strava reports CamelCase ("Run",
    /// "VirtualRun"). Anything unrecognized is preserved as `Other`.
    #[must_use]
    pub fn from_provider_string(provider_sport: &str) -> Self {
        match provider_sport {
            "Run" | "run" | "running" | "VirtualRun" | "TrailRun" | "trail_running"
            | "treadmill_running" => Self::Run,
            "Ride" | "ride" | "cycling" | "VirtualRide" | "EBikeRide" | "road_biking"
            | "mountain_biking" => Self::Ride,
            "Swim" | "swim" | "swimming" | "lap_swimming" | "open_water_swimming" => Self::Swim,
            "Walk" | "walk" | "walking" => Self::Walk,
            "Hike" | "hike" | "hiking" => Self::Hike,
            "WeightTraining" | "strength_training" => Self::StrengthTraining,
            "Yoga" | "yoga" => Self::Yoga,
            "Workout" | "workout" | "fitness_equipment" => Self::Workout,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether this activity type contributes to weekly running mileage
    #[must_use]
    pub const fn is_run(&self) -> bool {
        matches!(self, Self::Run)
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run => write!(f, "run"),
            Self::Ride => write!(f, "ride"),
            Self::Swim => write!(f, "swim"),
            Self::Walk => write!(f, "walk"),
            Self::Hike => write!(f, "hike"),
            Self::StrengthTraining => write!(f, "strength_training"),
            Self::Yoga => write!(f, "yoga"),
            Self::Workout => write!(f, "workout"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_string_mapping() {
        assert_eq!(SportType::from_provider_string("Run"), SportType::Run);
        assert_eq!(SportType::from_provider_string("running"), SportType::Run);
        assert_eq!(
            SportType::from_provider_string("treadmill_running"),
            SportType::Run
        );
        assert_eq!(SportType::from_provider_string("Ride"), SportType::Ride);
        assert_eq!(
            SportType::from_provider_string("pickleball"),
            SportType::Other("pickleball".to_owned())
        );
    }

    #[test]
    fn test_only_run_counts_toward_mileage() {
        assert!(SportType::Run.is_run());
        assert!(!SportType::Ride.is_run());
        assert!(!SportType::Other("TrailSurfing".to_owned()).is_run());
    }
}
