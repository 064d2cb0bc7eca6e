// ABOUTME: Fitness activity model with builder and accessor methods
// ABOUTME: Normalized representation of a recorded workout from any provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SportType;

/// Represents a single fitness activity from any provider
///
/// An activity contains the essential facts about a workout: timing, distance,
/// and the performance fields the planning pipeline may consult. Fields are
/// private to ensure data integrity - use accessor methods to read and
/// `ActivityBuilder` to construct new instances. Activities are immutable once
/// fetched from a provider adapter.
///
/// # Examples
///
/// ```rust
/// use stride_core::models::{ActivityBuilder, SportType};
/// use chrono::Utc;
///
/// let activity = ActivityBuilder::new(
///     "a-100",
///     "Morning Run",
///     SportType::Run,
///     Utc::now(),
///     2400,
///     "garmin",
/// )
/// .distance_miles(5.2)
/// .average_heart_rate(148)
/// .build();
///
/// assert_eq!(activity.id(), "a-100");
/// assert_eq!(activity.distance_miles(), Some(5.2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the activity (provider-specific)
    id: String,
    /// Human-readable name/title of the activity
    name: String,
    /// Type of sport/activity (run, ride, swim, etc.)
    sport_type: SportType,
    /// When the activity started (UTC)
    start_date: DateTime<Utc>,
    /// Total duration of the activity in seconds
    duration_seconds: u64,
    /// Total distance covered in miles (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_miles: Option<f64>,
    /// Total elevation gained in feet (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    elevation_gain_feet: Option<f64>,
    /// Average heart rate during the activity (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<u32>,
    /// Maximum heart rate reached during the activity (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    max_heart_rate: Option<u32>,
    /// Average pace in seconds per mile (running activities)
    #[serde(skip_serializing_if = "Option::is_none")]
    average_pace_secs_per_mile: Option<f64>,
    /// Estimated calories burned during the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    calories: Option<u32>,
    /// Source provider of this activity data
    provider: String,
}

/// Accessor methods for Activity fields
impl Activity {
    /// Returns the unique identifier for the activity
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable name/title of the activity
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type of sport/activity
    #[must_use]
    pub const fn sport_type(&self) -> &SportType {
        &self.sport_type
    }

    /// Returns when the activity started (UTC)
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the total duration of the activity in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// Returns the total distance covered in miles (if applicable)
    #[must_use]
    pub const fn distance_miles(&self) -> Option<f64> {
        self.distance_miles
    }

    /// Returns the total elevation gained in feet (if available)
    #[must_use]
    pub const fn elevation_gain_feet(&self) -> Option<f64> {
        self.elevation_gain_feet
    }

    /// Returns the average heart rate during the activity (BPM)
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<u32> {
        self.average_heart_rate
    }

    /// Returns the maximum heart rate reached during the activity (BPM)
    #[must_use]
    pub const fn max_heart_rate(&self) -> Option<u32> {
        self.max_heart_rate
    }

    /// Returns the average pace in seconds per mile (running activities)
    #[must_use]
    pub const fn average_pace_secs_per_mile(&self) -> Option<f64> {
        self.average_pace_secs_per_mile
    }

    /// Returns the estimated calories burned during the activity
    #[must_use]
    pub const fn calories(&self) -> Option<u32> {
        self.calories
    }

    /// Returns the source provider of this activity data
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Builder for constructing `Activity` instances
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a new `ActivityBuilder` with required fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sport_type: SportType,
        start_date: DateTime<Utc>,
        duration_seconds: u64,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                name: name.into(),
                sport_type,
                start_date,
                duration_seconds,
                provider: provider.into(),
                distance_miles: None,
                elevation_gain_feet: None,
                average_heart_rate: None,
                max_heart_rate: None,
                average_pace_secs_per_mile: None,
                calories: None,
            },
        }
    }

    /// Sets the distance in miles
    #[must_use]
    pub const fn distance_miles(mut self, value: f64) -> Self {
        self.activity.distance_miles = Some(value);
        self
    }

    /// Sets the distance in miles (optional)
    #[must_use]
    pub const fn distance_miles_opt(mut self, value: Option<f64>) -> Self {
        self.activity.distance_miles = value;
        self
    }

    /// Sets the elevation gain in feet
    #[must_use]
    pub const fn elevation_gain_feet(mut self, value: f64) -> Self {
        self.activity.elevation_gain_feet = Some(value);
        self
    }

    /// Sets the elevation gain in feet (optional)
    #[must_use]
    pub const fn elevation_gain_feet_opt(mut self, value: Option<f64>) -> Self {
        self.activity.elevation_gain_feet = value;
        self
    }

    /// Sets the average heart rate in BPM
    #[must_use]
    pub const fn average_heart_rate(mut self, value: u32) -> Self {
        self.activity.average_heart_rate = Some(value);
        self
    }

    /// Sets the average heart rate in BPM (optional)
    #[must_use]
    pub const fn average_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.activity.average_heart_rate = value;
        self
    }

    /// Sets the maximum heart rate in BPM
    #[must_use]
    pub const fn max_heart_rate(mut self, value: u32) -> Self {
        self.activity.max_heart_rate = Some(value);
        self
    }

    /// Sets the maximum heart rate in BPM (optional)
    #[must_use]
    pub const fn max_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.activity.max_heart_rate = value;
        self
    }

    /// Sets the average pace in seconds per mile
    #[must_use]
    pub const fn average_pace_secs_per_mile(mut self, value: f64) -> Self {
        self.activity.average_pace_secs_per_mile = Some(value);
        self
    }

    /// Sets the average pace in seconds per mile (optional)
    #[must_use]
    pub const fn average_pace_secs_per_mile_opt(mut self, value: Option<f64>) -> Self {
        self.activity.average_pace_secs_per_mile = value;
        self
    }

    /// Sets the estimated calories burned
    #[must_use]
    pub const fn calories(mut self, value: u32) -> Self {
        self.activity.calories = Some(value);
        self
    }

    /// Sets the estimated calories burned (optional)
    #[must_use]
    pub const fn calories_opt(mut self, value: Option<u32>) -> Self {
        self.activity.calories = value;
        self
    }

    /// Consumes the builder and returns the constructed `Activity`
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
