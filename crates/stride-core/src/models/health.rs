// ABOUTME: Daily health and recovery metrics model for wellness tracking
// ABOUTME: One record per calendar day with resting HR, sleep, and stress signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily recovery and readiness metrics from a wearable provider
///
/// Providers report different subsets of these signals; all fields besides the
/// date are optional. The analyzer averages whatever is present over its
/// window and leaves missing signals as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyHealth {
    /// Date these metrics describe (midnight UTC of the day)
    pub date: DateTime<Utc>,
    /// Resting heart rate for the day (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<u32>,
    /// Sleep quality score (0-100, higher is better)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_score: Option<f32>,
    /// Stress level indicator (0-100, higher = more stress)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<f32>,
    /// Body Battery drain over the day (0-100, higher = more depletion)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_battery_drain: Option<f32>,
    /// HRV status or trend label reported by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_status: Option<String>,
    /// Provider of this health data
    pub provider: String,
}

impl DailyHealth {
    /// Best available stress signal for the day
    ///
    /// Prefers the explicit stress level; falls back to Body Battery drain,
    /// which tracks the same 0-100 depletion scale on Garmin devices.
    #[must_use]
    pub fn stress_signal(&self) -> Option<f32> {
        self.stress_level.or(self.body_battery_drain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_signal_prefers_explicit_stress() {
        let health = DailyHealth {
            date: Utc::now(),
            resting_heart_rate: Some(52),
            sleep_score: Some(80.0),
            stress_level: Some(40.0),
            body_battery_drain: Some(70.0),
            hrv_status: None,
            provider: "garmin".to_owned(),
        };
        assert_eq!(health.stress_signal(), Some(40.0));
    }

    #[test]
    fn test_stress_signal_falls_back_to_body_battery() {
        let health = DailyHealth {
            date: Utc::now(),
            resting_heart_rate: None,
            sleep_score: None,
            stress_level: None,
            body_battery_drain: Some(65.0),
            hrv_status: None,
            provider: "garmin".to_owned(),
        };
        assert_eq!(health.stress_signal(), Some(65.0));
    }
}
