// ABOUTME: Seeded synthetic fitness provider for development, demos, and testing
// ABOUTME: Generates a deterministic training history without OAuth or network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! # Synthetic Fitness Provider
//!
//! Generates a realistic running history and daily health record from a seed.
//! Unlike real platform adapters (Strava, Garmin), the synthetic provider:
//!
//! - Requires no OAuth authentication or network access
//! - Is fully deterministic for a given seed, user, and date
//! - Serves as the default provider for development and CI
//!
//! Every value is derived from a per-day ChaCha stream seeded by
//! `(seed, user_id, date)`, so overlapping query windows agree on the days
//! they share and repeated requests return identical data.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stride_core::errors::AppResult;
use stride_core::models::{Activity, ActivityBuilder, DailyHealth, SportType};
use tracing::debug;
use uuid::Uuid;

use super::FitnessProvider;

/// Provider name reported by [`SyntheticProvider`]
pub const PROVIDER_NAME: &str = "synthetic";

/// Seed used when the environment does not configure one
pub const DEFAULT_SEED: u64 = 42;

// Distinct ChaCha streams so activity and health values never correlate
const PROFILE_STREAM: u64 = 0;
const ACTIVITY_STREAM: u64 = 1;
const HEALTH_STREAM: u64 = 2;

// SplitMix-style spreader for day indices
const DAY_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Stable per-user traits derived from the seed
struct UserProfile {
    resting_hr_baseline: u32,
    volume_scale: f64,
}

/// Deterministic seeded fitness provider
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::{Duration, Utc};
/// use stride_coach::providers::synthetic::SyntheticProvider;
/// use stride_coach::providers::FitnessProvider;
/// use uuid::Uuid;
///
/// # async fn example() -> stride_core::errors::AppResult<()> {
/// let provider = SyntheticProvider::new(42);
/// let end = Utc::now();
/// let activities = provider
///     .get_activities(Uuid::new_v4(), end - Duration::days(28), end)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SyntheticProvider {
    seed: u64,
}

impl SyntheticProvider {
    /// Create a provider whose entire output is a function of `seed`
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn user_fold(user_id: Uuid) -> u64 {
        let bits = user_id.as_u128();
        (bits >> 64) as u64 ^ bits as u64
    }

    fn day_rng(&self, user_id: Uuid, date: NaiveDate, stream: u64) -> ChaCha8Rng {
        let day_index = u64::from(date.num_days_from_ce().unsigned_abs());
        let mut rng = ChaCha8Rng::seed_from_u64(
            self.seed ^ Self::user_fold(user_id) ^ day_index.wrapping_mul(DAY_MIX),
        );
        rng.set_stream(stream);
        rng
    }

    fn user_profile(&self, user_id: Uuid) -> UserProfile {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ Self::user_fold(user_id));
        rng.set_stream(PROFILE_STREAM);
        UserProfile {
            resting_hr_baseline: rng.gen_range(48..58),
            volume_scale: rng.gen_range(0.8..1.2),
        }
    }

    /// The run (if any) this user did on `date`
    ///
    /// Weekly pattern: easy runs Tuesday/Thursday, a quality session
    /// Wednesday, a long run Saturday, an optional recovery run Sunday,
    /// rest Monday and Friday.
    fn activity_for(&self, user_id: Uuid, date: NaiveDate) -> Option<Activity> {
        let mut rng = self.day_rng(user_id, date, ACTIVITY_STREAM);
        let profile = self.user_profile(user_id);

        let (name, miles, avg_hr) = match date.weekday() {
            Weekday::Tue | Weekday::Thu => (
                "Easy Run",
                rng.gen_range(3.5..6.0),
                rng.gen_range(135..150_u32),
            ),
            Weekday::Wed => (
                "Tempo Run",
                rng.gen_range(5.0..7.0),
                rng.gen_range(155..170_u32),
            ),
            Weekday::Sat => (
                "Long Run",
                rng.gen_range(8.0..12.0),
                rng.gen_range(140..155_u32),
            ),
            Weekday::Sun => {
                if rng.gen_bool(0.8) {
                    (
                        "Recovery Run",
                        rng.gen_range(3.0..5.0),
                        rng.gen_range(125..140_u32),
                    )
                } else {
                    return None;
                }
            }
            Weekday::Mon | Weekday::Fri => return None,
        };

        let miles = round_to_tenth(miles * profile.volume_scale);
        let pace_secs_per_mile = rng.gen_range(540.0..620.0_f64);
        let duration_seconds = (miles * pace_secs_per_mile) as u64;
        let start = date
            .and_hms_opt(rng.gen_range(6..9), rng.gen_range(0..60), 0)?
            .and_utc();

        Some(
            ActivityBuilder::new(
                format!("syn-{}-{date}", user_id.simple()),
                name,
                SportType::Run,
                start,
                duration_seconds,
                PROVIDER_NAME,
            )
            .distance_miles(miles)
            .average_heart_rate(avg_hr)
            .average_pace_secs_per_mile(round_to_tenth(pace_secs_per_mile))
            .build(),
        )
    }

    /// The wearable's daily record for `date`; every day has one
    fn daily_health_for(&self, user_id: Uuid, date: NaiveDate) -> DailyHealth {
        let mut rng = self.day_rng(user_id, date, HEALTH_STREAM);
        let profile = self.user_profile(user_id);

        let baseline = profile.resting_hr_baseline;
        DailyHealth {
            date: date.and_time(NaiveTime::MIN).and_utc(),
            resting_heart_rate: Some(rng.gen_range(baseline - 3..baseline + 4)),
            sleep_score: Some(rng.gen_range(62.0..95.0_f32).round()),
            stress_level: Some(rng.gen_range(18.0..62.0_f32).round()),
            body_battery_drain: Some(rng.gen_range(25.0..70.0_f32).round()),
            hrv_status: rng.gen_bool(0.7).then(|| "balanced".to_owned()),
            provider: PROVIDER_NAME.to_owned(),
        }
    }
}

#[async_trait]
impl FitnessProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn get_activities(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Activity>> {
        let last_day = end.date_naive();
        let activities: Vec<Activity> = start
            .date_naive()
            .iter_days()
            .take_while(|day| *day <= last_day)
            .filter_map(|day| self.activity_for(user_id, day))
            .filter(|activity| activity.start_date() >= start && activity.start_date() <= end)
            .collect();

        debug!(%user_id, count = activities.len(), "Generated synthetic activities");
        Ok(activities)
    }

    async fn get_daily_health(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<DailyHealth>> {
        let last_day = end.date_naive();
        let records: Vec<DailyHealth> = start
            .date_naive()
            .iter_days()
            .take_while(|day| *day <= last_day)
            .map(|day| self.daily_health_for(user_id, day))
            .collect();

        debug!(%user_id, count = records.len(), "Generated synthetic health records");
        Ok(records)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let end = NaiveDate::from_ymd_opt(2025, 6, 29)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        (start, end)
    }

    fn fixed_user() -> Uuid {
        Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap()
    }

    #[tokio::test]
    async fn test_repeated_requests_return_identical_data() {
        let provider = SyntheticProvider::new(7);
        let (start, end) = window();
        let user = fixed_user();

        let first = provider.get_activities(user, start, end).await.unwrap();
        let second = provider.get_activities(user, start, end).await.unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_overlapping_windows_agree_on_shared_days() {
        let provider = SyntheticProvider::new(7);
        let user = fixed_user();
        let (start, end) = window();
        let mid = start + chrono::Duration::days(10);

        let full = provider.get_activities(user, start, end).await.unwrap();
        let tail = provider.get_activities(user, mid, end).await.unwrap();

        let by_id: HashMap<&str, f64> = full
            .iter()
            .map(|a| (a.id(), a.distance_miles().unwrap()))
            .collect();
        assert!(!tail.is_empty());
        for activity in &tail {
            let full_distance = by_id[activity.id()];
            assert!((full_distance - activity.distance_miles().unwrap()).abs() < f64::EPSILON);
        }
    }

    #[tokio::test]
    async fn test_different_seeds_produce_different_histories() {
        let (start, end) = window();
        let user = fixed_user();

        let a = SyntheticProvider::new(1)
            .get_activities(user, start, end)
            .await
            .unwrap();
        let b = SyntheticProvider::new(2)
            .get_activities(user, start, end)
            .await
            .unwrap();

        assert_ne!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[tokio::test]
    async fn test_weekly_pattern_rests_monday_and_friday() {
        let provider = SyntheticProvider::new(7);
        let (start, end) = window();

        let activities = provider
            .get_activities(fixed_user(), start, end)
            .await
            .unwrap();

        // June 2025: four each of Tue/Wed/Thu/Sat plus up to four Sundays
        assert!(activities.len() >= 16 && activities.len() <= 20);
        for activity in &activities {
            let weekday = activity.start_date().date_naive().weekday();
            assert_ne!(weekday, Weekday::Mon);
            assert_ne!(weekday, Weekday::Fri);
            assert!(activity.sport_type().is_run());
            assert!(activity.start_date() >= start && activity.start_date() <= end);
            assert!(activity.distance_miles().unwrap() > 0.0);
        }
    }

    #[tokio::test]
    async fn test_health_record_for_every_day_in_window() {
        let provider = SyntheticProvider::new(7);
        let (start, end) = window();

        let records = provider
            .get_daily_health(fixed_user(), start, end)
            .await
            .unwrap();

        // Inclusive range: June 1 through June 29
        assert_eq!(records.len(), 29);
        for record in &records {
            let hr = record.resting_heart_rate.unwrap();
            assert!((40..70).contains(&hr));
            let sleep = record.sleep_score.unwrap();
            assert!((0.0..=100.0).contains(&sleep));
            let stress = record.stress_level.unwrap();
            assert!((0.0..=100.0).contains(&stress));
        }
    }

    #[tokio::test]
    async fn test_inverted_window_is_empty() {
        let provider = SyntheticProvider::new(7);
        let (start, end) = window();

        let activities = provider
            .get_activities(fixed_user(), end, start)
            .await
            .unwrap();

        assert!(activities.is_empty());
    }
}
