// ABOUTME: Training calculator computing distance, mean speed and calories per activity
// ABOUTME: Enum-dispatched summaries over running, walking and swimming formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Calculator
//!
//! All formulas are pure functions of their inputs and the calculator's
//! configuration. The calculator holds no mutable state and can be shared
//! between threads freely.
//!
//! # Example
//!
//! ```rust
//! use ftracker::calculator::TrainingCalculator;
//! use ftracker::models::{ActivityKind, TrainingSession};
//!
//! let calculator = TrainingCalculator::default();
//! let session = TrainingSession::new(1000, 1.0, 70.0);
//! let summary = calculator.summarize(&ActivityKind::Running, &session)?;
//! assert!((summary.distance_km - 0.65).abs() < 1e-12);
//! # Ok::<(), ftracker::errors::AppError>(())
//! ```

/// Activity-specific calorie formulas
pub mod calories;

use ftracker_core::config::{CalculatorConfig, ConfigError};
use ftracker_core::errors::{AppError, AppResult};
use ftracker_core::models::{ActivityKind, TrainingSession, TrainingSummary};
use tracing::debug;

/// Computes workout statistics from a validated coefficient set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingCalculator {
    config: CalculatorConfig,
}

impl TrainingCalculator {
    /// Create a calculator with custom coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the configuration fails validation
    pub fn new(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Distance in kilometers covered by `action_count` steps or strokes
    #[must_use]
    pub fn distance(&self, action_count: u32) -> f64 {
        f64::from(action_count) * self.config.units.step_length_m / self.config.units.meters_per_km
    }

    /// Mean speed in km/h over `duration_hours`
    ///
    /// A zero duration yields a speed of zero.
    #[must_use]
    pub fn mean_speed(&self, action_count: u32, duration_hours: f64) -> f64 {
        if duration_hours == 0.0 {
            return 0.0;
        }
        self.distance(action_count) / duration_hours
    }

    /// Mean swimming speed in km/h derived from pool geometry
    ///
    /// A zero duration yields a speed of zero.
    #[must_use]
    pub fn swimming_mean_speed(&self, pool_length_m: u32, pool_laps: u32, duration_hours: f64) -> f64 {
        if duration_hours == 0.0 {
            return 0.0;
        }
        f64::from(pool_length_m) * f64::from(pool_laps)
            / self.config.units.meters_per_km
            / duration_hours
    }

    /// Compute the full set of statistics for one workout
    ///
    /// Distance always comes from the action count, swimming included.
    /// Speed comes from pool geometry for swimming and from the action count
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ErrorCode::UnknownActivity` for
    /// `ActivityKind::Unknown`
    pub fn summarize(
        &self,
        activity: &ActivityKind,
        session: &TrainingSession,
    ) -> AppResult<TrainingSummary> {
        let duration = session.duration_hours;

        let (mean_speed_kmh, calories_kcal) = match activity {
            ActivityKind::Running => (
                self.mean_speed(session.action_count, duration),
                self.running_spent_calories(session.action_count, session.weight_kg, duration),
            ),
            ActivityKind::Walking => (
                self.mean_speed(session.action_count, duration),
                self.walking_spent_calories(
                    session.action_count,
                    duration,
                    session.weight_kg,
                    session.height_cm,
                ),
            ),
            ActivityKind::Swimming => (
                self.swimming_mean_speed(session.pool_length_m, session.pool_laps, duration),
                self.swimming_spent_calories(
                    session.pool_length_m,
                    session.pool_laps,
                    duration,
                    session.weight_kg,
                ),
            ),
            ActivityKind::Unknown(label) => return Err(AppError::unknown_activity(label)),
        };

        let summary = TrainingSummary {
            activity: activity.clone(),
            duration_hours: duration,
            distance_km: self.distance(session.action_count),
            mean_speed_kmh,
            calories_kcal,
        };

        debug!(
            activity = %activity,
            duration_hours = summary.duration_hours,
            distance_km = summary.distance_km,
            mean_speed_kmh = summary.mean_speed_kmh,
            calories_kcal = summary.calories_kcal,
            "Computed training summary"
        );

        Ok(summary)
    }
}
