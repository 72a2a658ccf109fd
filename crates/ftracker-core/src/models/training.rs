// ABOUTME: Training session inputs and computed training summary
// ABOUTME: Opt-in physical input validation and the text rendering of a summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ActivityKind;
use crate::errors::{AppError, AppResult};

/// Numeric inputs of a single workout
///
/// Height is only read by the walking formula, pool dimensions only by the
/// swimming speed and calorie formulas. Unused fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Steps (running, walking) or strokes (swimming)
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body height in centimeters
    #[serde(default)]
    pub height_cm: f64,
    /// Pool length in meters
    #[serde(default)]
    pub pool_length_m: u32,
    /// Number of pool lengths swum
    #[serde(default)]
    pub pool_laps: u32,
}

impl TrainingSession {
    /// Create a session with the inputs every activity needs
    #[must_use]
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: 0.0,
            pool_length_m: 0,
            pool_laps: 0,
        }
    }

    /// Set body height (walking)
    #[must_use]
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }

    /// Set pool geometry (swimming)
    #[must_use]
    pub fn with_pool(mut self, pool_length_m: u32, pool_laps: u32) -> Self {
        self.pool_length_m = pool_length_m;
        self.pool_laps = pool_laps;
        self
    }

    /// Check that the physical inputs make sense for `activity`
    ///
    /// The formulas never call this: they accept any input and let the
    /// arithmetic propagate. Callers that want to reject implausible input
    /// before computing call it explicitly.
    ///
    /// # Errors
    ///
    /// - `ErrorCode::UnknownActivity` for `ActivityKind::Unknown`
    /// - `ErrorCode::InvalidInput` when the duration, the weight or (walking
    ///   only) the height is NaN or infinite
    /// - `ErrorCode::ValueOutOfRange` when the duration is negative, the
    ///   weight is not positive, or (walking only) the height is not positive
    pub fn validate(&self, activity: &ActivityKind) -> AppResult<()> {
        if let ActivityKind::Unknown(label) = activity {
            return Err(AppError::unknown_activity(label));
        }

        check_finite("Duration", self.duration_hours)?;
        if self.duration_hours < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "Duration must be a non-negative number of hours, got {}",
                self.duration_hours
            )));
        }

        check_finite("Weight", self.weight_kg)?;
        if self.weight_kg <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }

        if matches!(activity, ActivityKind::Walking) {
            check_finite("Height", self.height_cm)?;
            if self.height_cm <= 0.0 {
                return Err(AppError::value_out_of_range(format!(
                    "Height must be a positive number of centimeters, got {}",
                    self.height_cm
                )));
            }
        }

        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a finite number, got {value}"
        )))
    }
}

/// Computed statistics of one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Activity the statistics were computed for
    pub activity: ActivityKind,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

/// Renders the training report, one field per line, two decimals each.
impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.activity)?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_hours)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.mean_speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories_kcal)
    }
}
