// ABOUTME: Free-function API over the default training calculator
// ABOUTME: Distance, speed, calorie and report functions with plain numeric arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Free-function API
//!
//! Each function uses the default coefficients. Build a
//! [`TrainingCalculator`] directly to use custom ones.

use ftracker_core::models::TrainingSession;

use crate::calculator::TrainingCalculator;

/// Distance in kilometers covered by `action_count` steps or strokes
#[must_use]
pub fn distance(action_count: u32) -> f64 {
    TrainingCalculator::default().distance(action_count)
}

/// Mean speed in km/h; zero when `duration_hours` is zero
#[must_use]
pub fn mean_speed(action_count: u32, duration_hours: f64) -> f64 {
    TrainingCalculator::default().mean_speed(action_count, duration_hours)
}

/// Mean swimming speed in km/h from pool geometry; zero when `duration_hours` is zero
#[must_use]
pub fn swimming_mean_speed(pool_length_m: u32, pool_laps: u32, duration_hours: f64) -> f64 {
    TrainingCalculator::default().swimming_mean_speed(pool_length_m, pool_laps, duration_hours)
}

/// Calories burned while running
#[must_use]
pub fn running_spent_calories(action_count: u32, weight_kg: f64, duration_hours: f64) -> f64 {
    TrainingCalculator::default().running_spent_calories(action_count, weight_kg, duration_hours)
}

/// Calories burned while walking
#[must_use]
pub fn walking_spent_calories(
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
) -> f64 {
    TrainingCalculator::default().walking_spent_calories(
        action_count,
        duration_hours,
        weight_kg,
        height_cm,
    )
}

/// Calories burned while swimming
#[must_use]
pub fn swimming_spent_calories(
    pool_length_m: u32,
    pool_laps: u32,
    duration_hours: f64,
    weight_kg: f64,
) -> f64 {
    TrainingCalculator::default().swimming_spent_calories(
        pool_length_m,
        pool_laps,
        duration_hours,
        weight_kg,
    )
}

/// Training report for `activity_label`, or the unknown-activity message
///
/// # Example
///
/// ```rust
/// let report = ftracker::show_training_info(1000, "Бег", 1.0, 70.0, 175.0, 0, 0);
/// assert!(report.starts_with("Тип тренировки: Бег\n"));
///
/// let unknown = ftracker::show_training_info(1000, "Dancing", 1.0, 70.0, 175.0, 0, 0);
/// assert_eq!(unknown, "неизвестный тип тренировки");
/// ```
#[must_use]
pub fn show_training_info(
    action_count: u32,
    activity_label: &str,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_laps: u32,
) -> String {
    let session = TrainingSession::new(action_count, duration_hours, weight_kg)
        .with_height(height_cm)
        .with_pool(pool_length_m, pool_laps);

    TrainingCalculator::default().report_for_label(activity_label, &session)
}
