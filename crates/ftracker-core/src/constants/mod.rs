// ABOUTME: Formula coefficients and report labels for workout calculations
// ABOUTME: Unit conversions plus per-activity calorie multipliers, grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Every coefficient used by the distance, speed and calorie formulas lives
//! here as a named immutable value. `CalculatorConfig::default()` is built
//! from these values.

/// Unit conversions shared by all activities
pub mod units {
    /// Average length of one step or stroke, in meters
    pub const STEP_LENGTH_METERS: f64 = 0.65;

    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Factor converting km/h into m/s
    pub const KMH_TO_MSEC: f64 = 0.278;

    /// Centimeters in one meter
    pub const CM_PER_M: f64 = 100.0;
}

/// Running calorie formula coefficients
pub mod running {
    /// Mean speed multiplier
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Average calories burned while running
    pub const CALORIE_FACTOR: f64 = 1.79;
}

/// Walking calorie formula coefficients
pub mod walking {
    /// Body weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Height term multiplier
    pub const HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula coefficients
pub mod swimming {
    /// Calories added to the mean speed before weighting
    pub const CALORIE_FACTOR: f64 = 1.1;

    /// Body weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Activity labels and report texts.
///
/// These strings are the report's established output format; consumers parse
/// them, so they must not be translated or reworded.
pub mod labels {
    /// Label selecting the running formulas
    pub const RUNNING: &str = "Бег";

    /// Label selecting the walking formulas
    pub const WALKING: &str = "Ходьба";

    /// Label selecting the swimming formulas
    pub const SWIMMING: &str = "Плавание";

    /// Returned instead of a report when the label is not recognized
    pub const UNKNOWN_ACTIVITY_MESSAGE: &str = "неизвестный тип тренировки";
}
