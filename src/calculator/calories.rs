// ABOUTME: Calorie expenditure formulas for running, walking and swimming
// ABOUTME: Each formula is independent and shares only the mean speed helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TrainingCalculator;

impl TrainingCalculator {
    /// Calories burned while running
    ///
    /// Formula: `(speed_multiplier x mean_speed x calorie_factor) x weight / 1000 x duration x 60`
    #[must_use]
    pub fn running_spent_calories(
        &self,
        action_count: u32,
        weight_kg: f64,
        duration_hours: f64,
    ) -> f64 {
        let units = &self.config.units;
        let running = &self.config.running;
        let speed = self.mean_speed(action_count, duration_hours);

        (running.speed_multiplier * speed * running.calorie_factor) * weight_kg
            / units.meters_per_km
            * duration_hours
            * units.minutes_per_hour
    }

    /// Calories burned while walking
    ///
    /// Formula: `(0.035 x weight + (speed_ms² / height x 100) x 0.029 x weight) x duration x 60`
    /// where `speed_ms` is the mean speed converted to m/s.
    ///
    /// Height is divided without a guard: a zero height yields a non-finite
    /// result. Use `TrainingSession::validate` to reject such input upfront.
    #[must_use]
    pub fn walking_spent_calories(
        &self,
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> f64 {
        let units = &self.config.units;
        let walking = &self.config.walking;
        let speed_ms = self.mean_speed(action_count, duration_hours) * units.kmh_to_msec;

        (walking.weight_multiplier * weight_kg
            + (speed_ms.powi(2) / height_cm * units.cm_per_m) * walking.height_multiplier * weight_kg)
            * duration_hours
            * units.minutes_per_hour
    }

    /// Calories burned while swimming
    ///
    /// Formula: `(swimming_mean_speed + 1.1) x 2 x weight x duration`
    #[must_use]
    pub fn swimming_spent_calories(
        &self,
        pool_length_m: u32,
        pool_laps: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> f64 {
        let swimming = &self.config.swimming;
        let speed = self.swimming_mean_speed(pool_length_m, pool_laps, duration_hours);

        (speed + swimming.calorie_factor) * swimming.weight_multiplier * weight_kg * duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_burns_nothing_running() {
        let calculator = TrainingCalculator::default();
        let calories = calculator.running_spent_calories(10_000, 80.0, 0.0);
        assert!(calories.abs() < f64::EPSILON);
    }

    #[test]
    fn test_walking_base_term_without_movement() {
        // No steps: only the weight term remains
        let calculator = TrainingCalculator::default();
        let calories = calculator.walking_spent_calories(0, 1.0, 70.0, 175.0);
        assert!((calories - 0.035 * 70.0 * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_walking_zero_height_is_not_finite() {
        let calculator = TrainingCalculator::default();
        let calories = calculator.walking_spent_calories(1000, 1.0, 70.0, 0.0);
        assert!(!calories.is_finite());
    }

    #[test]
    fn test_swimming_without_laps_keeps_base_factor() {
        let calculator = TrainingCalculator::default();
        let calories = calculator.swimming_spent_calories(25, 0, 1.0, 50.0);
        assert!((calories - 1.1 * 2.0 * 50.0).abs() < 1e-9);
    }
}
