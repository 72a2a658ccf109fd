// ABOUTME: Calculator configuration holding every formula coefficient
// ABOUTME: Defaults come from the constants module; custom values are validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration
//!
//! Groups the unit conversions and per-activity multipliers used by the
//! training calculator. The default configuration reproduces the published
//! formulas exactly; a partial JSON document can override individual values.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{running, swimming, units, walking};
use crate::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a zero divisor)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration document
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string())
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Unit conversions shared by all activities
    pub units: UnitsConfig,
    /// Running calorie coefficients
    pub running: RunningConfig,
    /// Walking calorie coefficients
    pub walking: WalkingConfig,
    /// Swimming calorie coefficients
    pub swimming: SwimmingConfig,
}

/// Unit conversion factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Length of one step or stroke in meters
    pub step_length_m: f64,
    /// Meters in one kilometer
    pub meters_per_km: f64,
    /// Minutes in one hour
    pub minutes_per_hour: f64,
    /// km/h to m/s conversion factor
    pub kmh_to_msec: f64,
    /// Centimeters in one meter
    pub cm_per_m: f64,
}

/// Running calorie formula coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningConfig {
    /// Mean speed multiplier
    pub speed_multiplier: f64,
    /// Average calories burned factor
    pub calorie_factor: f64,
}

/// Walking calorie formula coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkingConfig {
    /// Body weight multiplier
    pub weight_multiplier: f64,
    /// Height term multiplier
    pub height_multiplier: f64,
}

/// Swimming calorie formula coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwimmingConfig {
    /// Calories added to the mean speed
    pub calorie_factor: f64,
    /// Body weight multiplier
    pub weight_multiplier: f64,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            step_length_m: units::STEP_LENGTH_METERS,
            meters_per_km: units::METERS_PER_KM,
            minutes_per_hour: units::MINUTES_PER_HOUR,
            kmh_to_msec: units::KMH_TO_MSEC,
            cm_per_m: units::CM_PER_M,
        }
    }
}

impl Default for RunningConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: running::SPEED_MULTIPLIER,
            calorie_factor: running::CALORIE_FACTOR,
        }
    }
}

impl Default for WalkingConfig {
    fn default() -> Self {
        Self {
            weight_multiplier: walking::WEIGHT_MULTIPLIER,
            height_multiplier: walking::HEIGHT_MULTIPLIER,
        }
    }
}

impl Default for SwimmingConfig {
    fn default() -> Self {
        Self {
            calorie_factor: swimming::CALORIE_FACTOR,
            weight_multiplier: swimming::WEIGHT_MULTIPLIER,
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON document and validate it
    ///
    /// Fields missing from the document keep their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::InvalidRange` when validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        debug!(?config, "Loaded calculator configuration");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a divisor is not positive or
    /// any coefficient is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            self.units.step_length_m,
            self.units.meters_per_km,
            self.units.minutes_per_hour,
            self.units.kmh_to_msec,
            self.units.cm_per_m,
            self.running.speed_multiplier,
            self.running.calorie_factor,
            self.walking.weight_multiplier,
            self.walking.height_multiplier,
            self.swimming.calorie_factor,
            self.swimming.weight_multiplier,
        ];
        if coefficients.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "All calculator coefficients must be finite numbers",
            ));
        }

        if self.units.step_length_m <= 0.0 {
            return Err(ConfigError::InvalidRange("Step length must be positive"));
        }

        if self.units.meters_per_km <= 0.0 {
            return Err(ConfigError::InvalidRange("Meters per km must be positive"));
        }

        if self.units.minutes_per_hour <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "Minutes per hour must be positive",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            CalculatorConfig::from_json(r#"{ "units": { "step_length_m": 0.8 } }"#).unwrap();

        assert!((config.units.step_length_m - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.running, RunningConfig::default());
        assert_eq!(config.units.meters_per_km, units::METERS_PER_KM);
    }

    #[test]
    fn test_rejects_zero_divisors() {
        let mut config = CalculatorConfig::default();
        config.units.meters_per_km = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));

        let mut config = CalculatorConfig::default();
        config.units.minutes_per_hour = -60.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = CalculatorConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_error_converts_to_app_error() {
        let error: AppError = ConfigError::InvalidRange("Step length must be positive").into();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigInvalid);
    }
}
