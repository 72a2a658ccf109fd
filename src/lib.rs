// ABOUTME: Main library entry point for the ftracker workout calculator
// ABOUTME: Distance, mean speed, calorie formulas and text reports for running, walking, swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ftracker
//!
//! Workout statistics for three activity types: running, walking and
//! swimming. From an action count (steps or strokes), a duration, body
//! measurements and pool geometry the library computes distance, mean speed
//! and calories burned, and renders a short text report.
//!
//! ## Architecture
//!
//! - **calculator**: `TrainingCalculator` with the distance, speed and calorie formulas
//! - **report**: label dispatch and report rendering
//! - **training**: free-function API over the default calculator
//! - **logging**: structured logging setup with `tracing`
//!
//! Core types (errors, constants, models, configuration) live in
//! `ftracker-core` and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust
//! let report = ftracker::show_training_info(1000, "Плавание", 0.5, 70.0, 175.0, 25, 4);
//! assert!(report.contains("Сожгли калорий: 91.00"));
//! ```

/// Training calculator with distance, speed and calorie formulas
pub mod calculator;

/// Training report rendering and label dispatch
pub mod report;

/// Free-function API over the default calculator
pub mod training;

/// Structured logging configuration
pub mod logging;

pub use ftracker_core::{config, constants, errors, models};

pub use calculator::TrainingCalculator;
pub use training::{
    distance, mean_speed, running_spent_calories, show_training_info, swimming_mean_speed,
    swimming_spent_calories, walking_spent_calories,
};
