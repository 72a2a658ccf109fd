// ABOUTME: Data models for workout calculations
// ABOUTME: Activity kinds, training session inputs, and computed training summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity kind enumeration and label parsing
pub mod activity;

/// Training session inputs and computed summaries
pub mod training;

pub use activity::ActivityKind;
pub use training::{TrainingSession, TrainingSummary};
