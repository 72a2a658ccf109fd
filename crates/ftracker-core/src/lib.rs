// ABOUTME: Core types and constants for the ftracker workout calculator
// ABOUTME: Foundation crate with error handling, formula constants, models, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ftracker Core
//!
//! Foundation crate providing shared types and constants for the ftracker
//! workout calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients and report labels organized by domain
//! - **models**: Activity kinds, training sessions and computed summaries
//! - **config**: Calculator configuration with validation

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula constants and report labels organized by domain
pub mod constants;

/// Core data models (`ActivityKind`, `TrainingSession`, `TrainingSummary`)
pub mod models;

/// Calculator configuration (formula coefficients) with validation
pub mod config;

pub use config::{CalculatorConfig, ConfigError};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{ActivityKind, TrainingSession, TrainingSummary};
