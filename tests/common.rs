// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging and standard workout sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::must_use_candidate, clippy::missing_panics_doc)]
//! Shared test utilities for `ftracker`

use ftracker::models::TrainingSession;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 1000 steps over one hour by a 70 kg, 175 cm athlete
pub fn one_hour_walk_or_run() -> TrainingSession {
    TrainingSession::new(1000, 1.0, 70.0).with_height(175.0)
}

/// Four lengths of a 25 m pool in half an hour by a 70 kg athlete
pub fn half_hour_swim() -> TrainingSession {
    TrainingSession::new(0, 0.5, 70.0).with_pool(25, 4)
}
