// ABOUTME: Activity kind enumeration for workout calculations
// ABOUTME: Maps report labels to running, walking, swimming, or an unknown activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::labels;

/// Enumeration of supported activity types
///
/// Labels are matched exactly and case-sensitively. Anything else becomes
/// `Unknown`, which keeps the original label for logging and error messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Running: step-based distance and speed
    Running,
    /// Walking: step-based distance and speed, height-aware calories
    Walking,
    /// Swimming: step-based distance, pool-based speed
    Swimming,
    /// Label that matches none of the recognized activities
    Unknown(String),
}

impl ActivityKind {
    /// Parse an activity label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            labels::RUNNING => Self::Running,
            labels::WALKING => Self::Walking,
            labels::SWIMMING => Self::Swimming,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Report label for this activity
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Running => labels::RUNNING,
            Self::Walking => labels::WALKING,
            Self::Swimming => labels::SWIMMING,
            Self::Unknown(label) => label,
        }
    }
}

impl From<&str> for ActivityKind {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
