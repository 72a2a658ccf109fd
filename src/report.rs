// ABOUTME: Training report rendering and label-based activity dispatch
// ABOUTME: Produces the text report or the fixed unknown-activity message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training report
//!
//! Reports never fail: an unrecognized activity label yields
//! [`UNKNOWN_ACTIVITY_MESSAGE`] instead of an error. Callers that need to
//! tell the two outcomes apart use [`TrainingCalculator::summarize`].

use ftracker_core::constants::labels::UNKNOWN_ACTIVITY_MESSAGE;
use ftracker_core::models::{ActivityKind, TrainingSession};
use tracing::warn;

use crate::calculator::TrainingCalculator;

impl TrainingCalculator {
    /// Render the training report for `activity`
    #[must_use]
    pub fn report(&self, activity: &ActivityKind, session: &TrainingSession) -> String {
        match self.summarize(activity, session) {
            Ok(summary) => summary.to_string(),
            Err(error) => {
                warn!(
                    activity = %activity,
                    code = ?error.code,
                    "No training report for unrecognized activity"
                );
                UNKNOWN_ACTIVITY_MESSAGE.to_owned()
            }
        }
    }

    /// Parse `activity_label` and render the training report
    #[must_use]
    pub fn report_for_label(&self, activity_label: &str, session: &TrainingSession) -> String {
        self.report(&ActivityKind::from_label(activity_label), session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftracker_core::constants::labels;

    #[test]
    fn test_running_report_lines() {
        let calculator = TrainingCalculator::default();
        let session = TrainingSession::new(1000, 1.0, 70.0);

        let report = calculator.report_for_label(labels::RUNNING, &session);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            [
                "Тип тренировки: Бег",
                "Длительность: 1.00 ч.",
                "Дистанция: 0.65 км.",
                "Скорость: 0.65 км/ч",
                "Сожгли калорий: 87.96",
            ]
        );
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_unknown_label_yields_message() {
        let calculator = TrainingCalculator::default();
        let session = TrainingSession::new(1000, 1.0, 70.0);

        assert_eq!(
            calculator.report_for_label("Dancing", &session),
            UNKNOWN_ACTIVITY_MESSAGE
        );
    }
}
