// ABOUTME: Integration tests for the training report and label dispatch
// ABOUTME: Validates the exact report text for each activity and the unknown-activity message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use ftracker::constants::labels;
use ftracker::models::ActivityKind;
use ftracker::{show_training_info, TrainingCalculator};

#[test]
fn test_running_report() {
    common::init_test_logging();
    let report = show_training_info(1000, labels::RUNNING, 1.0, 70.0, 175.0, 0, 0);

    assert_eq!(
        report,
        "Тип тренировки: Бег\n\
         Длительность: 1.00 ч.\n\
         Дистанция: 0.65 км.\n\
         Скорость: 0.65 км/ч\n\
         Сожгли калорий: 87.96\n"
    );
}

#[test]
fn test_walking_report() {
    common::init_test_logging();
    let report = show_training_info(1000, labels::WALKING, 1.0, 70.0, 175.0, 0, 0);

    assert_eq!(
        report,
        "Тип тренировки: Ходьба\n\
         Длительность: 1.00 ч.\n\
         Дистанция: 0.65 км.\n\
         Скорость: 0.65 км/ч\n\
         Сожгли калорий: 149.27\n"
    );
}

#[test]
fn test_swimming_report() {
    common::init_test_logging();
    let report = show_training_info(2000, labels::SWIMMING, 0.5, 70.0, 175.0, 25, 4);

    assert_eq!(
        report,
        "Тип тренировки: Плавание\n\
         Длительность: 0.50 ч.\n\
         Дистанция: 1.30 км.\n\
         Скорость: 0.20 км/ч\n\
         Сожгли калорий: 91.00\n"
    );
}

#[test]
fn test_zero_duration_report() {
    let report = show_training_info(5000, labels::RUNNING, 0.0, 70.0, 175.0, 0, 0);

    assert!(report.contains("Скорость: 0.00 км/ч\n"));
    assert!(report.contains("Сожгли калорий: 0.00\n"));
    assert!(report.contains("Дистанция: 3.25 км.\n"));
}

#[test]
fn test_unknown_label_returns_message() {
    common::init_test_logging();
    for (duration, weight, height, length, laps) in
        [(1.0, 70.0, 175.0, 0, 0), (0.0, 0.0, 0.0, 25, 4), (-1.0, -5.0, 1.0, 1, 1)]
    {
        assert_eq!(
            show_training_info(1000, "Dancing", duration, weight, height, length, laps),
            labels::UNKNOWN_ACTIVITY_MESSAGE
        );
    }
}

#[test]
fn test_labels_are_case_sensitive() {
    assert_eq!(
        show_training_info(1000, "бег", 1.0, 70.0, 175.0, 0, 0),
        labels::UNKNOWN_ACTIVITY_MESSAGE
    );
    assert_eq!(
        show_training_info(1000, "Running", 1.0, 70.0, 175.0, 0, 0),
        labels::UNKNOWN_ACTIVITY_MESSAGE
    );
}

#[test]
fn test_summary_display_matches_report() {
    let calculator = TrainingCalculator::default();
    let session = common::one_hour_walk_or_run();

    let summary = calculator
        .summarize(&ActivityKind::Walking, &session)
        .unwrap();

    assert_eq!(
        summary.to_string(),
        show_training_info(1000, labels::WALKING, 1.0, 70.0, 175.0, 0, 0)
    );
}

#[test]
fn test_two_decimal_ties_round_half_to_even() {
    // 0.125 and 0.625 are exact binary ties at two decimals
    let report = show_training_info(0, labels::RUNNING, 0.125, 70.0, 175.0, 0, 0);
    assert!(report.contains("Длительность: 0.12 ч.\n"), "{report}");

    let report = show_training_info(0, labels::RUNNING, 0.625, 70.0, 175.0, 0, 0);
    assert!(report.contains("Длительность: 0.62 ч.\n"), "{report}");

    let report = show_training_info(0, labels::RUNNING, 0.375, 70.0, 175.0, 0, 0);
    assert!(report.contains("Длительность: 0.38 ч.\n"), "{report}");
}
