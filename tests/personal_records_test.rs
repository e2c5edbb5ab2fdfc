// ABOUTME: Integration tests for personal-record derivation
// ABOUTME: Covers weight/rep tie-breaks and weight-text parsing behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use common::{date, simple_session};
use liftlog::intelligence::personal_records::{calculate_personal_records, personal_record_for};

#[test]
fn test_equal_weight_higher_reps_wins() {
    let sessions = vec![
        simple_session("s1", "2026-07-01", "Bench Press", &[(4, "205")]),
        simple_session("s2", "2026-07-08", "Bench Press", &[(5, "205")]),
    ];
    let record = personal_record_for(&sessions, "Bench Press").unwrap();
    assert!((record.max_weight - 205.0).abs() < f64::EPSILON);
    assert_eq!(record.reps, 5);
    assert_eq!(record.date, date("2026-07-08"));
}

#[test]
fn test_higher_weight_beats_higher_reps() {
    let sessions = vec![
        simple_session("s1", "2026-07-01", "Bench Press", &[(5, "195")]),
        simple_session("s2", "2026-07-08", "Bench Press", &[(3, "205")]),
    ];
    let record = personal_record_for(&sessions, "Bench Press").unwrap();
    assert!((record.max_weight - 205.0).abs() < f64::EPSILON);
    assert_eq!(record.reps, 3);
}

#[test]
fn test_weight_parsing_strips_units() {
    let sessions = vec![simple_session(
        "s1",
        "2026-07-01",
        "Deadlift",
        &[(3, "315 lbs"), (1, "140kg")],
    )];
    let record = personal_record_for(&sessions, "Deadlift").unwrap();
    // "315 lbs" parses to 315; "140kg" parses to 140
    assert!((record.max_weight - 315.0).abs() < f64::EPSILON);
}

#[test]
fn test_unparsable_weight_counts_as_zero() {
    let sessions = vec![simple_session(
        "s1",
        "2026-07-01",
        "Pull-Up",
        &[(12, "bodyweight"), (8, "25")],
    )];
    let record = personal_record_for(&sessions, "Pull-Up").unwrap();
    assert!((record.max_weight - 25.0).abs() < f64::EPSILON);
    assert_eq!(record.reps, 8);
}

#[test]
fn test_records_cover_each_distinct_exercise() {
    let sessions = vec![
        simple_session("s1", "2026-07-01", "Bench Press", &[(5, "185")]),
        simple_session("s2", "2026-07-02", "bench  press!", &[(3, "200")]),
        simple_session("s3", "2026-07-03", "Squat", &[(5, "225")]),
    ];
    let records = calculate_personal_records(&sessions);
    assert_eq!(records.len(), 2);
    // name normalization folds "bench  press!" into the same record
    let bench = records
        .iter()
        .find(|r| r.exercise.to_lowercase().contains("bench"))
        .unwrap();
    assert!((bench.max_weight - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_history_has_no_records() {
    assert!(calculate_personal_records(&[]).is_empty());
    assert!(personal_record_for(&[], "Bench Press").is_none());
}
