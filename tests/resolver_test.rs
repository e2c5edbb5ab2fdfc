// ABOUTME: Integration tests for fuzzy exercise-name resolution
// ABOUTME: Covers alias fast path, similarity acceptance, and suggestion surfacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use common::simple_session;
use liftlog::intelligence::resolver::resolve_exercise;
use liftlog::models::WorkoutSession;

fn history() -> Vec<WorkoutSession> {
    vec![
        simple_session("s1", "2026-07-01", "Bench Press", &[(5, "185")]),
        simple_session("s2", "2026-07-03", "Deadlift", &[(3, "315")]),
        simple_session("s3", "2026-07-05", "Squat", &[(5, "225")]),
    ]
}

#[test]
fn test_benched_resolves_to_bench_press() {
    let result = resolve_exercise("benched", &history());
    assert_eq!(result.matched_exercise.as_deref(), Some("Bench Press"));
    assert!(result.score >= 0.5);
}

#[test]
fn test_dl_resolves_to_deadlift_via_alias_table() {
    let result = resolve_exercise("dl", &history());
    assert_eq!(result.matched_exercise.as_deref(), Some("Deadlift"));
    assert!((result.score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_exact_name_scores_full() {
    let result = resolve_exercise("Squat", &history());
    assert_eq!(result.matched_exercise.as_deref(), Some("Squat"));
    assert!((result.score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_unmatched_query_reports_suggestions() {
    let result = resolve_exercise("swimming laps", &history());
    assert_eq!(result.matched_exercise, None);
    assert!(result.score.abs() < f64::EPSILON);
    // top candidates of any score surface as suggestions
    assert_eq!(result.suggestions.len(), 3);
}

#[test]
fn test_accepted_match_surfaces_close_alternates() {
    let sessions = vec![
        simple_session("s1", "2026-07-01", "Bench Press", &[(5, "185")]),
        simple_session("s2", "2026-07-02", "Overhead Press", &[(5, "95")]),
        simple_session("s3", "2026-07-03", "Leg Press", &[(10, "300")]),
        simple_session("s4", "2026-07-04", "Squat", &[(5, "225")]),
    ];
    let result = resolve_exercise("press", &sessions);
    assert_eq!(result.matched_exercise.as_deref(), Some("Bench Press"));
    // the other press variants score 0.9; Squat scores 0 and is filtered
    assert_eq!(
        result.suggestions,
        vec!["Overhead Press".to_owned(), "Leg Press".to_owned()]
    );
}

#[test]
fn test_empty_history_never_matches() {
    let result = resolve_exercise("bench", &[]);
    assert_eq!(result.matched_exercise, None);
    assert!(result.suggestions.is_empty());
}

#[test]
fn test_deleted_sessions_are_invisible() {
    let mut session = simple_session("s1", "2026-07-01", "Bench Press", &[(5, "185")]);
    session.deleted_at = Some(common::fixed_now());
    let result = resolve_exercise("bench", &[session]);
    assert_eq!(result.matched_exercise, None);
}
