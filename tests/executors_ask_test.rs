// ABOUTME: Integration tests for ask-intent execution
// ABOUTME: Covers each branch's answer text, suggestions, and delegation contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use common::{build_exercise, build_session, fixed_today, simple_session};
use liftlog::intelligence::executors::{execute_ask, AskIntent, AskOutcome, DelegationTopic};
use liftlog::models::WorkoutSession;

fn history() -> Vec<WorkoutSession> {
    vec![
        simple_session("s1", "2026-06-10", "Bench Press", &[(5, "185"), (5, "185")]),
        simple_session("s2", "2026-07-20", "Squat", &[(5, "225"), (5, "225")]),
        simple_session(
            "s3",
            "2026-08-01",
            "Bench Press",
            &[(5, "190"), (4, "195"), (5, "195")],
        ),
    ]
}

fn answer_text(outcome: &AskOutcome) -> &str {
    match outcome {
        AskOutcome::Answer(answer) => &answer.text,
        AskOutcome::Delegated(_) => panic!("expected an answer, got a delegation"),
    }
}

#[test]
fn test_last_performed_resolves_fuzzy_reference() {
    let intent: AskIntent =
        serde_json::from_str(r#"{"type":"last_performed","exercise":"benched"}"#).unwrap();
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    assert!(text.contains("Bench Press"));
    assert!(text.contains("2026-08-01"));
}

#[test]
fn test_last_sets_reports_breakdown_and_top_set() {
    let intent = AskIntent::LastSets {
        exercise: "bench".to_owned(),
    };
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    assert!(text.contains("2026-08-01"));
    assert!(text.contains("5×190"));
    // top set: 195 beats 190; within 195s, 5 reps beats 4
    assert!(text.contains("top set 5×195"));
}

#[test]
fn test_personal_record_default_metric() {
    let intent: AskIntent =
        serde_json::from_str(r#"{"type":"personal_record","exercise":"bench"}"#).unwrap();
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    assert!(text.contains("195×5"));
    assert!(text.contains("2026-08-01"));
}

#[test]
fn test_personal_record_estimated_1rm_single_rep_short_circuit() {
    let sessions = vec![simple_session("s1", "2026-08-01", "Deadlift", &[(1, "315")])];
    let intent: AskIntent = serde_json::from_str(
        r#"{"type":"personal_record","exercise":"deadlift","metric":"estimated_1rm"}"#,
    )
    .unwrap();
    let outcome = execute_ask(&intent, &sessions, fixed_today());
    // reps == 1 short-circuits the Epley formula to the raw weight
    assert!(answer_text(&outcome).contains("315"));
}

#[test]
fn test_unresolved_exercise_answers_with_suggestions() {
    let intent = AskIntent::LastPerformed {
        exercise: "underwater basket weaving".to_owned(),
    };
    let outcome = execute_ask(&intent, &history(), fixed_today());
    match outcome {
        AskOutcome::Answer(answer) => {
            assert!(answer.text.contains("couldn't find"));
            assert!(!answer.suggestions.is_empty());
        }
        AskOutcome::Delegated(_) => panic!("expected an answer"),
    }
}

#[test]
fn test_volume_summary_week_window() {
    let intent: AskIntent = serde_json::from_str(r#"{"type":"volume_summary"}"#).unwrap();
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    // only the 2026-08-01 session falls inside 2026-07-29..2026-08-04
    assert!(text.contains("1 workout days"));
    assert!(text.contains("3 sets"));
}

#[test]
fn test_volume_summary_custom_window() {
    let intent: AskIntent = serde_json::from_str(
        r#"{"type":"volume_summary","window":{"kind":"custom","start":"2026-06-01","end":"2026-06-30"}}"#,
    )
    .unwrap();
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    assert!(text.contains("1 workout days"));
    assert!(text.contains("2 sets"));
}

#[test]
fn test_last_session_summary() {
    let intent = AskIntent::LastSession;
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    assert!(text.contains("2026-08-01"));
    assert!(text.contains("1 exercises"));
    assert!(text.contains("3 sets"));
}

#[test]
fn test_recommendation_with_focus() {
    let intent: AskIntent =
        serde_json::from_str(r#"{"type":"recommendation","focus":"back"}"#).unwrap();
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    assert!(text.contains("Back"));
    assert!(text.contains("Deadlift"));
}

#[test]
fn test_alternatives_via_substitution_table() {
    let intent = AskIntent::Alternatives {
        exercise: "bench".to_owned(),
    };
    let outcome = execute_ask(&intent, &history(), fixed_today());
    match outcome {
        AskOutcome::Answer(answer) => {
            assert!(answer.text.contains("Dumbbell Bench Press"));
            assert!(answer
                .suggestions
                .contains(&"Incline Bench Press".to_owned()));
        }
        AskOutcome::Delegated(_) => panic!("expected an answer"),
    }
}

#[test]
fn test_progress_improving_trend() {
    let intent = AskIntent::Progress {
        exercise: "bench press".to_owned(),
        window_days: None,
    };
    let outcome = execute_ask(&intent, &history(), fixed_today());
    let text = answer_text(&outcome);
    // oldest best e1RM: 185×5 ≈ 215.8; newest: 195×5 = 227.5
    assert!(text.contains("improving"));
}

#[test]
fn test_progress_needs_two_records() {
    let sessions = vec![simple_session("s1", "2026-08-01", "Squat", &[(5, "225")])];
    let intent = AskIntent::Progress {
        exercise: "squat".to_owned(),
        window_days: None,
    };
    let outcome = execute_ask(&intent, &sessions, fixed_today());
    assert!(answer_text(&outcome).contains("Not enough"));
}

#[test]
fn test_general_chat_delegates_with_context() {
    let intent: AskIntent =
        serde_json::from_str(r#"{"type":"general_chat","message":"how am I doing?"}"#).unwrap();
    let outcome = execute_ask(&intent, &history(), fixed_today());
    match outcome {
        AskOutcome::Delegated(context) => {
            assert_eq!(context.topic, DelegationTopic::GeneralChat);
            assert_eq!(context.payload["message"], "how am I doing?");
            assert_eq!(context.payload["history"]["totalSessions"], 3);
        }
        AskOutcome::Answer(_) => panic!("expected a delegation"),
    }
}

#[test]
fn test_muscle_group_exercises_delegates_with_catalog() {
    let sessions = vec![build_session(
        "s1",
        "2026-08-01",
        vec![{
            let mut exercise = build_exercise("s1", "Cable Crossover", &[(12, "30")]);
            exercise.primary_muscle_group = Some("Chest".to_owned());
            exercise
        }],
    )];
    let intent: AskIntent =
        serde_json::from_str(r#"{"type":"muscle_group_exercises","muscle_group":"chest"}"#)
            .unwrap();
    let outcome = execute_ask(&intent, &sessions, fixed_today());
    match outcome {
        AskOutcome::Delegated(context) => {
            assert_eq!(context.topic, DelegationTopic::MuscleGroupExercises);
            assert_eq!(context.payload["muscleGroup"], "Chest");
            let known = context.payload["knownExercises"].as_array().unwrap();
            assert!(!known.is_empty());
            let from_history = context.payload["historyExercises"].as_array().unwrap();
            assert_eq!(from_history[0], "Cable Crossover");
        }
        AskOutcome::Answer(_) => panic!("expected a delegation"),
    }
}

#[test]
fn test_unknown_intent_type_fails_deserialization() {
    let result = serde_json::from_str::<AskIntent>(r#"{"type":"astrology_reading"}"#);
    assert!(result.is_err());
}
