// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Session/exercise/set builders and a deterministic id factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project
#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

//! Shared test utilities for `liftlog`
//!
//! Builders keep test bodies focused on the behavior under test instead of
//! the model plumbing.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use liftlog::models::{
    infer_bodyweight, MuscleContribution, WorkoutExercise, WorkoutSession, WorkoutSet,
};
use liftlog::sessions::IdFactory;

/// Fixed "now" so timestamps are reproducible
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 4, 10, 0, 0).unwrap()
}

/// Fixed "today" matching [`fixed_now`]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Deterministic id factory producing `session-1`, `exercise-1`, `set-1`, ...
#[derive(Debug, Default)]
pub struct SequentialIdFactory {
    sessions: u32,
    exercises: u32,
    sets: u32,
}

impl IdFactory for SequentialIdFactory {
    fn next_session_id(&mut self) -> String {
        self.sessions += 1;
        format!("session-{}", self.sessions)
    }

    fn next_exercise_id(&mut self) -> String {
        self.exercises += 1;
        format!("exercise-{}", self.exercises)
    }

    fn next_set_id(&mut self) -> String {
        self.sets += 1;
        format!("set-{}", self.sets)
    }
}

/// Build a set from `(reps, weight_text)`
pub fn build_set(exercise_id: &str, index: u32, reps: u32, weight: &str) -> WorkoutSet {
    WorkoutSet {
        id: format!("{exercise_id}-set-{index}"),
        exercise_id: exercise_id.to_owned(),
        set_index: index,
        reps,
        weight_text: weight.to_owned(),
        is_bodyweight: infer_bodyweight(weight),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

/// Build an exercise with plain sets and no muscle attribution
pub fn build_exercise(session_id: &str, name: &str, sets: &[(u32, &str)]) -> WorkoutExercise {
    let id = format!(
        "{session_id}-{}",
        name.to_lowercase().replace(' ', "-")
    );
    WorkoutExercise {
        sets: sets
            .iter()
            .enumerate()
            .map(|(index, (reps, weight))| build_set(&id, index as u32, *reps, weight))
            .collect(),
        id,
        session_id: session_id.to_owned(),
        name_raw: name.to_owned(),
        primary_muscle_group: None,
        muscle_contributions: None,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

/// Build an exercise with a primary muscle group
pub fn build_exercise_with_primary(
    session_id: &str,
    name: &str,
    primary: &str,
    sets: &[(u32, &str)],
) -> WorkoutExercise {
    let mut exercise = build_exercise(session_id, name, sets);
    exercise.primary_muscle_group = Some(primary.to_owned());
    exercise
}

/// Build an exercise with explicit muscle contributions
pub fn build_exercise_with_contributions(
    session_id: &str,
    name: &str,
    contributions: Vec<MuscleContribution>,
    sets: &[(u32, &str)],
) -> WorkoutExercise {
    let mut exercise = build_exercise(session_id, name, sets);
    exercise.primary_muscle_group = contributions
        .iter()
        .find(|c| c.is_direct)
        .map(|c| c.muscle_group.clone());
    exercise.muscle_contributions = Some(contributions);
    exercise
}

/// Build a session from pre-built exercises
pub fn build_session(id: &str, performed_on: &str, exercises: Vec<WorkoutExercise>) -> WorkoutSession {
    WorkoutSession {
        id: id.to_owned(),
        performed_on: date(performed_on),
        exercises,
        created_at: fixed_now(),
        updated_at: fixed_now(),
        deleted_at: None,
    }
}

/// One-exercise session shorthand
pub fn simple_session(id: &str, performed_on: &str, name: &str, sets: &[(u32, &str)]) -> WorkoutSession {
    let exercises = vec![build_exercise(id, name, sets)];
    build_session(id, performed_on, exercises)
}
