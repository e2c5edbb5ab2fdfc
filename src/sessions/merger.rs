// ABOUTME: Merges newly parsed exercises into existing sessions by exact date
// ABOUTME: Builds WorkoutExercise/WorkoutSet pairs with ids from injected factories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Session Merger
//!
//! Groups parsed exercises by exact calendar date and merges them into the
//! session list: an existing session with the same `performed_on` receives
//! the new exercises on a copy, anything else gets a fresh session. Ids come
//! from an injected factory so tests can be deterministic.

use chrono::{DateTime, NaiveDate, Utc};
use liftlog_core::models::{
    infer_bodyweight, ParsedExercise, WorkoutExercise, WorkoutSession, WorkoutSet,
};
use tracing::debug;
use uuid::Uuid;

/// Id source for sessions, exercises, and sets created during a merge.
///
/// Injected so tests can substitute a sequential factory and assert exact
/// ids.
pub trait IdFactory {
    /// Id for a newly created session
    fn next_session_id(&mut self) -> String;
    /// Id for a newly created exercise
    fn next_exercise_id(&mut self) -> String;
    /// Id for a newly created set
    fn next_set_id(&mut self) -> String;
}

/// Production id factory backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdFactory;

impl IdFactory for UuidIdFactory {
    fn next_session_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }

    fn next_exercise_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }

    fn next_set_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Build the owned exercise/set pair for one parsed record
fn build_exercise(
    parsed: &ParsedExercise,
    session_id: &str,
    ids: &mut dyn IdFactory,
    now: DateTime<Utc>,
) -> WorkoutExercise {
    let exercise_id = ids.next_exercise_id();
    let sets = (0..parsed.sets)
        .map(|index| {
            let weight_text = parsed
                .weights
                .as_ref()
                .and_then(|w| w.get(index as usize))
                .cloned()
                .unwrap_or_else(|| "0".to_owned());
            WorkoutSet {
                id: ids.next_set_id(),
                exercise_id: exercise_id.clone(),
                set_index: index,
                reps: parsed
                    .reps
                    .as_ref()
                    .and_then(|r| r.get(index as usize))
                    .copied()
                    .unwrap_or(0),
                is_bodyweight: infer_bodyweight(&weight_text),
                weight_text,
                created_at: now,
                updated_at: now,
            }
        })
        .collect();

    WorkoutExercise {
        id: exercise_id,
        session_id: session_id.to_owned(),
        name_raw: parsed.exercise.clone(),
        primary_muscle_group: parsed.primary_muscle_group.clone(),
        // Verbatim pass-through: absence must survive as absence
        muscle_contributions: parsed.muscle_contributions.clone(),
        sets,
        created_at: now,
        updated_at: now,
    }
}

/// Merge parsed exercises into the session list by exact date.
///
/// Returns a new list: the `existing` slice and the sessions inside it are
/// never mutated. Exercises sharing a date merge into one session in input
/// order; dates without a live session get a new one, created in
/// first-appearance order. Soft-deleted sessions never receive merges.
#[must_use]
pub fn merge_exercises_into_sessions(
    existing: &[WorkoutSession],
    parsed: &[ParsedExercise],
    ids: &mut dyn IdFactory,
    now: DateTime<Utc>,
) -> Vec<WorkoutSession> {
    let mut result: Vec<WorkoutSession> = existing.to_vec();

    // Group by exact date, preserving input order within and across groups
    let mut groups: Vec<(NaiveDate, Vec<&ParsedExercise>)> = Vec::new();
    for record in parsed {
        match groups.iter_mut().find(|(date, _)| *date == record.date) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.date, vec![record])),
        }
    }

    for (date, members) in groups {
        let target = result
            .iter()
            .position(|s| s.performed_on == date && !s.is_deleted());
        match target {
            Some(index) => {
                let session_id = result[index].id.clone();
                let new_exercises: Vec<WorkoutExercise> = members
                    .iter()
                    .map(|record| build_exercise(record, &session_id, ids, now))
                    .collect();
                let session = &mut result[index];
                session.exercises.extend(new_exercises);
                session.updated_at = now;
                debug!(%date, session_id = %session.id, added = members.len(), "merged into existing session");
            }
            None => {
                let session_id = ids.next_session_id();
                let exercises: Vec<WorkoutExercise> = members
                    .iter()
                    .map(|record| build_exercise(record, &session_id, ids, now))
                    .collect();
                debug!(%date, session_id = %session_id, added = members.len(), "created new session");
                result.push(WorkoutSession {
                    id: session_id,
                    performed_on: date,
                    exercises,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                });
            }
        }
    }

    result
}

/// Sessions ordered by date descending, as a new vector. Zero-padded ISO
/// dates make the underlying comparison equivalent to string comparison.
#[must_use]
pub fn sort_sessions_by_date_desc(sessions: &[WorkoutSession]) -> Vec<WorkoutSession> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.performed_on.cmp(&a.performed_on));
    sorted
}
