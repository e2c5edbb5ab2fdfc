// ABOUTME: Deterministic ask/plan intent executors over the session history
// ABOUTME: Shared helpers for history scanning and least-recently-trained selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Intent Executors
//!
//! Pure functions that, given a pre-classified intent and the session
//! history, compute a deterministic answer or workout plan. All exercise
//! references resolve through [`crate::resolver`] so thresholds and
//! tie-breaks are identical on every branch. Failures are natural-language
//! sentences with suggestions attached, never raw errors.

use std::collections::HashMap;

use chrono::NaiveDate;
use liftlog_core::constants::muscle_groups;
use liftlog_core::models::{WorkoutExercise, WorkoutSession};
use serde::Serialize;

use crate::aggregator::resolve_contributions;

/// Ask-intent execution
pub mod ask;
/// Intent shapes consumed by the executors
pub mod intent;
/// Plan-request execution
pub mod plan;

pub use ask::{execute_ask, AskAnswer, AskOutcome, DelegationContext, DelegationTopic, ProgressTrend};
pub use intent::{AskIntent, PlanRequest, PrMetric, TrainingGoal, VolumeWindow};
pub use plan::{execute_plan, PlannedExercise, TargetConfidence, WeightTarget, WorkoutPlan};

/// A snapshot of one exercise instance and the date it was performed
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExerciseInstance<'a> {
    pub session: &'a WorkoutSession,
    pub exercise: &'a WorkoutExercise,
}

/// All instances of one normalized exercise name, oldest first.
/// Soft-deleted sessions are skipped.
pub(crate) fn instances_of<'a>(
    sessions: &'a [WorkoutSession],
    normalized_name: &str,
) -> Vec<ExerciseInstance<'a>> {
    let mut instances: Vec<ExerciseInstance<'a>> = sessions
        .iter()
        .filter(|s| !s.is_deleted())
        .flat_map(|session| {
            session
                .exercises
                .iter()
                .filter(|e| e.normalized_name() == normalized_name)
                .map(move |exercise| ExerciseInstance { session, exercise })
        })
        .collect();
    instances.sort_by_key(|i| i.session.performed_on);
    instances
}

/// Latest training date per muscle group across the history
pub(crate) fn last_trained_by_group(sessions: &[WorkoutSession]) -> HashMap<String, NaiveDate> {
    let mut last: HashMap<String, NaiveDate> = HashMap::new();
    for session in sessions.iter().filter(|s| !s.is_deleted()) {
        for exercise in &session.exercises {
            for contribution in resolve_contributions(exercise) {
                last.entry(contribution.muscle_group)
                    .and_modify(|date| {
                        if session.performed_on > *date {
                            *date = session.performed_on;
                        }
                    })
                    .or_insert(session.performed_on);
            }
        }
    }
    last
}

/// The allow-listed muscle group that has gone longest without training.
/// Never-trained groups win outright; ties fall back to allow-list order.
pub(crate) fn least_recently_trained_group(sessions: &[WorkoutSession]) -> &'static str {
    let last = last_trained_by_group(sessions);
    muscle_groups::MUSCLE_GROUPS
        .iter()
        .min_by_key(|group| last.get(**group).copied())
        .copied()
        .unwrap_or("Chest")
}

/// Structured payload handed to the external natural-language responder for
/// delegated intents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Number of active sessions in the history
    pub total_sessions: usize,
    /// Dates and exercise names of the most recent sessions, newest first
    pub recent_sessions: Vec<SessionDigest>,
}

/// Compact per-session digest for delegation payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDigest {
    /// Session date
    pub performed_on: NaiveDate,
    /// Exercise names verbatim
    pub exercises: Vec<String>,
}

/// Summarize the history for delegation payloads: newest `limit` sessions
pub(crate) fn summarize_history(sessions: &[WorkoutSession], limit: usize) -> HistorySummary {
    let mut active: Vec<&WorkoutSession> = sessions.iter().filter(|s| !s.is_deleted()).collect();
    active.sort_by(|a, b| b.performed_on.cmp(&a.performed_on));
    HistorySummary {
        total_sessions: active.len(),
        recent_sessions: active
            .iter()
            .take(limit)
            .map(|session| SessionDigest {
                performed_on: session.performed_on,
                exercises: session
                    .exercises
                    .iter()
                    .map(|e| e.name_raw.clone())
                    .collect(),
            })
            .collect(),
    }
}
