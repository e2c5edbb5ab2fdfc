// ABOUTME: Deterministic workout-plan generation from a pre-classified plan request
// ABOUTME: Excludes recently-trained exercises and derives PR-based weight targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use liftlog_core::constants::muscle_groups;
use liftlog_core::models::{normalize_exercise_name, WorkoutSession};
use serde::Serialize;
use tracing::debug;

use super::{least_recently_trained_group, PlanRequest, TrainingGoal};
use crate::aggregator::resolve_contributions;
use crate::config;
use crate::personal_records::personal_record_for;
use crate::training_constants::{estimate_one_rep_max, planning, round_to_increment};

/// Confidence in a derived weight target, downgraded as the underlying PR
/// goes stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetConfidence {
    /// PR is recent
    High,
    /// PR is older than 30 days
    Medium,
    /// PR is older than 90 days
    Low,
}

/// A personalized weight target for one planned exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTarget {
    /// Suggested working weight, rounded to the nearest loadable increment
    pub weight: f64,
    /// Fraction of estimated 1RM the goal band prescribes
    pub percent_of_e1rm: f64,
    /// Staleness-adjusted confidence
    pub confidence: TargetConfidence,
}

/// One exercise slot in a generated plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Muscle group the slot targets
    pub muscle_group: String,
    /// Prescribed sets
    pub sets: u32,
    /// Prescribed reps per set
    pub reps: u32,
    /// Personalized weight target, when PR data supports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<WeightTarget>,
}

/// A generated workout plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Muscle group the plan focuses on
    pub focus: String,
    /// Training goal the prescription follows
    pub goal: TrainingGoal,
    /// Selected exercises, in suggested order
    pub exercises: Vec<PlannedExercise>,
    /// One-sentence natural-language summary
    pub summary: String,
}

/// Sets × reps prescription per training goal
const fn prescription(goal: TrainingGoal) -> (u32, u32) {
    match goal {
        TrainingGoal::Strength => (5, 3),
        TrainingGoal::Hypertrophy => (4, 10),
        TrainingGoal::Conditioning => (3, 15),
    }
}

/// Plan size for a requested duration
fn plan_size(duration_minutes: Option<u32>) -> usize {
    match duration_minutes {
        Some(minutes) if minutes <= planning::SHORT_SESSION_MINUTES => {
            planning::MIN_PLAN_EXERCISES
        }
        Some(minutes) if minutes <= planning::MEDIUM_SESSION_MINUTES => {
            planning::DEFAULT_PLAN_EXERCISES
        }
        Some(_) => planning::MAX_PLAN_EXERCISES,
        None => planning::DEFAULT_PLAN_EXERCISES,
    }
}

/// Normalized names of exercises trained within the exclusion window
fn recently_trained(sessions: &[WorkoutSession], now: DateTime<Utc>) -> HashSet<String> {
    let cutoff = (now - Duration::hours(planning::RECENT_TRAINING_EXCLUSION_HOURS)).date_naive();
    sessions
        .iter()
        .filter(|s| !s.is_deleted() && s.performed_on >= cutoff)
        .flat_map(|s| s.exercises.iter().map(|e| e.normalized_name()))
        .collect()
}

/// Weight target from the exercise's PR, when one exists
fn derive_target(
    sessions: &[WorkoutSession],
    exercise_name: &str,
    goal: TrainingGoal,
    now: DateTime<Utc>,
) -> Option<WeightTarget> {
    let record = personal_record_for(sessions, exercise_name)?;
    if record.max_weight <= 0.0 {
        return None;
    }
    let percent = config::goal_target_percentage(goal.as_str())?;
    let e1rm = estimate_one_rep_max(record.max_weight, record.reps);
    let age_days = (now.date_naive() - record.date).num_days();
    let confidence = if age_days > planning::PR_STALE_LOW_DAYS {
        TargetConfidence::Low
    } else if age_days > planning::PR_STALE_MEDIUM_DAYS {
        TargetConfidence::Medium
    } else {
        TargetConfidence::High
    };
    Some(WeightTarget {
        weight: round_to_increment(e1rm * percent),
        percent_of_e1rm: percent,
        confidence,
    })
}

/// Generate a workout plan from a pre-classified request.
///
/// Pure: `now` anchors the 48-hour exclusion window and PR staleness so
/// callers control time. Exercises trained within the last 48 hours are
/// never selected, matching on exact normalized name.
#[must_use]
pub fn execute_plan(
    request: &PlanRequest,
    sessions: &[WorkoutSession],
    now: DateTime<Utc>,
) -> WorkoutPlan {
    let focus = request
        .focus
        .as_deref()
        .and_then(muscle_groups::canonical)
        .unwrap_or_else(|| least_recently_trained_group(sessions));

    let excluded = recently_trained(sessions, now);

    // Candidate pool: the curated table for the group, then history
    // exercises attributed to it that the table does not already cover.
    let mut pool: Vec<String> = config::exercises_for_group(focus)
        .map(|exercises| exercises.iter().map(|e| (*e).to_owned()).collect())
        .unwrap_or_default();
    let mut pooled: HashSet<String> = pool.iter().map(|n| normalize_exercise_name(n)).collect();
    for session in sessions.iter().filter(|s| !s.is_deleted()) {
        for exercise in &session.exercises {
            let targets_focus = resolve_contributions(exercise)
                .iter()
                .any(|c| c.muscle_group.eq_ignore_ascii_case(focus));
            if targets_focus && pooled.insert(exercise.normalized_name()) {
                pool.push(exercise.name_raw.clone());
            }
        }
    }

    let size = plan_size(request.duration_minutes);
    let (sets, reps) = prescription(request.goal);

    let exercises: Vec<PlannedExercise> = pool
        .into_iter()
        .filter(|name| !excluded.contains(&normalize_exercise_name(name)))
        .take(size)
        .map(|name| {
            let target = if request.include_targets {
                derive_target(sessions, &name, request.goal, now)
            } else {
                None
            };
            PlannedExercise {
                name,
                muscle_group: focus.to_owned(),
                sets,
                reps,
                target,
            }
        })
        .collect();

    debug!(
        focus,
        goal = request.goal.as_str(),
        selected = exercises.len(),
        excluded = excluded.len(),
        "generated workout plan"
    );

    let summary = if exercises.is_empty() {
        format!(
            "Everything that targets {focus} was trained in the last 48 hours; take a rest day or pick another group."
        )
    } else {
        let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
        format!(
            "{focus} day, {} focus: {} exercises at {sets}×{reps}: {}.",
            request.goal.as_str(),
            exercises.len(),
            names.join(", ")
        )
    };

    WorkoutPlan {
        focus: focus.to_owned(),
        goal: request.goal,
        exercises,
        summary,
    }
}
