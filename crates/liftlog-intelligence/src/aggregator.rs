// ABOUTME: Muscle-group training-volume aggregation with fractional contribution accounting
// ABOUTME: Produces per-day heatmap counts, global workout stats, and per-week group breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Muscle-Group Aggregator
//!
//! Walks every exercise in every session and accumulates set counts into
//! per-muscle-group, per-ISO-week buckets. Direct contributions count 1:1,
//! secondary contributions count at their fraction, and the per-group weekly
//! total reflects the real set count attributed to that group exactly once
//! per exercise, regardless of how many of its contributions name the group.
//!
//! Exercises that resolve to zero contributions land in a dedicated
//! uncategorized bucket; they never materialize an "Unknown" group entry.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use liftlog_core::models::{
    iso_week_id, ContributionSource, MuscleContribution, WorkoutExercise, WorkoutSession,
    WorkoutSet,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weekly set accumulators for one muscle group, keyed by ISO week id
/// (`YYYY-Www`). Direct and fractional are separate accumulators; total is
/// the observed set count per group per week, de-duplicated per exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySets {
    /// Sets whose contribution was marked direct, counted in full
    pub direct: HashMap<String, u32>,
    /// Fraction-weighted sets, including the direct contribution's share
    pub fractional: HashMap<String, f64>,
    /// Real set count attributed to the group, once per exercise
    pub total: HashMap<String, u32>,
}

/// Aggregated statistics for one muscle group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupStats {
    /// Per-week set accumulators
    pub weekly_sets: WeeklySets,
    /// Convenience copy of `weekly_sets.total` for the requested current week
    pub sets_this_week: u32,
    /// Sum of `weight × reps` over every set of exercises mapped to this group
    pub total_volume: f64,
    /// `total_volume` divided by the number of contributing exercise instances
    pub average_volume: f64,
    /// Number of exercise instances that contributed to this group
    pub exercise_instances: u32,
}

/// Weekly accumulators for exercises with no muscle attribution at all
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncategorizedStats {
    /// Set counts per ISO week
    pub weekly_sets: HashMap<String, u32>,
    /// Exercise-instance counts per ISO week
    pub weekly_exercises: HashMap<String, u32>,
}

/// Global workout statistics across the whole history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Count of distinct workout dates
    pub total_workout_days: u32,
    /// Total exercise instances recorded
    pub total_exercises: u32,
    /// Total sets recorded
    pub total_sets: u32,
    /// Exercises per distinct workout day, 0 when no sessions exist
    pub average_exercises_per_day: f64,
    /// Sets per distinct workout day, 0 when no sessions exist
    pub average_sets_per_day: f64,
    /// Most frequent normalized exercise name, `"N/A"` when no sessions exist
    pub most_common_exercise: String,
}

impl Default for WorkoutStats {
    fn default() -> Self {
        Self {
            total_workout_days: 0,
            total_exercises: 0,
            total_sets: 0,
            average_exercises_per_day: 0.0,
            average_sets_per_day: 0.0,
            most_common_exercise: "N/A".to_owned(),
        }
    }
}

/// Complete aggregation output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeStats {
    /// ISO week id the caller considers current
    pub current_week: String,
    /// Total set count per calendar day, for heatmap rendering
    pub daily_set_counts: HashMap<NaiveDate, u32>,
    /// Global workout statistics
    pub workout_stats: WorkoutStats,
    /// Per-muscle-group breakdowns
    pub muscle_group_stats: HashMap<String, MuscleGroupStats>,
    /// Bucket for exercises with no muscle attribution
    pub uncategorized: UncategorizedStats,
}

impl VolumeStats {
    /// Zero-valued stats with empty maps, for use before any data exists
    #[must_use]
    pub fn empty(current_week: &str) -> Self {
        Self {
            current_week: current_week.to_owned(),
            ..Self::default()
        }
    }
}

/// Effective contribution list for an exercise.
///
/// `muscle_contributions` wins when present; otherwise a bare
/// `primary_muscle_group` synthesizes a single full direct contribution. An
/// exercise with neither resolves to an empty list and is counted as
/// uncategorized by the aggregation.
#[must_use]
pub fn resolve_contributions(exercise: &WorkoutExercise) -> Vec<MuscleContribution> {
    if let Some(contributions) = &exercise.muscle_contributions {
        return contributions.clone();
    }
    exercise
        .primary_muscle_group
        .as_deref()
        .map(|group| vec![MuscleContribution::direct(group, ContributionSource::Template)])
        .unwrap_or_default()
}

/// Total set count per calendar day. Parallel fold/reduce over sessions:
/// per-thread maps are accumulated locally and merged once.
fn daily_set_counts(sessions: &[&WorkoutSession]) -> HashMap<NaiveDate, u32> {
    sessions
        .par_iter()
        .fold(HashMap::new, |mut counts: HashMap<NaiveDate, u32>, session| {
            *counts.entry(session.performed_on).or_insert(0) += session.total_sets() as u32;
            counts
        })
        .reduce(HashMap::new, |mut merged, counts| {
            for (day, count) in counts {
                *merged.entry(day).or_insert(0) += count;
            }
            merged
        })
}

/// Most frequent normalized exercise name, ties broken by first-seen order
fn most_common_exercise(sessions: &[&WorkoutSession]) -> String {
    let mut occurrences: HashMap<String, (u32, usize)> = HashMap::new();
    let mut next_index = 0usize;

    for session in sessions {
        for exercise in &session.exercises {
            let name = exercise.normalized_name();
            if name.is_empty() {
                continue;
            }
            let entry = occurrences.entry(name).or_insert_with(|| {
                let slot = (0, next_index);
                next_index += 1;
                slot
            });
            entry.0 += 1;
        }
    }

    occurrences
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .map_or_else(|| "N/A".to_owned(), |(name, _)| name)
}

/// Aggregate the session history into muscle-group volume statistics.
///
/// `current_week` is the ISO week id (`YYYY-Www`) the caller considers
/// current; it seeds the per-group `sets_this_week` convenience counts.
/// The input is never mutated and soft-deleted sessions are skipped.
#[must_use]
pub fn aggregate_muscle_volume(sessions: &[WorkoutSession], current_week: &str) -> VolumeStats {
    let active: Vec<&WorkoutSession> = sessions.iter().filter(|s| !s.is_deleted()).collect();
    if active.is_empty() {
        return VolumeStats::empty(current_week);
    }

    let mut stats = VolumeStats::empty(current_week);
    stats.daily_set_counts = daily_set_counts(&active);

    let mut group_stats: HashMap<String, MuscleGroupStats> = HashMap::new();
    let mut total_exercises = 0u32;
    let mut total_sets = 0u32;

    for session in &active {
        let week = iso_week_id(session.performed_on);
        for exercise in &session.exercises {
            total_exercises += 1;
            let set_count = exercise.sets.len() as u32;
            total_sets += set_count;

            let contributions = resolve_contributions(exercise);
            if contributions.is_empty() {
                *stats
                    .uncategorized
                    .weekly_sets
                    .entry(week.clone())
                    .or_insert(0) += set_count;
                *stats
                    .uncategorized
                    .weekly_exercises
                    .entry(week.clone())
                    .or_insert(0) += 1;
                continue;
            }

            let exercise_volume: f64 = exercise.sets.iter().map(WorkoutSet::volume).sum();

            // Direct and fractional accumulate per contribution; total and
            // volume accumulate once per distinct group per exercise so an
            // exercise naming the same group twice cannot double count.
            let mut groups_touched: HashSet<&str> = HashSet::new();
            for contribution in &contributions {
                let entry = group_stats
                    .entry(contribution.muscle_group.clone())
                    .or_default();
                if contribution.is_direct {
                    *entry
                        .weekly_sets
                        .direct
                        .entry(week.clone())
                        .or_insert(0) += set_count;
                }
                *entry
                    .weekly_sets
                    .fractional
                    .entry(week.clone())
                    .or_insert(0.0) += f64::from(set_count) * contribution.fraction;
                groups_touched.insert(contribution.muscle_group.as_str());
            }
            for group in groups_touched {
                let entry = group_stats
                    .entry(group.to_owned())
                    .or_default();
                *entry.weekly_sets.total.entry(week.clone()).or_insert(0) += set_count;
                entry.total_volume += exercise_volume;
                entry.exercise_instances += 1;
            }
        }
    }

    for entry in group_stats.values_mut() {
        entry.sets_this_week = entry
            .weekly_sets
            .total
            .get(current_week)
            .copied()
            .unwrap_or(0);
        entry.average_volume = if entry.exercise_instances == 0 {
            0.0
        } else {
            entry.total_volume / f64::from(entry.exercise_instances)
        };
    }

    let distinct_days: HashSet<NaiveDate> = active.iter().map(|s| s.performed_on).collect();
    let total_workout_days = distinct_days.len() as u32;
    stats.workout_stats = WorkoutStats {
        total_workout_days,
        total_exercises,
        total_sets,
        average_exercises_per_day: f64::from(total_exercises) / f64::from(total_workout_days),
        average_sets_per_day: f64::from(total_sets) / f64::from(total_workout_days),
        most_common_exercise: most_common_exercise(&active),
    };
    stats.muscle_group_stats = group_stats;

    debug!(
        sessions = active.len(),
        groups = stats.muscle_group_stats.len(),
        total_sets,
        "aggregated muscle volume"
    );
    stats
}
