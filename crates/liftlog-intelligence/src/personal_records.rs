// ABOUTME: Personal-record derivation per distinct exercise name
// ABOUTME: Highest parsed weight wins, ties broken by higher reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # PR Metric Calculator
//!
//! Scans every set across the session history and retains, per distinct
//! normalized exercise name, the set with the highest parsed weight. Equal
//! weights fall back to higher reps. Weight parsing strips everything that
//! is not a digit or decimal point; unparsable values count as 0.

use std::collections::HashMap;

use chrono::NaiveDate;
use liftlog_core::models::{normalize_exercise_name, WorkoutSession};
use serde::{Deserialize, Serialize};

/// Best recorded set for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Exercise name verbatim from the record-holding instance
    pub exercise: String,
    /// Parsed weight of the record set
    pub max_weight: f64,
    /// Reps of the record set
    pub reps: u32,
    /// Date the record was set
    pub date: NaiveDate,
}

impl PersonalRecord {
    /// Whether `weight`/`reps` would beat this record under the standard
    /// tie-break: higher weight always wins, equal weight falls to reps.
    #[must_use]
    pub fn is_beaten_by(&self, weight: f64, reps: u32) -> bool {
        weight > self.max_weight
            || ((weight - self.max_weight).abs() < f64::EPSILON && reps > self.reps)
    }
}

/// Personal records for every distinct exercise in the history, sorted by
/// normalized exercise name for deterministic output. Soft-deleted sessions
/// are skipped.
#[must_use]
pub fn calculate_personal_records(sessions: &[WorkoutSession]) -> Vec<PersonalRecord> {
    let mut records: HashMap<String, PersonalRecord> = HashMap::new();

    for session in sessions.iter().filter(|s| !s.is_deleted()) {
        for exercise in &session.exercises {
            let key = exercise.normalized_name();
            if key.is_empty() {
                continue;
            }
            for set in &exercise.sets {
                let weight = set.weight_value();
                match records.get_mut(&key) {
                    Some(record) => {
                        if record.is_beaten_by(weight, set.reps) {
                            record.exercise = exercise.name_raw.clone();
                            record.max_weight = weight;
                            record.reps = set.reps;
                            record.date = session.performed_on;
                        }
                    }
                    None => {
                        records.insert(
                            key.clone(),
                            PersonalRecord {
                                exercise: exercise.name_raw.clone(),
                                max_weight: weight,
                                reps: set.reps,
                                date: session.performed_on,
                            },
                        );
                    }
                }
            }
        }
    }

    let mut sorted: Vec<(String, PersonalRecord)> = records.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted.into_iter().map(|(_, record)| record).collect()
}

/// Personal record for one exercise, looked up by free-text name
#[must_use]
pub fn personal_record_for(
    sessions: &[WorkoutSession],
    exercise_name: &str,
) -> Option<PersonalRecord> {
    let normalized = normalize_exercise_name(exercise_name);
    calculate_personal_records(sessions)
        .into_iter()
        .find(|record| normalize_exercise_name(&record.exercise) == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_break_rules() {
        let record = PersonalRecord {
            exercise: "Bench Press".into(),
            max_weight: 205.0,
            reps: 4,
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        // equal weight, higher reps wins
        assert!(record.is_beaten_by(205.0, 5));
        // higher weight always wins over higher reps
        assert!(record.is_beaten_by(206.0, 1));
        assert!(!record.is_beaten_by(195.0, 12));
        assert!(!record.is_beaten_by(205.0, 4));
    }
}
