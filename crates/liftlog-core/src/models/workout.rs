// ABOUTME: Workout session, exercise, set, and muscle-contribution models
// ABOUTME: Includes weight-text parsing, name normalization, and ISO-week helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a muscle contribution came from.
///
/// Template-derived and model-provided contributions are sanitized
/// differently on the way in, but downstream aggregation must never branch
/// on origin. The tag exists for diagnostics and round-tripping only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionSource {
    /// Derived from the exercise-name → muscle-template lookup
    #[default]
    Template,
    /// Supplied by the language model and sanitized against the allow-list
    Model,
}

/// A weighted attribution of an exercise's sets to one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleContribution {
    /// Muscle group name from the fixed allow-list
    pub muscle_group: String,
    /// Weight of this attribution, in (0, 1]
    pub fraction: f64,
    /// True for the group that counts 1:1 toward direct set totals
    #[serde(default)]
    pub is_direct: bool,
    /// Provenance tag
    #[serde(default)]
    pub source: ContributionSource,
}

impl MuscleContribution {
    /// Full direct contribution to a single muscle group
    #[must_use]
    pub fn direct(muscle_group: impl Into<String>, source: ContributionSource) -> Self {
        Self {
            muscle_group: muscle_group.into(),
            fraction: 1.0,
            is_direct: true,
            source,
        }
    }

    /// Fractional contribution to a secondary muscle group
    #[must_use]
    pub fn fractional(
        muscle_group: impl Into<String>,
        fraction: f64,
        source: ContributionSource,
    ) -> Self {
        Self {
            muscle_group: muscle_group.into(),
            fraction,
            is_direct: false,
            source,
        }
    }
}

/// One performed set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Unique set id
    pub id: String,
    /// Id of the owning exercise
    pub exercise_id: String,
    /// Zero-based position within the exercise
    pub set_index: u32,
    /// Repetition count
    pub reps: u32,
    /// Weight as the user/model expressed it ("80kg", "185", "bodyweight")
    pub weight_text: String,
    /// Best-effort bodyweight flag inferred from `weight_text`
    pub is_bodyweight: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl WorkoutSet {
    /// Numeric weight derived from `weight_text`; 0.0 when unparsable
    #[must_use]
    pub fn weight_value(&self) -> f64 {
        parse_weight_text(&self.weight_text)
    }

    /// Training volume for this set (`weight × reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight_value() * f64::from(self.reps)
    }
}

/// One exercise performed within a session, owning its sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Unique exercise id
    pub id: String,
    /// Id of the owning session
    pub session_id: String,
    /// Exercise name exactly as parsed from user/model text
    pub name_raw: String,
    /// Primary muscle group, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_muscle_group: Option<String>,
    /// Weighted muscle attributions. Absence round-trips as absence, never `[]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_contributions: Option<Vec<MuscleContribution>>,
    /// Performed sets, in order
    pub sets: Vec<WorkoutSet>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl WorkoutExercise {
    /// Normalized form of `name_raw` for matching and grouping
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_exercise_name(&self.name_raw)
    }
}

/// One training day. Sessions are keyed by exact calendar date: a merge
/// never produces two sessions with the same `performed_on`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Unique session id
    pub id: String,
    /// Calendar date the session was performed (serialized `YYYY-MM-DD`)
    pub performed_on: NaiveDate,
    /// Exercises performed, in merge order
    pub exercises: Vec<WorkoutExercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; the core never physically removes sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl WorkoutSession {
    /// Total number of sets across all exercises
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Whether this session has been soft-deleted
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Coarse quality signal attached to parsed output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Parse looks trustworthy
    High,
    /// Parse is dominated by zero values or accumulated warnings
    Low,
}

/// Transient exercise record produced by the normalizer, consumed by the
/// merger, and discarded after merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExercise {
    /// Batch-unique id
    pub id: String,
    /// Session date this exercise belongs to
    pub date: NaiveDate,
    /// Exercise name as extracted
    pub exercise: String,
    /// Number of sets performed
    pub sets: u32,
    /// Reps per set; `None` when the model omitted them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<Vec<u32>>,
    /// Weight text per set; `None` when the model omitted them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<String>>,
    /// Primary muscle group, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_muscle_group: Option<String>,
    /// Weighted muscle attributions; passes through the merger verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_contributions: Option<Vec<MuscleContribution>>,
}

/// Parse a display weight string into a number by stripping every character
/// that is not a digit or decimal point. Unparsable values are 0.0.
#[must_use]
pub fn parse_weight_text(weight_text: &str) -> f64 {
    let numeric: String = weight_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse::<f64>().unwrap_or(0.0)
}

/// Best-effort bodyweight detection from a weight display string.
///
/// Inherently ambiguous for values like "bodyweight+25"; callers must treat
/// the flag as a hint, not an invariant.
#[must_use]
pub fn infer_bodyweight(weight_text: &str) -> bool {
    let lower = weight_text.to_lowercase();
    lower.contains("bodyweight") || lower.contains("body weight") || lower.trim() == "bw"
}

/// Normalize an exercise name for matching: lowercase, strip everything that
/// is not a word character or space, collapse surrounding whitespace.
#[must_use]
pub fn normalize_exercise_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// ISO week identifier (`YYYY-Www`) for a calendar date, the key for all
/// weekly aggregation buckets.
#[must_use]
pub fn iso_week_id(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{:04}-W{:02}", week.year(), week.week())
}
