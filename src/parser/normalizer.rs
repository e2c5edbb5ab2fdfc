// ABOUTME: Turns raw, possibly malformed JSON into canonical ParsedExercise records
// ABOUTME: Shape detection, field fallbacks, muscle sanitization, and confidence scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Exercise Normalizer/Validator
//!
//! Accepts an already-parsed JSON value in one of three shapes, checked in
//! fixed priority order: a bare array of exercise objects, an object with an
//! `exercises` array, or a single exercise object. Each raw record is
//! normalized field by field with deterministic fallbacks, and the whole
//! batch gets a coarse `high`/`low` confidence score.
//!
//! Malformed content never fails the program: the only failure mode
//! (`success == false`) is an input shape that yields zero exercises.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::NaiveDate;
use liftlog_core::constants::muscle_groups;
use liftlog_core::models::{
    parse_weight_text, Confidence, ContributionSource, MuscleContribution, ParsedExercise,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use super::MuscleTemplateSource;

/// Exercise name fallback of last resort
const UNKNOWN_EXERCISE: &str = "Unknown Exercise";

/// Warnings beyond this count score the batch low
const MAX_WARNINGS_FOR_HIGH: usize = 2;

/// A single extracted exercise needs at least this many rep/weight values
/// to score high
const MIN_VALUES_FOR_SINGLE_EXERCISE: usize = 3;

/// Normalization options. `use_template_muscles` wins over
/// `allow_model_provided_muscles` when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Derive muscle attributions from the template catalog, ignoring any
    /// model-provided groups
    pub use_template_muscles: bool,
    /// Accept model-provided muscle contributions after sanitization
    pub allow_model_provided_muscles: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            use_template_muscles: true,
            allow_model_provided_muscles: false,
        }
    }
}

/// Result of normalizing one model turn
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBatch {
    /// False only when zero exercises could be extracted from the shape
    pub success: bool,
    /// The normalized records, ready for the merger
    pub exercises: Vec<ParsedExercise>,
    /// Human-readable warnings accumulated during normalization
    pub warnings: Vec<String>,
    /// Coarse quality signal for the whole batch
    pub confidence: Confidence,
    /// Whether any record fell back to the supplied "today" date
    pub used_default_date: bool,
}

impl NormalizedBatch {
    fn failure() -> Self {
        Self {
            success: false,
            exercises: Vec::new(),
            warnings: vec!["no exercise records found in model output".to_owned()],
            confidence: Confidence::Low,
            used_default_date: false,
        }
    }
}

/// The three accepted input shapes, dispatched in fixed priority order
/// rather than probed dynamically.
enum RawExerciseShape<'a> {
    /// A bare array of exercise objects
    Array(&'a [Value]),
    /// An object wrapping an `exercises` array
    Wrapped(&'a [Value]),
    /// A single exercise object
    Single(&'a Map<String, Value>),
}

fn detect_shape(value: &Value) -> Option<RawExerciseShape<'_>> {
    if let Some(array) = value.as_array() {
        return Some(RawExerciseShape::Array(array));
    }
    if let Some(object) = value.as_object() {
        if let Some(exercises) = object.get("exercises").and_then(Value::as_array) {
            return Some(RawExerciseShape::Wrapped(exercises));
        }
        return Some(RawExerciseShape::Single(object));
    }
    None
}

// Safe: pattern is a compile-time literal
#[allow(clippy::unwrap_used)]
fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

// Safe: pattern is a compile-time literal
#[allow(clippy::unwrap_used)]
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{4}-\d{2}-\d{2}|null)-\d+$").unwrap())
}

/// Normalize an already-extracted JSON value into exercise records.
///
/// `today` is the fallback for missing or malformed dates; `templates` is
/// the exercise-name → muscle-template collaborator.
#[must_use]
pub fn normalize_exercises(
    value: &Value,
    options: &ParseOptions,
    today: NaiveDate,
    templates: &dyn MuscleTemplateSource,
) -> NormalizedBatch {
    let Some(shape) = detect_shape(value) else {
        return NormalizedBatch::failure();
    };

    let raw_records: Vec<&Map<String, Value>> = match shape {
        RawExerciseShape::Array(items) | RawExerciseShape::Wrapped(items) => {
            items.iter().filter_map(Value::as_object).collect()
        }
        RawExerciseShape::Single(object) => vec![object],
    };
    if raw_records.is_empty() {
        return NormalizedBatch::failure();
    }

    let mut warnings = Vec::new();
    let mut used_default_date = false;
    let mut accepted_ids: HashSet<String> = HashSet::new();
    let mut exercises = Vec::with_capacity(raw_records.len());

    for raw in raw_records {
        let record = normalize_record(
            raw,
            options,
            today,
            templates,
            &mut warnings,
            &mut used_default_date,
            &mut accepted_ids,
        );
        exercises.push(record);
    }

    for warning in &warnings {
        warn!(%warning, "normalizer warning");
    }

    let confidence = score_confidence(&exercises, &warnings);
    debug!(
        exercises = exercises.len(),
        warnings = warnings.len(),
        ?confidence,
        "normalized exercise batch"
    );

    NormalizedBatch {
        success: true,
        exercises,
        warnings,
        confidence,
        used_default_date,
    }
}

// Long function: each field of the raw record has its own fallback rules
fn normalize_record(
    raw: &Map<String, Value>,
    options: &ParseOptions,
    today: NaiveDate,
    templates: &dyn MuscleTemplateSource,
    warnings: &mut Vec<String>,
    used_default_date: &mut bool,
    accepted_ids: &mut HashSet<String>,
) -> ParsedExercise {
    let exercise = field_str(raw, "exercise")
        .or_else(|| field_str(raw, "nameRaw"))
        .unwrap_or(UNKNOWN_EXERCISE)
        .to_owned();

    let sets = normalize_sets(raw.get("sets"));

    let date = match field_str(raw, "date") {
        Some(text) if date_pattern().is_match(text) => {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or_else(|_| {
                warnings.push(format!("'{exercise}': impossible date '{text}', using today"));
                *used_default_date = true;
                today
            })
        }
        Some(text) => {
            warnings.push(format!("'{exercise}': malformed date '{text}', using today"));
            *used_default_date = true;
            today
        }
        None => {
            warnings.push(format!("'{exercise}': missing date, using today"));
            *used_default_date = true;
            today
        }
    };

    let reps = normalize_reps(raw.get("reps"), sets, &exercise, warnings);
    let weights = normalize_weights(raw.get("weights"), sets, &exercise, warnings);

    let (primary_muscle_group, muscle_contributions) =
        normalize_muscles(raw, &exercise, options, templates);

    let id = normalize_id(field_str(raw, "id"), accepted_ids);

    ParsedExercise {
        id,
        date,
        exercise,
        sets,
        reps,
        weights,
        primary_muscle_group,
        muscle_contributions,
    }
}

fn field_str<'a>(raw: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Any positive number of sets is accepted; everything else defaults to 1
fn normalize_sets(value: Option<&Value>) -> u32 {
    match value {
        Some(v) => {
            if let Some(n) = v.as_u64() {
                if n > 0 {
                    return n as u32;
                }
            }
            if let Some(f) = v.as_f64() {
                if f > 0.0 {
                    return f.round().max(1.0) as u32;
                }
            }
            1
        }
        None => 1,
    }
}

/// Present rep arrays are resized to exactly `sets` entries, padding with 0.
/// Absent reps stay absent: only present arrays are touched.
fn normalize_reps(
    value: Option<&Value>,
    sets: u32,
    exercise: &str,
    warnings: &mut Vec<String>,
) -> Option<Vec<u32>> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut reps: Vec<u32> = items
                .iter()
                .map(|item| {
                    item.as_u64().map_or_else(
                        || item.as_f64().map_or(0, |f| f.max(0.0).round() as u32),
                        |n| n as u32,
                    )
                })
                .collect();
            reps.resize(sets as usize, 0);
            Some(reps)
        }
        Some(other) => {
            warnings.push(format!(
                "'{exercise}': reps should be an array, got {other}; ignoring"
            ));
            None
        }
    }
}

/// Present weight arrays are resized to exactly `sets` entries, padding with
/// "0" and coercing numeric weights to strings. Absent weights stay absent.
fn normalize_weights(
    value: Option<&Value>,
    sets: u32,
    exercise: &str,
    warnings: &mut Vec<String>,
) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut weights: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => "0".to_owned(),
                })
                .collect();
            weights.resize(sets as usize, "0".to_owned());
            Some(weights)
        }
        Some(other) => {
            warnings.push(format!(
                "'{exercise}': weights should be an array, got {other}; ignoring"
            ));
            None
        }
    }
}

/// Muscle attribution per the options: the template catalog wins outright;
/// otherwise model-provided contributions are sanitized against the
/// allow-list.
fn normalize_muscles(
    raw: &Map<String, Value>,
    exercise: &str,
    options: &ParseOptions,
    templates: &dyn MuscleTemplateSource,
) -> (Option<String>, Option<Vec<MuscleContribution>>) {
    if options.use_template_muscles {
        let Some(contributions) = templates.contributions_for(exercise) else {
            return (None, None);
        };
        let primary = contributions
            .iter()
            .find(|c| c.is_direct)
            .map(|c| c.muscle_group.clone());
        return (primary, Some(contributions));
    }

    if !options.allow_model_provided_muscles {
        return (None, None);
    }

    let sanitized: Vec<MuscleContribution> = raw
        .get("muscleContributions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| sanitize_contribution(item, exercise))
                .collect()
        })
        .unwrap_or_default();

    let primary = sanitized
        .iter()
        .find(|c| c.is_direct)
        .map(|c| c.muscle_group.clone())
        .or_else(|| {
            field_str(raw, "primaryMuscleGroup")
                .and_then(muscle_groups::canonical)
                .map(ToOwned::to_owned)
        });

    if sanitized.is_empty() {
        (primary, None)
    } else {
        (primary, Some(sanitized))
    }
}

/// One model-provided contribution: unknown groups are dropped, the fraction
/// is clamped into (0, 1] defaulting to 1, and `isDirect` survives only when
/// it is explicitly `true`.
fn sanitize_contribution(item: &Value, exercise: &str) -> Option<MuscleContribution> {
    let object = item.as_object()?;
    let name = object.get("muscleGroup").and_then(Value::as_str)?;
    let Some(canonical) = muscle_groups::canonical(name) else {
        debug!(exercise, muscle_group = name, "dropping unknown muscle group");
        return None;
    };

    let fraction = object
        .get("fraction")
        .and_then(Value::as_f64)
        .filter(|f| f.is_finite() && *f > 0.0)
        .map_or(1.0, |f| f.min(1.0));

    let is_direct = object.get("isDirect") == Some(&Value::Bool(true));

    Some(MuscleContribution {
        muscle_group: canonical.to_owned(),
        fraction,
        is_direct,
        source: ContributionSource::Model,
    })
}

/// Model-supplied ids are accepted only in the `(YYYY-MM-DD|null)-<integer>`
/// shape and only once per batch; everything else gets a fresh id.
fn normalize_id(supplied: Option<&str>, accepted_ids: &mut HashSet<String>) -> String {
    if let Some(id) = supplied {
        if id_pattern().is_match(id) && accepted_ids.insert(id.to_owned()) {
            return id.to_owned();
        }
    }
    loop {
        let generated = Uuid::new_v4().to_string();
        if accepted_ids.insert(generated.clone()) {
            return generated;
        }
    }
}

/// Confidence scoring over the whole batch, evaluated after all records are
/// built: mostly-zero values, too many warnings, or a single sparse record
/// all score low.
fn score_confidence(exercises: &[ParsedExercise], warnings: &[String]) -> Confidence {
    let mut total_values = 0usize;
    let mut zero_values = 0usize;
    for exercise in exercises {
        if let Some(reps) = &exercise.reps {
            total_values += reps.len();
            zero_values += reps.iter().filter(|r| **r == 0).count();
        }
        if let Some(weights) = &exercise.weights {
            total_values += weights.len();
            zero_values += weights
                .iter()
                .filter(|w| parse_weight_text(w).abs() < f64::EPSILON)
                .count();
        }
    }

    if total_values > 0 && zero_values * 2 > total_values {
        return Confidence::Low;
    }
    if warnings.len() > MAX_WARNINGS_FOR_HIGH {
        return Confidence::Low;
    }
    if exercises.len() == 1 && total_values < MIN_VALUES_FOR_SINGLE_EXERCISE {
        return Confidence::Low;
    }
    Confidence::High
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::NoTemplates;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    #[test]
    fn test_shape_priority_array_first() {
        let value = json!([{"exercise": "Squat", "sets": 2, "reps": [5, 5],
                            "weights": ["100", "100"], "date": "2026-08-01"}]);
        let batch = normalize_exercises(&value, &ParseOptions::default(), today(), &NoTemplates);
        assert!(batch.success);
        assert_eq!(batch.exercises.len(), 1);
        assert_eq!(batch.exercises[0].exercise, "Squat");
    }

    #[test]
    fn test_wrapped_and_single_shapes() {
        let wrapped = json!({"exercises": [{"exercise": "Row", "sets": 1,
                                            "reps": [8], "weights": ["60"],
                                            "date": "2026-08-01"}]});
        let batch = normalize_exercises(&wrapped, &ParseOptions::default(), today(), &NoTemplates);
        assert_eq!(batch.exercises.len(), 1);

        let single = json!({"exercise": "Row", "sets": 1, "reps": [8],
                            "weights": ["60"], "date": "2026-08-01"});
        let batch = normalize_exercises(&single, &ParseOptions::default(), today(), &NoTemplates);
        assert_eq!(batch.exercises.len(), 1);
    }

    #[test]
    fn test_scalar_input_fails() {
        let batch =
            normalize_exercises(&json!("squats"), &ParseOptions::default(), today(), &NoTemplates);
        assert!(!batch.success);
        assert!(batch.exercises.is_empty());
    }

    #[test]
    fn test_absent_weights_stay_absent() {
        let value = json!([{"exercise": "Bench Press", "sets": 4,
                            "reps": [12, 12, 12, 12], "date": "2026-08-01"}]);
        let batch = normalize_exercises(&value, &ParseOptions::default(), today(), &NoTemplates);
        let record = &batch.exercises[0];
        assert_eq!(record.reps.as_deref(), Some(&[12, 12, 12, 12][..]));
        assert_eq!(record.weights, None);
    }

    #[test]
    fn test_present_arrays_resize_to_sets() {
        let value = json!([{"exercise": "Bench Press", "sets": 3, "reps": [5],
                            "weights": [185, "190"], "date": "2026-08-01"}]);
        let batch = normalize_exercises(&value, &ParseOptions::default(), today(), &NoTemplates);
        let record = &batch.exercises[0];
        assert_eq!(record.reps.as_deref(), Some(&[5, 0, 0][..]));
        assert_eq!(
            record.weights.as_deref(),
            Some(&["185".to_owned(), "190".to_owned(), "0".to_owned()][..])
        );
    }

    #[test]
    fn test_id_pattern_acceptance_and_collision() {
        let mut accepted = HashSet::new();
        assert_eq!(
            normalize_id(Some("2026-08-01-3"), &mut accepted),
            "2026-08-01-3"
        );
        assert_eq!(normalize_id(Some("null-7"), &mut accepted), "null-7");
        // collision regenerates
        assert_ne!(
            normalize_id(Some("2026-08-01-3"), &mut accepted),
            "2026-08-01-3"
        );
        // arbitrary ids are replaced
        assert_ne!(normalize_id(Some("my-id"), &mut accepted), "my-id");
    }
}
