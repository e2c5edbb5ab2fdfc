// ABOUTME: Deterministic execution of pre-classified ask intents
// ABOUTME: Answers in natural language or returns a delegation context, never a raw error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use chrono::{Duration, NaiveDate};
use liftlog_core::constants::muscle_groups;
use liftlog_core::models::{WorkoutSession, WorkoutSet};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::{
    instances_of, last_trained_by_group, least_recently_trained_group, summarize_history,
    ExerciseInstance,
};
use crate::aggregator::resolve_contributions;
use crate::config;
use crate::executors::intent::{AskIntent, PrMetric, VolumeWindow};
use crate::personal_records::personal_record_for;
use crate::resolver::{resolve_exercise, similarity_score, ExerciseMatch};
use crate::training_constants::{estimate_one_rep_max, planning, scoring};

/// A natural-language answer with optional alternative suggestions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskAnswer {
    /// The sentence shown to the user
    pub text: String,
    /// Alternative exercise names worth offering
    pub suggestions: Vec<String>,
}

/// Which external responder a delegated intent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegationTopic {
    /// Open-ended conversation
    GeneralChat,
    /// Muscle-group exercise catalog narration
    MuscleGroupExercises,
}

/// Structured context handed to the external natural-language responder.
/// The executor's contract for delegated intents is to return this context,
/// not final text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationContext {
    /// Responder the context is meant for
    pub topic: DelegationTopic,
    /// Topic-specific payload
    pub payload: serde_json::Value,
}

/// Result of executing an ask intent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AskOutcome {
    /// A final natural-language answer
    Answer(AskAnswer),
    /// Context for an externally-generated response
    Delegated(DelegationContext),
}

impl AskOutcome {
    fn text(text: impl Into<String>) -> Self {
        Self::Answer(AskAnswer {
            text: text.into(),
            suggestions: Vec::new(),
        })
    }

    fn with_suggestions(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::Answer(AskAnswer {
            text: text.into(),
            suggestions,
        })
    }
}

/// Direction of an exercise-progress trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTrend {
    /// Estimated 1RM went up
    Improving,
    /// Estimated 1RM went down
    Declining,
    /// No meaningful change
    Stable,
}

impl ProgressTrend {
    /// Classify an e1RM delta
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > f64::EPSILON {
            Self::Improving
        } else if delta < -f64::EPSILON {
            Self::Declining
        } else {
            Self::Stable
        }
    }

    /// Lowercase display form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Execute a pre-classified ask intent against the session history.
///
/// Pure: `today` anchors relative date windows so callers control time.
#[must_use]
pub fn execute_ask(intent: &AskIntent, sessions: &[WorkoutSession], today: NaiveDate) -> AskOutcome {
    debug!(?intent, sessions = sessions.len(), "executing ask intent");
    match intent {
        AskIntent::LastPerformed { exercise } => last_performed(exercise, sessions),
        AskIntent::LastSets { exercise } => last_sets(exercise, sessions),
        AskIntent::PersonalRecord { exercise, metric } => {
            personal_record(exercise, *metric, sessions)
        }
        AskIntent::VolumeSummary { window } => volume_summary(*window, sessions, today),
        AskIntent::LastSession => last_session(sessions),
        AskIntent::Recommendation { focus } => recommendation(focus.as_deref(), sessions, today),
        AskIntent::Alternatives { exercise } => alternatives(exercise, sessions),
        AskIntent::Progress {
            exercise,
            window_days,
        } => progress(exercise, *window_days, sessions, today),
        AskIntent::GeneralChat { message } => AskOutcome::Delegated(DelegationContext {
            topic: DelegationTopic::GeneralChat,
            payload: json!({
                "message": message,
                "history": summarize_history(sessions, 3),
            }),
        }),
        AskIntent::MuscleGroupExercises { muscle_group } => {
            muscle_group_exercises(muscle_group, sessions)
        }
    }
}

/// Standard "couldn't find it" reply carrying the resolver's best guesses
fn unresolved(query: &str, resolution: ExerciseMatch) -> AskOutcome {
    let text = if resolution.suggestions.is_empty() {
        format!("I couldn't find \"{query}\" in your training log.")
    } else {
        format!(
            "I couldn't find \"{query}\" in your training log. Did you mean {}?",
            resolution.suggestions.join(", ")
        )
    };
    AskOutcome::with_suggestions(text, resolution.suggestions)
}

fn last_performed(query: &str, sessions: &[WorkoutSession]) -> AskOutcome {
    let resolution = resolve_exercise(query, sessions);
    let Some(name) = resolution.matched_exercise.clone() else {
        return unresolved(query, resolution);
    };
    let normalized = liftlog_core::models::normalize_exercise_name(&name);
    let instances = instances_of(sessions, &normalized);
    match instances.last() {
        Some(instance) => AskOutcome::with_suggestions(
            format!(
                "You last did {name} on {}.",
                instance.session.performed_on.format("%Y-%m-%d")
            ),
            resolution.suggestions,
        ),
        None => unresolved(query, resolution),
    }
}

/// Top set under the PR tie-break: heaviest weight, then most reps
fn top_set(sets: &[WorkoutSet]) -> Option<&WorkoutSet> {
    sets.iter().max_by(|a, b| {
        a.weight_value()
            .partial_cmp(&b.weight_value())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.reps.cmp(&b.reps))
    })
}

fn format_set(set: &WorkoutSet) -> String {
    if set.is_bodyweight {
        format!("{}×BW", set.reps)
    } else {
        format!("{}×{}", set.reps, set.weight_text)
    }
}

fn last_sets(query: &str, sessions: &[WorkoutSession]) -> AskOutcome {
    let resolution = resolve_exercise(query, sessions);
    let Some(name) = resolution.matched_exercise.clone() else {
        return unresolved(query, resolution);
    };
    let normalized = liftlog_core::models::normalize_exercise_name(&name);
    let instances = instances_of(sessions, &normalized);
    let Some(instance) = instances.last() else {
        return unresolved(query, resolution);
    };
    let sets = &instance.exercise.sets;
    if sets.is_empty() {
        return AskOutcome::with_suggestions(
            format!(
                "Your last {name} on {} had no recorded sets.",
                instance.session.performed_on.format("%Y-%m-%d")
            ),
            resolution.suggestions,
        );
    }
    let breakdown: Vec<String> = sets.iter().map(format_set).collect();
    let top = top_set(sets).map(format_set).unwrap_or_default();
    AskOutcome::with_suggestions(
        format!(
            "Last {name} ({}): {} (top set {top}).",
            instance.session.performed_on.format("%Y-%m-%d"),
            breakdown.join(", ")
        ),
        resolution.suggestions,
    )
}

fn personal_record(query: &str, metric: PrMetric, sessions: &[WorkoutSession]) -> AskOutcome {
    let resolution = resolve_exercise(query, sessions);
    let Some(name) = resolution.matched_exercise.clone() else {
        return unresolved(query, resolution);
    };
    match metric {
        PrMetric::MaxWeight => match personal_record_for(sessions, &name) {
            Some(record) => AskOutcome::with_suggestions(
                format!(
                    "Your {name} PR is {}×{} ({}).",
                    trim_number(record.max_weight),
                    record.reps,
                    record.date.format("%Y-%m-%d")
                ),
                resolution.suggestions,
            ),
            None => unresolved(query, resolution),
        },
        PrMetric::Estimated1Rm => {
            let normalized = liftlog_core::models::normalize_exercise_name(&name);
            let best = instances_of(sessions, &normalized)
                .iter()
                .flat_map(|i| i.exercise.sets.iter().map(|s| (i.session.performed_on, s)))
                .map(|(date, set)| (date, estimate_one_rep_max(set.weight_value(), set.reps)))
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
            match best {
                Some((date, e1rm)) => AskOutcome::with_suggestions(
                    format!(
                        "Your estimated 1RM for {name} is {} ({}).",
                        trim_number(e1rm),
                        date.format("%Y-%m-%d")
                    ),
                    resolution.suggestions,
                ),
                None => unresolved(query, resolution),
            }
        }
        PrMetric::BestVolume => {
            let normalized = liftlog_core::models::normalize_exercise_name(&name);
            let best = instances_of(sessions, &normalized)
                .iter()
                .flat_map(|i| i.exercise.sets.iter().map(|s| (i.session.performed_on, s)))
                .max_by(|a, b| {
                    a.1.volume()
                        .partial_cmp(&b.1.volume())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            match best {
                Some((date, set)) => AskOutcome::with_suggestions(
                    format!(
                        "Your biggest {name} set was {}×{} = {} volume ({}).",
                        set.reps,
                        set.weight_text,
                        trim_number(set.volume()),
                        date.format("%Y-%m-%d")
                    ),
                    resolution.suggestions,
                ),
                None => unresolved(query, resolution),
            }
        }
    }
}

fn window_bounds(window: VolumeWindow, today: NaiveDate) -> (NaiveDate, NaiveDate, &'static str) {
    match window {
        VolumeWindow::Week => (today - Duration::days(6), today, "Last 7 days"),
        VolumeWindow::Month => (today - Duration::days(29), today, "Last 30 days"),
        VolumeWindow::Custom { start, end } => (start, end, "Selected range"),
    }
}

fn volume_summary(window: VolumeWindow, sessions: &[WorkoutSession], today: NaiveDate) -> AskOutcome {
    let (start, end, label) = window_bounds(window, today);
    let in_range: Vec<&WorkoutSession> = sessions
        .iter()
        .filter(|s| !s.is_deleted() && s.performed_on >= start && s.performed_on <= end)
        .collect();
    if in_range.is_empty() {
        return AskOutcome::text(format!("{label}: no workouts recorded."));
    }

    let days: std::collections::HashSet<NaiveDate> =
        in_range.iter().map(|s| s.performed_on).collect();
    let total_sets: usize = in_range.iter().map(|s| s.total_sets()).sum();
    let total_volume: f64 = in_range
        .iter()
        .flat_map(|s| s.exercises.iter())
        .flat_map(|e| e.sets.iter())
        .map(WorkoutSet::volume)
        .sum();

    // Per-group set counts use the same once-per-exercise attribution the
    // aggregator's weekly totals use.
    let mut group_sets: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for session in &in_range {
        for exercise in &session.exercises {
            let mut groups: Vec<String> = resolve_contributions(exercise)
                .into_iter()
                .map(|c| c.muscle_group)
                .collect();
            groups.sort();
            groups.dedup();
            for group in groups {
                *group_sets.entry(group).or_insert(0) += exercise.sets.len();
            }
        }
    }
    let top_group = group_sets
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(group, sets)| format!(" Most trained: {group} ({sets} sets)."))
        .unwrap_or_default();

    AskOutcome::text(format!(
        "{label}: {} workout days, {total_sets} sets, {} total volume.{top_group}",
        days.len(),
        trim_number(total_volume)
    ))
}

fn last_session(sessions: &[WorkoutSession]) -> AskOutcome {
    let latest = sessions
        .iter()
        .filter(|s| !s.is_deleted())
        .max_by_key(|s| s.performed_on);
    match latest {
        Some(session) => {
            let names: Vec<String> = session
                .exercises
                .iter()
                .map(|e| e.name_raw.clone())
                .collect();
            AskOutcome::text(format!(
                "Your last session was {}: {} exercises, {} sets: {}.",
                session.performed_on.format("%Y-%m-%d"),
                session.exercises.len(),
                session.total_sets(),
                names.join(", ")
            ))
        }
        None => AskOutcome::text("You have no recorded sessions yet."),
    }
}

fn recommendation(focus: Option<&str>, sessions: &[WorkoutSession], today: NaiveDate) -> AskOutcome {
    let group = focus
        .and_then(muscle_groups::canonical)
        .unwrap_or_else(|| least_recently_trained_group(sessions));

    let picks = config::exercises_for_group(group)
        .map(|exercises| exercises.join(", "))
        .unwrap_or_default();

    let last = last_trained_by_group(sessions);
    let window_start = today - Duration::days(planning::RECOMMENDATION_WINDOW_DAYS);
    let text = match last.get(group) {
        Some(date) if *date >= window_start => format!(
            "You trained {group} on {} already; if you want to hit it again, try: {picks}.",
            date.format("%Y-%m-%d")
        ),
        Some(date) => format!(
            "{group} hasn't been trained since {}, so it is a good pick today. Try: {picks}.",
            date.format("%Y-%m-%d")
        ),
        None => format!("You haven't trained {group} yet, so it is a good place to start. Try: {picks}."),
    };
    AskOutcome::text(text)
}

fn alternatives(query: &str, sessions: &[WorkoutSession]) -> AskOutcome {
    let normalized = liftlog_core::models::normalize_exercise_name(query);

    // Substitution table first, via the alias map
    if let Some(canonical) = config::alias_canonical(&normalized) {
        if let Some(alts) = config::alternatives_for(canonical) {
            return AskOutcome::with_suggestions(
                format!("Instead of {query}, try: {}.", alts.join(", ")),
                alts.iter().map(|s| (*s).to_owned()).collect(),
            );
        }
    }

    // Then a similarity pass over the table keys
    let best_key = config::EXERCISE_ALTERNATIVES
        .iter()
        .map(|(key, alts)| (similarity_score(&normalized, key), *key, *alts))
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    if let Some((score, key, alts)) = best_key {
        if score >= scoring::ACCEPT_THRESHOLD {
            debug!(query, key, score, "alternatives matched by similarity");
            return AskOutcome::with_suggestions(
                format!("Instead of {query}, try: {}.", alts.join(", ")),
                alts.iter().map(|s| (*s).to_owned()).collect(),
            );
        }
    }

    // History fallback: other exercises sharing a muscle group
    let resolution = resolve_exercise(query, sessions);
    let Some(name) = resolution.matched_exercise.clone() else {
        return unresolved(query, resolution);
    };
    let groups: std::collections::HashSet<String> = instances_of(
        sessions,
        &liftlog_core::models::normalize_exercise_name(&name),
    )
    .iter()
    .flat_map(|i| resolve_contributions(i.exercise))
    .map(|c| c.muscle_group)
    .collect();

    let mut seen = std::collections::HashSet::new();
    let mut peers = Vec::new();
    for session in sessions.iter().filter(|s| !s.is_deleted()) {
        for exercise in &session.exercises {
            let peer_normalized = exercise.normalized_name();
            if peer_normalized == liftlog_core::models::normalize_exercise_name(&name) {
                continue;
            }
            let shares_group = resolve_contributions(exercise)
                .iter()
                .any(|c| groups.contains(&c.muscle_group));
            if shares_group && seen.insert(peer_normalized) {
                peers.push(exercise.name_raw.clone());
            }
        }
    }
    if peers.is_empty() {
        AskOutcome::with_suggestions(
            format!("I don't have substitutions on file for {name}."),
            resolution.suggestions,
        )
    } else {
        peers.truncate(scoring::MAX_SUGGESTIONS);
        AskOutcome::with_suggestions(
            format!(
                "From your own log, these hit the same muscles as {name}: {}.",
                peers.join(", ")
            ),
            peers,
        )
    }
}

fn progress(
    query: &str,
    window_days: Option<i64>,
    sessions: &[WorkoutSession],
    today: NaiveDate,
) -> AskOutcome {
    let resolution = resolve_exercise(query, sessions);
    let Some(name) = resolution.matched_exercise.clone() else {
        return unresolved(query, resolution);
    };
    let normalized = liftlog_core::models::normalize_exercise_name(&name);
    let window = window_days.unwrap_or(planning::DEFAULT_PROGRESS_WINDOW_DAYS);
    let start = today - Duration::days(window);

    let instances: Vec<ExerciseInstance<'_>> = instances_of(sessions, &normalized)
        .into_iter()
        .filter(|i| i.session.performed_on >= start && i.session.performed_on <= today)
        .collect();

    let best_e1rm = |instance: &ExerciseInstance<'_>| -> f64 {
        instance
            .exercise
            .sets
            .iter()
            .map(|s| estimate_one_rep_max(s.weight_value(), s.reps))
            .fold(0.0, f64::max)
    };

    match (instances.first(), instances.last()) {
        (Some(oldest), Some(newest)) if oldest.session.performed_on != newest.session.performed_on => {
            let from = best_e1rm(oldest);
            let to = best_e1rm(newest);
            let trend = ProgressTrend::from_delta(to - from);
            AskOutcome::with_suggestions(
                format!(
                    "{name} looks {} over the last {window} days: estimated 1RM went from {} ({}) to {} ({}).",
                    trend.as_str(),
                    trim_number(from),
                    oldest.session.performed_on.format("%Y-%m-%d"),
                    trim_number(to),
                    newest.session.performed_on.format("%Y-%m-%d"),
                ),
                resolution.suggestions,
            )
        }
        _ => AskOutcome::with_suggestions(
            format!(
                "Not enough {name} records in the last {window} days to read a trend; log a couple more sessions."
            ),
            resolution.suggestions,
        ),
    }
}

fn muscle_group_exercises(muscle_group: &str, sessions: &[WorkoutSession]) -> AskOutcome {
    let canonical = muscle_groups::canonical(muscle_group);
    let group_name = canonical.unwrap_or(muscle_group);

    let known: Vec<&str> = canonical
        .and_then(config::exercises_for_group)
        .map(|e| e.to_vec())
        .unwrap_or_default();

    let mut seen = std::collections::HashSet::new();
    let mut from_history = Vec::new();
    for session in sessions.iter().filter(|s| !s.is_deleted()) {
        for exercise in &session.exercises {
            let targets_group = resolve_contributions(exercise)
                .iter()
                .any(|c| c.muscle_group.eq_ignore_ascii_case(group_name));
            if targets_group && seen.insert(exercise.normalized_name()) {
                from_history.push(exercise.name_raw.clone());
            }
        }
    }

    AskOutcome::Delegated(DelegationContext {
        topic: DelegationTopic::MuscleGroupExercises,
        payload: json!({
            "muscleGroup": group_name,
            "knownExercises": known,
            "historyExercises": from_history,
        }),
    })
}

/// Render a float without a trailing ".0" when it is whole
fn trim_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_number() {
        assert_eq!(trim_number(185.0), "185");
        assert_eq!(trim_number(116.666_67), "116.7");
    }

    #[test]
    fn test_progress_trend_from_delta() {
        assert_eq!(ProgressTrend::from_delta(5.0), ProgressTrend::Improving);
        assert_eq!(ProgressTrend::from_delta(-2.5), ProgressTrend::Declining);
        assert_eq!(ProgressTrend::from_delta(0.0), ProgressTrend::Stable);
    }
}
