// ABOUTME: Fuzzy exercise-name resolution against the user's session history
// ABOUTME: Alias-table fast path, then similarity scoring with threshold-gated suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Exercise Alias Resolver
//!
//! Maps a free-text exercise reference ("benched", "dl") to a canonical
//! exercise name actually present in the session history. Every ask/plan
//! executor branch that takes an exercise name goes through this single
//! implementation, so thresholds and tie-breaks are identical at every call
//! site.

use liftlog_core::models::{normalize_exercise_name, WorkoutSession};
use tracing::debug;

use crate::config;
use crate::training_constants::scoring;

/// Outcome of resolving a free-text exercise reference
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseMatch {
    /// Best-matching exercise name from history, verbatim as recorded
    pub matched_exercise: Option<String>,
    /// Confidence score of the accepted match, 0.0 when none was accepted
    pub score: f64,
    /// Up to 3 alternative names: near-misses on acceptance, best guesses
    /// on rejection
    pub suggestions: Vec<String>,
}

impl ExerciseMatch {
    fn no_match(suggestions: Vec<String>) -> Self {
        Self {
            matched_exercise: None,
            score: 0.0,
            suggestions,
        }
    }
}

/// Similarity between two already-normalized exercise names.
///
/// Exact match scores 1.0, containment either direction 0.9, word overlap
/// lands in [0.5, 0.9] proportional to how many query words appear in the
/// target, a shared 3-character prefix between any word pair 0.4, anything
/// else 0.
#[must_use]
pub fn similarity_score(query: &str, target: &str) -> f64 {
    if query.is_empty() || target.is_empty() {
        return 0.0;
    }
    if query == target {
        return scoring::EXACT_MATCH_SCORE;
    }
    if query.contains(target) || target.contains(query) {
        return scoring::CONTAINMENT_SCORE;
    }

    let query_words: Vec<&str> = query.split_whitespace().collect();
    let target_words: Vec<&str> = target.split_whitespace().collect();
    if query_words.is_empty() || target_words.is_empty() {
        return 0.0;
    }

    let overlapping = query_words
        .iter()
        .filter(|qw| {
            target_words
                .iter()
                .any(|tw| qw.contains(tw) || tw.contains(*qw))
        })
        .count();

    if overlapping > 0 {
        let ratio = overlapping as f64 / query_words.len() as f64;
        return scoring::WORD_OVERLAP_RANGE.mul_add(ratio, scoring::WORD_OVERLAP_BASE);
    }

    // Char-wise comparison: byte slicing could split a multi-byte character
    let shares_prefix = query_words.iter().any(|qw| {
        target_words.iter().any(|tw| {
            qw.chars().count() >= scoring::SHARED_PREFIX_LEN
                && tw.chars().count() >= scoring::SHARED_PREFIX_LEN
                && qw
                    .chars()
                    .take(scoring::SHARED_PREFIX_LEN)
                    .eq(tw.chars().take(scoring::SHARED_PREFIX_LEN))
        })
    });
    if shares_prefix {
        return scoring::SHARED_PREFIX_SCORE;
    }

    0.0
}

/// Distinct exercise names across the history, verbatim, in first-seen order.
/// Soft-deleted sessions do not contribute.
fn distinct_history_names(sessions: &[WorkoutSession]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut names = Vec::new();
    for session in sessions.iter().filter(|s| !s.is_deleted()) {
        for exercise in &session.exercises {
            if seen.insert(exercise.normalized_name()) {
                names.push(exercise.name_raw.clone());
            }
        }
    }
    names
}

/// Resolve a free-text exercise reference against the session history.
///
/// Resolution order: alias-table fast path (score 1.0), then similarity
/// scoring over every distinct history name. A top candidate scoring at
/// least 0.5 is accepted, with the next 3 candidates at or above 0.3 as
/// alternates; otherwise no match is reported and the top 3 candidates of
/// any score become the suggestions.
#[must_use]
pub fn resolve_exercise(query: &str, sessions: &[WorkoutSession]) -> ExerciseMatch {
    let normalized_query = normalize_exercise_name(query);
    let history = distinct_history_names(sessions);

    if normalized_query.is_empty() || history.is_empty() {
        return ExerciseMatch::no_match(Vec::new());
    }

    // Alias fast path: a query naming a known canonical (or one of its
    // informal aliases) claims the history entry closest to that canonical.
    if let Some(canonical) = config::alias_canonical(&normalized_query) {
        let claimed = history.iter().find(|name| {
            let normalized = normalize_exercise_name(name);
            normalized == canonical
                || similarity_score(canonical, &normalized) >= scoring::ALIAS_HISTORY_THRESHOLD
        });
        if let Some(name) = claimed {
            debug!(query, canonical, matched = %name, "alias table resolved exercise");
            return ExerciseMatch {
                matched_exercise: Some(name.clone()),
                score: scoring::EXACT_MATCH_SCORE,
                suggestions: Vec::new(),
            };
        }
    }

    // Score every distinct history name; stable sort keeps first-seen order
    // for equal scores.
    let mut candidates: Vec<(String, f64)> = history
        .into_iter()
        .map(|name| {
            let score = similarity_score(&normalized_query, &normalize_exercise_name(&name));
            (name, score)
        })
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((best_name, best_score)) = candidates.first().cloned() else {
        return ExerciseMatch::no_match(Vec::new());
    };

    if best_score >= scoring::ACCEPT_THRESHOLD {
        let suggestions = candidates
            .iter()
            .skip(1)
            .filter(|(_, score)| *score >= scoring::SUGGESTION_THRESHOLD)
            .take(scoring::MAX_SUGGESTIONS)
            .map(|(name, _)| name.clone())
            .collect();
        debug!(query, matched = %best_name, score = best_score, "similarity resolved exercise");
        ExerciseMatch {
            matched_exercise: Some(best_name),
            score: best_score,
            suggestions,
        }
    } else {
        debug!(query, best_score, "no exercise match accepted");
        ExerciseMatch::no_match(
            candidates
                .iter()
                .take(scoring::MAX_SUGGESTIONS)
                .map(|(name, _)| name.clone())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_exact() {
        assert!((similarity_score("bench press", "bench press") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_containment_both_directions() {
        assert!((similarity_score("bench", "bench press") - 0.9).abs() < f64::EPSILON);
        assert!((similarity_score("incline bench press", "bench press") - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_word_overlap_band() {
        // "benched" is not a substring of "bench press", but the word
        // "bench" is contained in "benched": full overlap of the single
        // query word lands at the top of the band.
        let score = similarity_score("benched", "bench press");
        assert!((score - 0.9).abs() < 1e-9);

        // one of two query words overlaps: 0.5 + 0.4 × 0.5
        let score = similarity_score("cable bench", "cable fly");
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_shared_prefix() {
        assert!((similarity_score("squatting", "squish press") - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_disjoint() {
        assert!(similarity_score("plank", "curl").abs() < f64::EPSILON);
    }
}
