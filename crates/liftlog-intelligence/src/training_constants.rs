// ABOUTME: Estimation formulas, scoring weights, and planning thresholds
// ABOUTME: Immutable tuning values shared by the resolver, executors, and plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Training Constants
//!
//! Tuning values for estimation and planning. These are configuration data,
//! not mutable state; changing one changes numeric output everywhere it is
//! used, so they live in one place.

/// One-rep-max estimation
pub mod estimation {
    /// Epley formula divisor: `e1RM = weight × (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;
}

/// Similarity scoring weights used by the exercise resolver
pub mod scoring {
    /// Score for exact normalized match
    pub const EXACT_MATCH_SCORE: f64 = 1.0;
    /// Score when one normalized name contains the other
    pub const CONTAINMENT_SCORE: f64 = 0.9;
    /// Base of the word-overlap band
    pub const WORD_OVERLAP_BASE: f64 = 0.5;
    /// Width of the word-overlap band
    pub const WORD_OVERLAP_RANGE: f64 = 0.4;
    /// Score when any word pair shares a 3-character prefix
    pub const SHARED_PREFIX_SCORE: f64 = 0.4;
    /// Length of the shared prefix required for the prefix fallback
    pub const SHARED_PREFIX_LEN: usize = 3;
    /// Minimum score for an accepted match
    pub const ACCEPT_THRESHOLD: f64 = 0.5;
    /// Minimum score for alternates surfaced next to an accepted match
    pub const SUGGESTION_THRESHOLD: f64 = 0.3;
    /// Minimum similarity between a canonical alias-table name and a history
    /// name for the alias path to claim it
    pub const ALIAS_HISTORY_THRESHOLD: f64 = 0.8;
    /// Maximum suggestions surfaced in any resolver result
    pub const MAX_SUGGESTIONS: usize = 3;
}

/// Workout-plan generation thresholds
pub mod planning {
    /// Exercises trained within this window are excluded from new plans
    pub const RECENT_TRAINING_EXCLUSION_HOURS: i64 = 48;
    /// Recommendation looks for groups untrained within this window
    pub const RECOMMENDATION_WINDOW_DAYS: i64 = 7;
    /// Default timeframe for progress-trend analysis
    pub const DEFAULT_PROGRESS_WINDOW_DAYS: i64 = 90;
    /// Session length at or below this picks the smallest plan
    pub const SHORT_SESSION_MINUTES: u32 = 30;
    /// Session length at or below this picks the medium plan
    pub const MEDIUM_SESSION_MINUTES: u32 = 45;
    /// Smallest plan size
    pub const MIN_PLAN_EXERCISES: usize = 3;
    /// Default plan size when no duration is requested
    pub const DEFAULT_PLAN_EXERCISES: usize = 4;
    /// Largest plan size
    pub const MAX_PLAN_EXERCISES: usize = 5;
    /// Weight targets are rounded to the nearest multiple of this
    pub const TARGET_ROUNDING_INCREMENT: f64 = 2.5;
    /// PR older than this downgrades target confidence to medium
    pub const PR_STALE_MEDIUM_DAYS: i64 = 30;
    /// PR older than this downgrades target confidence to low
    pub const PR_STALE_LOW_DAYS: i64 = 90;
}

/// Estimated one-rep max via the Epley formula.
///
/// A single-rep set already is its one-rep max, so `reps == 1`
/// short-circuits to the raw weight.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps <= 1 {
        weight
    } else {
        weight * (1.0 + f64::from(reps) / estimation::EPLEY_REPS_DIVISOR)
    }
}

/// Round a weight target to the nearest loadable increment
#[must_use]
pub fn round_to_increment(weight: f64) -> f64 {
    let increment = planning::TARGET_ROUNDING_INCREMENT;
    (weight / increment).round() * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley_single_rep_short_circuits() {
        assert!((estimate_one_rep_max(100.0, 1) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_epley_formula() {
        // 100 × (1 + 5/30) = 116.666...
        let e1rm = estimate_one_rep_max(100.0, 5);
        assert!((e1rm - 116.666_666_666_666_67).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_increment() {
        assert!((round_to_increment(101.2) - 100.0).abs() < f64::EPSILON);
        assert!((round_to_increment(101.3) - 102.5).abs() < f64::EPSILON);
        assert!((round_to_increment(86.24) - 85.0).abs() < f64::EPSILON);
    }
}
