// ABOUTME: Immutable lookup tables for exercise aliases, alternatives, and muscle templates
// ABOUTME: Static read-only configuration data, never mutable module state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Intelligence Configuration Tables
//!
//! Fixed lookup tables consumed by the resolver, aggregator, and executors.
//! All keys are stored in normalized form (lowercase, word characters and
//! spaces only) so lookups can use [`normalize_exercise_name`] output
//! directly.

use liftlog_core::models::{ContributionSource, MuscleContribution};

/// Informal aliases for canonical exercise names.
///
/// The first column is the canonical normalized name; the alias list is what
/// users actually type. Canonical names themselves also match.
pub const EXERCISE_ALIASES: &[(&str, &[&str])] = &[
    ("bench press", &["bench", "bp", "flat bench"]),
    ("incline bench press", &["incline bench", "incline press"]),
    ("deadlift", &["dl", "conv dl", "deads", "deadlifts"]),
    ("romanian deadlift", &["rdl", "rdls", "stiff leg deadlift"]),
    ("squat", &["back squat", "squats"]),
    ("front squat", &["fsquat"]),
    ("overhead press", &["ohp", "military press", "strict press"]),
    ("barbell row", &["bb row", "bent over row", "rows"]),
    ("pull up", &["pullup", "pullups"]),
    ("chin up", &["chinup", "chins"]),
    ("lat pulldown", &["pulldown", "pulldowns"]),
    ("bicep curl", &["curls", "barbell curl", "db curl"]),
    ("tricep pushdown", &["pushdown", "pushdowns"]),
    ("hip thrust", &["hip thrusts", "thrusts"]),
    ("lateral raise", &["side raise", "lat raise"]),
];

/// Substitution table for the alternatives executor branch
pub const EXERCISE_ALTERNATIVES: &[(&str, &[&str])] = &[
    (
        "bench press",
        &[
            "Dumbbell Bench Press",
            "Incline Bench Press",
            "Weighted Dip",
            "Push-Up",
        ],
    ),
    (
        "squat",
        &[
            "Front Squat",
            "Leg Press",
            "Bulgarian Split Squat",
            "Hack Squat",
        ],
    ),
    (
        "deadlift",
        &[
            "Romanian Deadlift",
            "Trap Bar Deadlift",
            "Rack Pull",
            "Hip Thrust",
        ],
    ),
    (
        "overhead press",
        &["Dumbbell Shoulder Press", "Arnold Press", "Landmine Press"],
    ),
    (
        "barbell row",
        &["Dumbbell Row", "Seated Cable Row", "Chest-Supported Row"],
    ),
    ("pull up", &["Lat Pulldown", "Chin-Up", "Assisted Pull-Up"]),
    ("lat pulldown", &["Pull-Up", "Straight-Arm Pulldown"]),
    (
        "bicep curl",
        &["Hammer Curl", "Incline Dumbbell Curl", "Cable Curl"],
    ),
    ("leg press", &["Squat", "Hack Squat", "Bulgarian Split Squat"]),
    (
        "hip thrust",
        &["Glute Bridge", "Romanian Deadlift", "Cable Pull-Through"],
    ),
];

/// Exercises suggested for each muscle group, used by plan generation and
/// the muscle-group delegation payload
pub const MUSCLE_GROUP_EXERCISES: &[(&str, &[&str])] = &[
    (
        "Chest",
        &[
            "Bench Press",
            "Incline Dumbbell Press",
            "Cable Fly",
            "Weighted Dip",
            "Push-Up",
        ],
    ),
    (
        "Back",
        &[
            "Deadlift",
            "Barbell Row",
            "Pull-Up",
            "Lat Pulldown",
            "Seated Cable Row",
        ],
    ),
    (
        "Shoulders",
        &[
            "Overhead Press",
            "Lateral Raise",
            "Arnold Press",
            "Rear Delt Fly",
            "Face Pull",
        ],
    ),
    (
        "Arms",
        &[
            "Bicep Curl",
            "Tricep Pushdown",
            "Hammer Curl",
            "Skull Crusher",
            "Chin-Up",
        ],
    ),
    (
        "Legs",
        &[
            "Squat",
            "Romanian Deadlift",
            "Leg Press",
            "Walking Lunge",
            "Leg Curl",
        ],
    ),
    (
        "Glutes",
        &[
            "Hip Thrust",
            "Bulgarian Split Squat",
            "Glute Bridge",
            "Cable Pull-Through",
            "Sumo Deadlift",
        ],
    ),
    (
        "Core",
        &[
            "Plank",
            "Hanging Leg Raise",
            "Cable Crunch",
            "Ab Wheel Rollout",
            "Russian Twist",
        ],
    ),
];

/// Target load as a fraction of estimated 1RM, per training goal
pub const GOAL_TARGET_PERCENTAGES: &[(&str, f64)] = &[
    ("strength", 0.85),
    ("hypertrophy", 0.72),
    ("conditioning", 0.55),
];

/// Muscle-template rows: normalized exercise name, direct group, and
/// fractional secondary groups
const EXERCISE_TEMPLATES: &[(&str, &str, &[(&str, f64)])] = &[
    ("bench press", "Chest", &[("Shoulders", 0.5), ("Arms", 0.5)]),
    (
        "incline bench press",
        "Chest",
        &[("Shoulders", 0.5), ("Arms", 0.5)],
    ),
    ("push up", "Chest", &[("Shoulders", 0.5), ("Arms", 0.5)]),
    ("weighted dip", "Chest", &[("Arms", 0.5), ("Shoulders", 0.25)]),
    ("cable fly", "Chest", &[("Shoulders", 0.25)]),
    (
        "deadlift",
        "Back",
        &[("Legs", 0.5), ("Glutes", 0.5), ("Core", 0.25)],
    ),
    ("barbell row", "Back", &[("Arms", 0.5)]),
    ("pull up", "Back", &[("Arms", 0.5)]),
    ("chin up", "Back", &[("Arms", 0.75)]),
    ("lat pulldown", "Back", &[("Arms", 0.5)]),
    ("seated cable row", "Back", &[("Arms", 0.5)]),
    ("overhead press", "Shoulders", &[("Arms", 0.5), ("Core", 0.25)]),
    ("arnold press", "Shoulders", &[("Arms", 0.5)]),
    ("lateral raise", "Shoulders", &[]),
    ("rear delt fly", "Shoulders", &[("Back", 0.25)]),
    ("face pull", "Shoulders", &[("Back", 0.5)]),
    ("bicep curl", "Arms", &[]),
    ("hammer curl", "Arms", &[]),
    ("tricep pushdown", "Arms", &[]),
    ("skull crusher", "Arms", &[]),
    ("squat", "Legs", &[("Glutes", 0.5), ("Core", 0.25)]),
    ("front squat", "Legs", &[("Core", 0.5)]),
    (
        "romanian deadlift",
        "Legs",
        &[("Glutes", 0.5), ("Back", 0.25)],
    ),
    ("leg press", "Legs", &[("Glutes", 0.5)]),
    (
        "walking lunge",
        "Legs",
        &[("Glutes", 0.5), ("Core", 0.25)],
    ),
    ("leg curl", "Legs", &[]),
    ("hip thrust", "Glutes", &[("Legs", 0.5)]),
    ("glute bridge", "Glutes", &[("Legs", 0.25)]),
    (
        "bulgarian split squat",
        "Legs",
        &[("Glutes", 0.75), ("Core", 0.25)],
    ),
    (
        "sumo deadlift",
        "Glutes",
        &[("Legs", 0.5), ("Back", 0.5)],
    ),
    ("plank", "Core", &[]),
    ("hanging leg raise", "Core", &[]),
    ("cable crunch", "Core", &[]),
    ("ab wheel rollout", "Core", &[("Shoulders", 0.25)]),
    ("russian twist", "Core", &[]),
];

/// Canonical name for a normalized query, when it matches an alias-table
/// canonical name or one of its aliases
#[must_use]
pub fn alias_canonical(normalized_query: &str) -> Option<&'static str> {
    EXERCISE_ALIASES
        .iter()
        .find(|(canonical, aliases)| {
            *canonical == normalized_query || aliases.contains(&normalized_query)
        })
        .map(|(canonical, _)| *canonical)
}

/// Substitutions for a canonical normalized exercise name
#[must_use]
pub fn alternatives_for(normalized_name: &str) -> Option<&'static [&'static str]> {
    EXERCISE_ALTERNATIVES
        .iter()
        .find(|(name, _)| *name == normalized_name)
        .map(|(_, alts)| *alts)
}

/// Suggested exercises for a canonical muscle-group name
#[must_use]
pub fn exercises_for_group(group: &str) -> Option<&'static [&'static str]> {
    MUSCLE_GROUP_EXERCISES
        .iter()
        .find(|(g, _)| g.eq_ignore_ascii_case(group))
        .map(|(_, exercises)| *exercises)
}

/// Target fraction of e1RM for a training goal name
#[must_use]
pub fn goal_target_percentage(goal: &str) -> Option<f64> {
    GOAL_TARGET_PERCENTAGES
        .iter()
        .find(|(g, _)| g.eq_ignore_ascii_case(goal))
        .map(|(_, pct)| *pct)
}

/// Template-derived muscle contributions for a normalized exercise name.
///
/// The direct group carries fraction 1.0; secondaries carry their table
/// fraction. Returns `None` for exercises the template catalog does not
/// know, in which case the caller decides whether to fall back.
#[must_use]
pub fn template_contributions(normalized_name: &str) -> Option<Vec<MuscleContribution>> {
    EXERCISE_TEMPLATES
        .iter()
        .find(|(name, _, _)| *name == normalized_name)
        .map(|(_, direct, secondaries)| {
            let mut contributions =
                vec![MuscleContribution::direct(*direct, ContributionSource::Template)];
            contributions.extend(secondaries.iter().map(|(group, fraction)| {
                MuscleContribution::fractional(*group, *fraction, ContributionSource::Template)
            }));
            contributions
        })
}
