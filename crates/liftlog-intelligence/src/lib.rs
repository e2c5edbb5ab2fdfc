// ABOUTME: Workout analytics engine for the Liftlog platform
// ABOUTME: Alias resolution, volume aggregation, personal records, and intent executors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! Analytics and query-answering engine over the workout session history.
//! Every component here is a synchronous pure function over in-memory
//! collections: inputs are never mutated, transforms return new collections,
//! and callers may run any number of them concurrently.
//!
//! ## Modules
//!
//! - **resolver**: fuzzy exercise-name resolution used by every query path
//! - **aggregator**: muscle-group training-volume statistics with fractional accounting
//! - **`personal_records`**: per-exercise max-weight records with rep tie-breaks
//! - **executors**: deterministic ask/plan intent execution
//! - **config**: immutable lookup tables (aliases, alternatives, templates, goal bands)
//! - **`training_constants`**: estimation formulas and planning thresholds

/// Immutable lookup tables for aliases, alternatives, and muscle templates
pub mod config;
/// Ask/plan intent shapes and their deterministic executors
pub mod executors;
/// Per-exercise personal-record derivation
pub mod personal_records;
/// Fuzzy exercise-name resolution against session history
pub mod resolver;
/// Estimation formulas and planning thresholds
pub mod training_constants;

/// Muscle-group volume aggregation engine
pub mod aggregator;

pub use aggregator::{
    aggregate_muscle_volume, resolve_contributions, MuscleGroupStats, UncategorizedStats,
    VolumeStats, WeeklySets, WorkoutStats,
};
pub use executors::{
    execute_ask, execute_plan, AskAnswer, AskIntent, AskOutcome, DelegationContext,
    DelegationTopic, PlanRequest, PlannedExercise, PrMetric, TargetConfidence, TrainingGoal,
    VolumeWindow, WeightTarget, WorkoutPlan,
};
pub use personal_records::{calculate_personal_records, personal_record_for, PersonalRecord};
pub use resolver::{resolve_exercise, similarity_score, ExerciseMatch};
