// ABOUTME: Workout data models shared across the Liftlog workspace
// ABOUTME: Re-exports session/exercise/set types and the backup envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Workout Data Models
//!
//! The Session → Exercise → Set hierarchy plus the transient `ParsedExercise`
//! record produced by the normalizer and the versioned backup envelope.
//!
//! All model types serialize with camelCase field names: the wire format is
//! shared with the mobile client and its backup files.

/// Versioned backup envelope
pub mod backup;
/// Session, exercise, set, and contribution types
pub mod workout;

pub use backup::{WorkoutBackup, BACKUP_SCHEMA_VERSION, LEGACY_BACKUP_SCHEMA_VERSION};
pub use workout::{
    infer_bodyweight, iso_week_id, normalize_exercise_name, parse_weight_text, Confidence,
    ContributionSource, MuscleContribution, ParsedExercise, WorkoutExercise, WorkoutSession,
    WorkoutSet,
};
