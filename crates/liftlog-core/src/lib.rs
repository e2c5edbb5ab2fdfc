// ABOUTME: Core types and constants for the Liftlog workout intelligence platform
// ABOUTME: Foundation crate with error handling, workout models, and muscle-group constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Foundation crate providing shared types and constants for the Liftlog
//! workout intelligence platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **models**: Workout data models (sessions, exercises, sets, backup envelope)
//! - **constants**: Muscle-group allow-list and application-wide constants

/// Unified error handling system with standard error codes and domain errors
pub mod errors;

/// Workout data models (`WorkoutSession`, `WorkoutExercise`, `WorkoutSet`, backup envelope)
pub mod models;

/// Muscle-group allow-list and application constants
pub mod constants;
