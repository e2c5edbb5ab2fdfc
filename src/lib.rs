// ABOUTME: Main library entry point for the Liftlog workout intelligence platform
// ABOUTME: LLM-output parsing, session merging, backup codec, and analytics re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

#![deny(unsafe_code)]

//! # Liftlog
//!
//! Liftlog ingests free-form, LLM-generated text describing workouts and
//! turns it into validated, structured exercise records. It answers ad-hoc
//! analytical questions against the resulting training log and aggregates
//! the log into muscle-group training-volume statistics.
//!
//! ## Architecture
//!
//! The workspace follows a modular architecture:
//! - **parser**: JSON extraction from model output and exercise normalization
//! - **sessions**: the Session → Exercise → Set merge logic
//! - **backup**: versioned backup envelope codec
//! - **llm**: the text-completion collaborator contract and its error taxonomy
//! - **intelligence**: alias resolution, volume aggregation, PRs, and intent
//!   executors (re-exported from the `liftlog-intelligence` crate)
//! - **models** / **errors** / **constants**: foundation types from the
//!   `liftlog-core` crate
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use liftlog::parser::{extract_json, normalize_exercises, BuiltinTemplates, ParseOptions};
//! use liftlog::sessions::{merge_exercises_into_sessions, UuidIdFactory};
//!
//! let reply = "Logged it!\n```json\n[{\"exercise\": \"Bench Press\", \"sets\": 3,
//!              \"reps\": [5, 5, 5], \"weights\": [\"185\", \"185\", \"185\"],
//!              \"date\": \"2026-08-03\"}]\n```";
//! let extracted = extract_json(reply).unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
//! let batch = normalize_exercises(
//!     &extracted.value,
//!     &ParseOptions::default(),
//!     today,
//!     &BuiltinTemplates,
//! );
//! assert!(batch.success);
//!
//! let mut ids = UuidIdFactory;
//! let sessions = merge_exercises_into_sessions(&[], &batch.exercises, &mut ids, Utc::now());
//! assert_eq!(sessions.len(), 1);
//! ```

/// Versioned backup envelope codec
pub mod backup;
/// Environment-driven configuration for the parsing pipeline
pub mod config;
/// Text-completion collaborator contract and provider error taxonomy
pub mod llm;
/// Logging configuration and structured logging setup
pub mod logging;
/// JSON extraction and exercise normalization for model output
pub mod parser;
/// Session merge logic and id factories
pub mod sessions;

/// Analytics engine re-exports from the `liftlog-intelligence` crate
pub mod intelligence;

// Foundation types re-exported from liftlog-core so callers need one import path
pub use liftlog_core::constants;
pub use liftlog_core::errors;
pub use liftlog_core::models;
