// ABOUTME: Parsing pipeline for unreliable model output
// ABOUTME: JSON extraction, exercise normalization, and the muscle-template collaborator seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Model-Output Parser
//!
//! Deterministic extraction and normalization of JSON-shaped workout data
//! out of unreliable model output. Malformed *content* never fails the
//! program here: extraction returns a typed failure and normalization
//! returns a low-confidence batch so callers can degrade gracefully.

use liftlog_core::models::{normalize_exercise_name, MuscleContribution};

/// First-valid-JSON extraction from arbitrary text
pub mod json_extract;
/// Raw-JSON → `ParsedExercise` normalization and validation
pub mod normalizer;

pub use json_extract::{extract_json, ExtractedJson};
pub use normalizer::{normalize_exercises, NormalizedBatch, ParseOptions};

/// Exercise-name → muscle-template lookup, consumed by the normalizer.
///
/// The catalog itself is a collaborator: callers can plug in a tenant- or
/// user-specific table. `None` means the catalog does not know the exercise,
/// leaving the record without muscle attribution.
pub trait MuscleTemplateSource {
    /// Template contributions for an exercise name (raw, not normalized)
    fn contributions_for(&self, exercise_name: &str) -> Option<Vec<MuscleContribution>>;
}

/// The built-in template catalog from the intelligence crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl MuscleTemplateSource for BuiltinTemplates {
    fn contributions_for(&self, exercise_name: &str) -> Option<Vec<MuscleContribution>> {
        liftlog_intelligence::config::template_contributions(&normalize_exercise_name(
            exercise_name,
        ))
    }
}

/// A catalog that knows nothing; disables template-derived attribution
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTemplates;

impl MuscleTemplateSource for NoTemplates {
    fn contributions_for(&self, _exercise_name: &str) -> Option<Vec<MuscleContribution>> {
        None
    }
}
