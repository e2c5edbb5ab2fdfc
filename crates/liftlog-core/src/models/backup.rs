// ABOUTME: Versioned backup envelope wrapping the full session list
// ABOUTME: Schema version 2 is current; version 1 is recognized but rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use serde::{Deserialize, Serialize};

use super::workout::WorkoutSession;

/// Current backup schema version
pub const BACKUP_SCHEMA_VERSION: i64 = 2;

/// The retired version-1 schema. Recognized so its rejection message can
/// point at the migration history instead of reading as a generic failure.
pub const LEGACY_BACKUP_SCHEMA_VERSION: i64 = 1;

/// Versioned envelope around an exported session list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutBackup {
    /// Envelope schema version; must equal [`BACKUP_SCHEMA_VERSION`]
    pub schema_version: i64,
    /// RFC 3339 timestamp of when the export was produced
    pub exported_at: String,
    /// Complete session list, soft-deleted sessions included
    pub workout_sessions: Vec<WorkoutSession>,
}
