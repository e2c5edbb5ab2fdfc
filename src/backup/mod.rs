// ABOUTME: Backup codec for the versioned workout-session envelope
// ABOUTME: Serialization plus strict validation; backup integrity is a hard precondition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Backup Codec
//!
//! Serializes and deserializes the full session list with a versioned,
//! validated envelope. Unlike the parsing pipeline, the codec *does* fail
//! hard: a backup that does not validate is rejected with a typed
//! [`BackupError`] carrying a human-readable message.

use chrono::Utc;
use liftlog_core::errors::{AppResult, BackupError};
use liftlog_core::models::{
    WorkoutBackup, WorkoutSession, BACKUP_SCHEMA_VERSION, LEGACY_BACKUP_SCHEMA_VERSION,
};
use serde_json::Value;
use tracing::debug;

/// Serialize the session list into a version-2 backup envelope.
///
/// # Errors
///
/// Returns a serialization error if the session list cannot be encoded,
/// which only happens when a session contains non-serializable data.
pub fn stringify_workout_backup(sessions: &[WorkoutSession]) -> AppResult<String> {
    let backup = WorkoutBackup {
        schema_version: BACKUP_SCHEMA_VERSION,
        exported_at: Utc::now().to_rfc3339(),
        workout_sessions: sessions.to_vec(),
    };
    debug!(sessions = sessions.len(), "exporting workout backup");
    Ok(serde_json::to_string_pretty(&backup)?)
}

/// Parse and validate a backup envelope, returning its session list.
///
/// Validation order: the root must be a JSON object, `schemaVersion` must be
/// present and integral, version 1 is rejected with the distinct legacy
/// message, any other version ≠ 2 is rejected as unsupported,
/// `workoutSessions` must be an array, and every session needs a non-empty
/// `performedOn`.
///
/// # Errors
///
/// Returns a [`BackupError`] describing the first validation failure.
pub fn parse_workout_backup(input: &str) -> Result<Vec<WorkoutSession>, BackupError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| BackupError::Malformed(e.to_string()))?;
    let root = value.as_object().ok_or(BackupError::NotAnObject)?;

    let version = root
        .get("schemaVersion")
        .ok_or(BackupError::MissingField("schemaVersion"))?
        .as_i64()
        .ok_or_else(|| BackupError::invalid_field("schemaVersion", "must be an integer"))?;
    if version == LEGACY_BACKUP_SCHEMA_VERSION {
        return Err(BackupError::LegacyVersion);
    }
    if version != BACKUP_SCHEMA_VERSION {
        return Err(BackupError::UnsupportedVersion(version));
    }

    let sessions_value = root
        .get("workoutSessions")
        .ok_or(BackupError::MissingField("workoutSessions"))?;
    let sessions_array = sessions_value
        .as_array()
        .ok_or_else(|| BackupError::invalid_field("workoutSessions", "must be an array"))?;

    for (index, session) in sessions_array.iter().enumerate() {
        let performed_on = session
            .get("performedOn")
            .and_then(Value::as_str)
            .unwrap_or("");
        if performed_on.trim().is_empty() {
            return Err(BackupError::invalid_field(
                "workoutSessions",
                format!("session at index {index} has no performedOn date"),
            ));
        }
    }

    let sessions: Vec<WorkoutSession> = serde_json::from_value(sessions_value.clone())
        .map_err(|e| BackupError::Malformed(e.to_string()))?;
    debug!(sessions = sessions.len(), "imported workout backup");
    Ok(sessions)
}
