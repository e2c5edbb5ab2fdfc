// ABOUTME: Backup envelope validation errors with human-readable messages
// ABOUTME: Distinguishes the legacy version-1 rejection from generic unsupported versions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised while validating or decoding a workout backup envelope.
///
/// Backup integrity is a hard precondition, so the codec returns these
/// rather than degrading to a low-confidence result. Version 1 gets its own
/// variant: a migration path existed for it, and the message must say so
/// instead of reading like a generic schema failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackupError {
    /// Backup root is not a JSON object
    #[error("backup root must be a JSON object")]
    NotAnObject,
    /// A required envelope field is missing
    #[error("backup is missing required field '{0}'")]
    MissingField(&'static str),
    /// An envelope field is present but has the wrong shape
    #[error("backup field '{field}' is invalid: {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Why the field was rejected
        reason: String,
    },
    /// Schema version 1 had a migration path and is explicitly rejected
    #[error("legacy backup version 1 is not supported")]
    LegacyVersion,
    /// Any schema version other than the current one
    #[error("Unsupported backup schema version: {0}")]
    UnsupportedVersion(i64),
    /// The input was not valid JSON at all
    #[error("backup is not valid JSON: {0}")]
    Malformed(String),
}

impl BackupError {
    /// Create an "invalid field" error
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl From<BackupError> for AppError {
    fn from(error: BackupError) -> Self {
        let code = match error {
            BackupError::MissingField(_) => ErrorCode::MissingRequiredField,
            BackupError::Malformed(_) => ErrorCode::SerializationError,
            _ => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_message_is_distinct() {
        assert_eq!(
            BackupError::LegacyVersion.to_string(),
            "legacy backup version 1 is not supported"
        );
        assert_eq!(
            BackupError::UnsupportedVersion(3).to_string(),
            "Unsupported backup schema version: 3"
        );
    }

    #[test]
    fn test_app_error_conversion_codes() {
        let app: AppError = BackupError::MissingField("schemaVersion").into();
        assert_eq!(app.code, ErrorCode::MissingRequiredField);
        let app: AppError = BackupError::LegacyVersion.into();
        assert_eq!(app.code, ErrorCode::InvalidFormat);
    }
}
