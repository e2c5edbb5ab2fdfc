// ABOUTME: Typed failure classification for JSON extraction from model output
// ABOUTME: Distinguishes text with no JSON at all from text that looked like JSON but failed to parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Failure classification for JSON extraction.
///
/// The distinction matters downstream: `InvalidJson` means the model tried to
/// emit JSON and got it wrong, which drives different user-facing diagnostics
/// and confidence scoring than a response with no JSON at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No JSON object or array candidate was found in the text
    #[error("no JSON value found in model output")]
    NoJsonFound,
    /// A candidate span was found but could not be parsed as JSON
    #[error("model output looked like JSON but failed to parse")]
    InvalidJson,
}

impl ExtractError {
    /// Stable machine-readable identifier for this failure class
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoJsonFound => "no_json_found",
            Self::InvalidJson => "invalid_json",
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(error: ExtractError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string()).with_source(error)
    }
}
