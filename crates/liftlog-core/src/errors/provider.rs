// ABOUTME: Error taxonomy for text-completion provider failures
// ABOUTME: Categorized once at the I/O boundary and passed through unchanged by the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Failure categories for the external text-completion capability.
///
/// The core never retries or times out; it only needs stable categories so
/// callers can decide what to surface. Anything the provider reports that
/// does not fit a known category lands in `Upstream`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The configured API key was rejected
    #[error("provider rejected the API key")]
    InvalidApiKey,
    /// The provider applied rate limiting
    #[error("provider rate limit exceeded")]
    RateLimited,
    /// The account's usage quota is exhausted
    #[error("provider usage quota exhausted")]
    InsufficientQuota,
    /// The provider could not be reached
    #[error("network error talking to provider: {0}")]
    NetworkError(String),
    /// The provider returned an error the boundary could not categorize
    #[error("provider error: {0}")]
    Upstream(String),
}

impl ProviderError {
    /// Stable machine-readable identifier for this failure class
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "invalid_api_key",
            Self::RateLimited => "rate_limited",
            Self::InsufficientQuota => "insufficient_quota",
            Self::NetworkError(_) => "network_error",
            Self::Upstream(_) => "provider_error",
        }
    }

    /// Whether retrying the same request later could plausibly succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::NetworkError(_))
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match error {
            ProviderError::InvalidApiKey => ErrorCode::ExternalAuthFailed,
            ProviderError::RateLimited => ErrorCode::ExternalRateLimited,
            ProviderError::InsufficientQuota => ErrorCode::QuotaExceeded,
            ProviderError::NetworkError(_) => ErrorCode::ExternalServiceUnavailable,
            ProviderError::Upstream(_) => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(ProviderError::InvalidApiKey.kind(), "invalid_api_key");
        assert_eq!(ProviderError::RateLimited.kind(), "rate_limited");
        assert_eq!(
            ProviderError::InsufficientQuota.kind(),
            "insufficient_quota"
        );
        assert_eq!(
            ProviderError::NetworkError("timeout".into()).kind(),
            "network_error"
        );
        assert_eq!(
            ProviderError::Upstream("500".into()).kind(),
            "provider_error"
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::RateLimited.is_transient());
        assert!(!ProviderError::InvalidApiKey.is_transient());
    }
}
