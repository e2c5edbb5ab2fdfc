// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Env-driven level and format selection over tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! Structured logging configuration with env-driven setup

use std::env;

use liftlog_core::constants::service_names;
use liftlog_core::errors::{AppError, AppResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter when `RUST_LOG` is not set (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Service name attached to log lines
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: service_names::SERVICE_NAME.into(),
        }
    }
}

impl LoggingConfig {
    /// Build configuration from environment variables.
    ///
    /// - `LIFTLOG_LOG_LEVEL`: default filter when `RUST_LOG` is unset
    /// - `LIFTLOG_LOG_FORMAT`: `json`, `pretty`, or `compact`
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = env::var("LIFTLOG_LOG_LEVEL") {
            config.level = level;
        }
        if let Ok(format) = env::var("LIFTLOG_LOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "compact" => LogFormat::Compact,
                _ => LogFormat::Pretty,
            };
        }
        config
    }
}

/// Initialize the global tracing subscriber from configuration.
///
/// # Errors
///
/// Returns a configuration error when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stdout).json())
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
    };
    result.map_err(|e| AppError::config(format!("failed to initialize logging: {e}")))
}
