// ABOUTME: Environment-driven configuration for the parsing pipeline
// ABOUTME: Reads normalizer option defaults from LIFTLOG_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! Environment-only configuration. There is no config file; deployments set
//! `LIFTLOG_*` variables and everything else uses defaults.

use std::env;

use crate::parser::ParseOptions;

/// Parse a boolean-ish environment variable
fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Pipeline configuration resolved from the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Normalizer option defaults
    pub options: ParseOptions,
}

impl ParserConfig {
    /// Build configuration from environment variables.
    ///
    /// - `LIFTLOG_USE_TEMPLATE_MUSCLES`: derive attributions from the
    ///   template catalog (default true)
    /// - `LIFTLOG_ALLOW_MODEL_MUSCLES`: accept sanitized model-provided
    ///   attributions when templates are off (default false)
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = ParseOptions::default();
        if let Some(flag) = env_flag("LIFTLOG_USE_TEMPLATE_MUSCLES") {
            options.use_template_muscles = flag;
        }
        if let Some(flag) = env_flag("LIFTLOG_ALLOW_MODEL_MUSCLES") {
            options.allow_model_provided_muscles = flag;
        }
        Self { options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_prefer_templates() {
        let config = ParserConfig::default();
        assert!(config.options.use_template_muscles);
        assert!(!config.options.allow_model_provided_muscles);
    }
}
