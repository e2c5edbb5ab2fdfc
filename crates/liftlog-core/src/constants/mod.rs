// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Muscle-group allow-list and service identity for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Application Constants
//!
//! Immutable configuration data. These are static read-only tables, never
//! mutable module state.

/// Muscle-group allow-list and canonicalization
pub mod muscle_groups {
    /// The fixed set of muscle-group names accepted anywhere in the system.
    /// Model-provided contributions naming anything else are dropped.
    pub const MUSCLE_GROUPS: &[&str] = &[
        "Chest",
        "Back",
        "Shoulders",
        "Arms",
        "Legs",
        "Glutes",
        "Core",
    ];

    /// Whether `name` is in the allow-list (case-insensitive)
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        canonical(name).is_some()
    }

    /// Canonical allow-list spelling for `name`, if it is a known group
    #[must_use]
    pub fn canonical(name: &str) -> Option<&'static str> {
        let trimmed = name.trim();
        MUSCLE_GROUPS
            .iter()
            .find(|g| g.eq_ignore_ascii_case(trimmed))
            .copied()
    }
}

/// Service identity constants for structured logging
pub mod service_names {
    /// Service name attached to log output
    pub const SERVICE_NAME: &str = "liftlog";
}

#[cfg(test)]
mod tests {
    use super::muscle_groups;

    #[test]
    fn test_canonical_is_case_insensitive() {
        assert_eq!(muscle_groups::canonical("chest"), Some("Chest"));
        assert_eq!(muscle_groups::canonical(" SHOULDERS "), Some("Shoulders"));
        assert_eq!(muscle_groups::canonical("Neck"), None);
    }
}
