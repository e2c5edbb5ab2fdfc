// ABOUTME: Discriminated intent shapes consumed by the ask/plan executors
// ABOUTME: Produced by the external intent classifier; unknown types fail deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// PR metric variants for the `personal_record` intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrMetric {
    /// Heaviest recorded weight
    #[default]
    MaxWeight,
    /// Epley-estimated one-rep max
    #[serde(rename = "estimated_1rm")]
    Estimated1Rm,
    /// Single set with the highest `weight × reps`
    BestVolume,
}

/// Date window selection for volume summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolumeWindow {
    /// The trailing 7 days
    Week,
    /// The trailing 30 days
    Month,
    /// An explicit inclusive date range
    Custom {
        /// First day of the range
        start: NaiveDate,
        /// Last day of the range
        end: NaiveDate,
    },
}

impl Default for VolumeWindow {
    fn default() -> Self {
        Self::Week
    }
}

/// A pre-classified analytical question over the session history.
///
/// The discriminant is the external classifier's `type` field; a payload
/// with an unknown `type` fails deserialization before it can reach the
/// executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AskIntent {
    /// When was this exercise last performed
    LastPerformed {
        /// Free-text exercise reference
        exercise: String,
    },
    /// Full set breakdown of the most recent instance
    LastSets {
        /// Free-text exercise reference
        exercise: String,
    },
    /// Personal-record metrics for one exercise
    PersonalRecord {
        /// Free-text exercise reference
        exercise: String,
        /// Which PR metric to report
        #[serde(default)]
        metric: PrMetric,
    },
    /// Training volume over a date window
    VolumeSummary {
        /// Window selection, defaulting to the trailing week
        #[serde(default)]
        window: VolumeWindow,
    },
    /// Summary of the most recent session
    LastSession,
    /// What to train next
    Recommendation {
        /// Optional user-specified muscle-group focus
        #[serde(default)]
        focus: Option<String>,
    },
    /// Substitutions for an exercise
    Alternatives {
        /// Free-text exercise reference
        exercise: String,
    },
    /// Trend analysis for one exercise over a timeframe
    Progress {
        /// Free-text exercise reference
        exercise: String,
        /// Timeframe in days; defaults to the standard progress window
        #[serde(default)]
        window_days: Option<i64>,
    },
    /// Open-ended conversation, delegated to the language model
    GeneralChat {
        /// The user's message verbatim
        message: String,
    },
    /// Exercise catalog for a muscle group, delegated to the language model
    MuscleGroupExercises {
        /// Requested muscle group
        muscle_group: String,
    },
}

/// Training goal driving target-percentage selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Heavy loads, low reps
    Strength,
    /// Moderate loads, moderate reps
    #[default]
    Hypertrophy,
    /// Light loads, high reps
    Conditioning,
}

impl TrainingGoal {
    /// Stable name used for lookups and display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Conditioning => "conditioning",
        }
    }
}

/// A pre-classified workout-plan request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlanRequest {
    /// Muscle-group focus; omitted picks the least-recently-trained group
    #[serde(default)]
    pub focus: Option<String>,
    /// Requested session length in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Training goal
    #[serde(default)]
    pub goal: TrainingGoal,
    /// Whether to attach personalized weight targets derived from PR data
    #[serde(default)]
    pub include_targets: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_tag_round_trip() {
        let json = r#"{"type":"last_performed","exercise":"bench"}"#;
        let intent: AskIntent = serde_json::from_str(json).unwrap();
        assert_eq!(
            intent,
            AskIntent::LastPerformed {
                exercise: "bench".into()
            }
        );
    }

    #[test]
    fn test_unknown_intent_type_is_rejected() {
        let json = r#"{"type":"order_pizza","toppings":["pepperoni"]}"#;
        assert!(serde_json::from_str::<AskIntent>(json).is_err());
    }

    #[test]
    fn test_metric_defaults_to_max_weight() {
        let json = r#"{"type":"personal_record","exercise":"squat"}"#;
        let intent: AskIntent = serde_json::from_str(json).unwrap();
        assert_eq!(
            intent,
            AskIntent::PersonalRecord {
                exercise: "squat".into(),
                metric: PrMetric::MaxWeight
            }
        );
    }
}
