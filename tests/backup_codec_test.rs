// ABOUTME: Integration tests for the versioned backup envelope codec
// ABOUTME: Covers round-trip fidelity and every validation failure path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

mod common;

use anyhow::Result;
use common::{build_exercise_with_contributions, build_session, simple_session};
use liftlog::backup::{parse_workout_backup, stringify_workout_backup};
use liftlog::errors::BackupError;
use liftlog::models::{ContributionSource, MuscleContribution};

#[test]
fn test_round_trip_preserves_sessions_exactly() -> Result<()> {
    let mut deleted = simple_session("s2", "2026-07-15", "Squat", &[(5, "225")]);
    deleted.deleted_at = Some(common::fixed_now());

    let sessions = vec![
        build_session(
            "s1",
            "2026-08-01",
            vec![build_exercise_with_contributions(
                "s1",
                "Bench Press",
                vec![
                    MuscleContribution {
                        muscle_group: "Chest".to_owned(),
                        fraction: 1.0,
                        is_direct: true,
                        source: ContributionSource::Template,
                    },
                    MuscleContribution {
                        muscle_group: "Arms".to_owned(),
                        fraction: 0.5,
                        is_direct: false,
                        source: ContributionSource::Model,
                    },
                ],
                &[(5, "185"), (8, "bodyweight")],
            )],
        ),
        deleted,
    ];

    let encoded = stringify_workout_backup(&sessions)?;
    let decoded = parse_workout_backup(&encoded)?;
    assert_eq!(decoded, sessions);
    Ok(())
}

#[test]
fn test_round_trip_preserves_contribution_absence() -> Result<()> {
    let sessions = vec![simple_session("s1", "2026-08-01", "Mystery Move", &[(5, "40")])];
    let encoded = stringify_workout_backup(&sessions)?;
    // absence is absence on the wire, not an empty array
    assert!(!encoded.contains("muscleContributions"));
    let decoded = parse_workout_backup(&encoded)?;
    assert_eq!(decoded[0].exercises[0].muscle_contributions, None);
    Ok(())
}

#[test]
fn test_envelope_carries_current_schema_version() {
    let encoded = stringify_workout_backup(&[]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["schemaVersion"], 2);
    assert!(value["exportedAt"].is_string());
    assert!(value["workoutSessions"].as_array().unwrap().is_empty());
}

#[test]
fn test_legacy_version_one_is_rejected_with_distinct_message() {
    let err =
        parse_workout_backup(r#"{"schemaVersion": 1, "workoutSessions": []}"#).unwrap_err();
    assert_eq!(err, BackupError::LegacyVersion);
    assert_eq!(err.to_string(), "legacy backup version 1 is not supported");
}

#[test]
fn test_other_versions_are_unsupported() {
    for version in [0, 3, 99] {
        let input = format!(r#"{{"schemaVersion": {version}, "workoutSessions": []}}"#);
        let err = parse_workout_backup(&input).unwrap_err();
        assert_eq!(err, BackupError::UnsupportedVersion(version));
        assert!(err.to_string().contains("Unsupported backup schema version"));
    }
}

#[test]
fn test_root_must_be_an_object() {
    assert_eq!(
        parse_workout_backup("[1, 2, 3]").unwrap_err(),
        BackupError::NotAnObject
    );
}

#[test]
fn test_malformed_json_is_reported() {
    let err = parse_workout_backup("{not json").unwrap_err();
    assert!(matches!(err, BackupError::Malformed(_)));
}

#[test]
fn test_missing_schema_version() {
    let err = parse_workout_backup(r#"{"workoutSessions": []}"#).unwrap_err();
    assert_eq!(err, BackupError::MissingField("schemaVersion"));
}

#[test]
fn test_non_integer_schema_version() {
    let err = parse_workout_backup(r#"{"schemaVersion": "2", "workoutSessions": []}"#).unwrap_err();
    assert!(err.to_string().contains("must be an integer"));
}

#[test]
fn test_missing_sessions_array() {
    let err = parse_workout_backup(r#"{"schemaVersion": 2}"#).unwrap_err();
    assert_eq!(err, BackupError::MissingField("workoutSessions"));
}

#[test]
fn test_sessions_must_be_an_array() {
    let err =
        parse_workout_backup(r#"{"schemaVersion": 2, "workoutSessions": {}}"#).unwrap_err();
    assert!(err.to_string().contains("must be an array"));
}

#[test]
fn test_sessions_need_a_performed_on_date() {
    let input = r#"{"schemaVersion": 2, "workoutSessions": [{"performedOn": ""}]}"#;
    let err = parse_workout_backup(input).unwrap_err();
    assert!(err.to_string().contains("performedOn"));

    let input = r#"{"schemaVersion": 2, "workoutSessions": [{"id": "x"}]}"#;
    assert!(parse_workout_backup(input).is_err());
}
