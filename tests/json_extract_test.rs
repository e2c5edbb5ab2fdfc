// ABOUTME: Integration tests for JSON extraction from model output
// ABOUTME: Covers whole-text parse, fence stripping, span scanning, and failure classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use liftlog::errors::ExtractError;
use liftlog::parser::extract_json;
use serde_json::json;

#[test]
fn test_whole_text_is_json() {
    let extracted = extract_json("  {\"sets\": 3}  ").unwrap();
    assert_eq!(extracted.raw, "{\"sets\": 3}");
    assert_eq!(extracted.value, json!({"sets": 3}));
}

#[test]
fn test_code_fence_with_language_tag() {
    let reply = "```json\n[{\"exercise\": \"Squat\"}]\n```";
    let extracted = extract_json(reply).unwrap();
    assert_eq!(extracted.raw, "[{\"exercise\": \"Squat\"}]");
}

#[test]
fn test_code_fence_without_language_tag() {
    let reply = "```\n{\"a\": [1, 2]}\n```";
    let extracted = extract_json(reply).unwrap();
    assert_eq!(extracted.value, json!({"a": [1, 2]}));
}

#[test]
fn test_json_embedded_in_prose() {
    let reply = "Sure thing! I logged it as {\"exercise\": \"Deadlift\", \"sets\": 2} for you.";
    let extracted = extract_json(reply).unwrap();
    assert_eq!(extracted.raw, "{\"exercise\": \"Deadlift\", \"sets\": 2}");
}

#[test]
fn test_array_embedded_in_prose() {
    let reply = "Here are your numbers: [185, 190, 195] across sets.";
    let extracted = extract_json(reply).unwrap();
    assert_eq!(extracted.value, json!([185, 190, 195]));
}

#[test]
fn test_braces_inside_strings_do_not_close_span() {
    let reply = r#"note {"comment": "weird } brace", "ok": true} end"#;
    let extracted = extract_json(reply).unwrap();
    assert_eq!(extracted.value, json!({"comment": "weird } brace", "ok": true}));
}

#[test]
fn test_extraction_is_idempotent() {
    let reply = "prefix {\"exercise\": \"Bench Press\", \"sets\": 3} suffix";
    let first = extract_json(reply).unwrap();
    let second = extract_json(&first.raw).unwrap();
    assert_eq!(first.raw, second.raw);
    assert_eq!(first.value, second.value);
}

#[test]
fn test_no_json_found() {
    let err = extract_json("I could not parse any workout from that.").unwrap_err();
    assert_eq!(err, ExtractError::NoJsonFound);
    assert_eq!(err.kind(), "no_json_found");
}

#[test]
fn test_empty_input_is_no_json_found() {
    assert_eq!(extract_json("   \n  ").unwrap_err(), ExtractError::NoJsonFound);
}

#[test]
fn test_looks_like_json_but_is_not() {
    let err = extract_json("{\"exercise\": \"Bench\", \"sets\": ").unwrap_err();
    assert_eq!(err, ExtractError::InvalidJson);
    assert_eq!(err.kind(), "invalid_json");
}

#[test]
fn test_unterminated_array_is_invalid_json() {
    assert_eq!(extract_json("[1, 2, 3").unwrap_err(), ExtractError::InvalidJson);
}
