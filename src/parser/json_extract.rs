// ABOUTME: Pulls the first valid JSON value out of arbitrary model output
// ABOUTME: Whole-text parse, code-fence stripping, then a depth-tracking span scan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # JSON Extractor
//!
//! Models wrap JSON in prose, code fences, or both. Extraction tries three
//! strategies in fixed order, each only when the previous one fails:
//!
//! 1. Parse the whole trimmed text.
//! 2. Strip leading/trailing code-fence markers and retry.
//! 3. Scan for the first complete top-level `{...}` or `[...]` span,
//!    honoring quoted strings and backslash escapes, and parse that.
//!
//! Extraction is idempotent: running it on its own output returns the same
//! substring.

use liftlog_core::errors::ExtractError;
use serde_json::Value;
use tracing::debug;

/// A successfully extracted JSON value and the exact substring it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedJson {
    /// The JSON substring, verbatim
    pub raw: String,
    /// The parsed value
    pub value: Value,
}

/// Extract the first valid JSON value from arbitrary text.
///
/// # Errors
///
/// Returns [`ExtractError::NoJsonFound`] when the text contains no JSON
/// candidate at all, and [`ExtractError::InvalidJson`] when the text looked
/// like JSON (a candidate span, or a `{`/`[` prefix) but failed to parse.
pub fn extract_json(text: &str) -> Result<ExtractedJson, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::NoJsonFound);
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(ExtractedJson {
            raw: trimmed.to_owned(),
            value,
        });
    }

    if let Some(unfenced) = strip_code_fences(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(unfenced) {
            debug!("extracted JSON after stripping code fences");
            return Ok(ExtractedJson {
                raw: unfenced.to_owned(),
                value,
            });
        }
    }

    if let Some(span) = first_json_span(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(span) {
            debug!(span_len = span.len(), "extracted embedded JSON span");
            return Ok(ExtractedJson {
                raw: span.to_owned(),
                value,
            });
        }
        // A complete span that still fails to parse looked like JSON
        return Err(ExtractError::InvalidJson);
    }

    Err(classify_failure(trimmed))
}

/// No candidate span exists. Text that opens like JSON still counts as an
/// attempt at JSON, which matters for downstream diagnostics.
fn classify_failure(trimmed: &str) -> ExtractError {
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        ExtractError::InvalidJson
    } else {
        ExtractError::NoJsonFound
    }
}

/// Strip leading/trailing code-fence markers (with optional language tag).
/// Returns `None` when there is nothing to strip.
fn strip_code_fences(text: &str) -> Option<&str> {
    let mut inner = text;
    let mut stripped = false;

    if inner.starts_with("```") {
        // Drop the whole fence line; a language tag may follow the backticks
        let after = inner.find('\n').map(|idx| &inner[idx + 1..])?;
        inner = after;
        stripped = true;
    }

    let tail_trimmed = inner.trim_end();
    if let Some(without) = tail_trimmed.strip_suffix("```") {
        inner = without.trim_end();
        stripped = true;
    }

    stripped.then(|| inner.trim())
}

/// Find the first complete top-level `{...}` or `[...]` span.
///
/// Depth tracking only starts at the first opener; braces and brackets
/// inside quoted strings are ignored, and backslash escapes are honored so
/// an escaped quote cannot end a string early.
fn first_json_span(text: &str) -> Option<&str> {
    let mut start: Option<usize> = None;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        match start {
            None => {
                if ch == '{' || ch == '[' {
                    start = Some(idx);
                    depth = 1;
                }
            }
            Some(span_start) => {
                if in_string {
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == '"' {
                        in_string = false;
                    }
                    continue;
                }
                match ch {
                    '"' => in_string = true,
                    '{' | '[' => depth += 1,
                    '}' | ']' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(&text[span_start..idx + ch.len_utf8()]);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_language_tag() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_strip_code_fences_nothing_to_strip() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), None);
    }

    #[test]
    fn test_span_ignores_braces_in_strings() {
        let text = r#"prefix {"note": "closing } inside", "n": 1} suffix"#;
        let span = first_json_span(text).unwrap();
        assert_eq!(span, r#"{"note": "closing } inside", "n": 1}"#);
    }

    #[test]
    fn test_span_honors_escaped_quotes() {
        let text = r#"x {"quote": "he said \"}\" loudly"} y"#;
        let span = first_json_span(text).unwrap();
        assert_eq!(span, r#"{"quote": "he said \"}\" loudly"}"#);
    }

    #[test]
    fn test_unbalanced_open_brace_has_no_span() {
        assert_eq!(first_json_span("{\"a\": [1, 2"), None);
    }
}
