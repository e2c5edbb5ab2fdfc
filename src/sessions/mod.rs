// ABOUTME: Session-layer operations over the Session → Exercise → Set hierarchy
// ABOUTME: Merge of parsed exercises into sessions, sorting, and id factories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Session Model & Merger
//!
//! Owns the transforms over the session hierarchy. Every operation returns
//! new collections; the input session list is never mutated in place.

/// Merge and sort operations
pub mod merger;

pub use merger::{
    merge_exercises_into_sessions, sort_sessions_by_date_desc, IdFactory, UuidIdFactory,
};
