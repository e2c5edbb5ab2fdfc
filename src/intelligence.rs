// ABOUTME: Intelligence module re-exports from the liftlog-intelligence crate
// ABOUTME: Preserves import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Intelligence Module
//!
//! Analytics and query answering over the workout history. This module
//! re-exports from the `liftlog-intelligence` crate; the algorithms live
//! there so they can compile in parallel with the pipeline.

pub use liftlog_intelligence::*;

// Re-export submodules for path-based access (e.g. liftlog::intelligence::resolver::resolve_exercise)
pub use liftlog_intelligence::{
    aggregator, config, executors, personal_records, resolver, training_constants,
};
