// ABOUTME: Text-completion collaborator contract and provider error taxonomy
// ABOUTME: The only asynchronous boundary; the core never awaits I/O itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Liftlog Project

//! # Text-Completion Boundary
//!
//! The core treats every AI vendor as one opaque capability:
//! `complete(prompt, input) -> text`. Implementations live outside this
//! crate and categorize their failures into [`ProviderError`] once, at the
//! boundary; the core passes those categories through unchanged and applies
//! no retry or timeout policy of its own.
//!
//! ## Example
//!
//! ```rust
//! use liftlog::llm::{CompletionProvider, ProviderError};
//!
//! struct CannedProvider;
//!
//! #[async_trait::async_trait]
//! impl CompletionProvider for CannedProvider {
//!     fn name(&self) -> &'static str {
//!         "canned"
//!     }
//!
//!     async fn complete(&self, _prompt: &str, _input: &str) -> Result<String, ProviderError> {
//!         Ok("[]".to_owned())
//!     }
//! }
//! ```

use async_trait::async_trait;

pub use liftlog_core::errors::ProviderError;

/// An opaque text-completion capability.
///
/// `prompt` carries the instruction template, `input` the user's text; the
/// provider returns raw model output for the parsing pipeline to pick apart.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name for logging
    fn name(&self) -> &'static str;

    /// Run one completion.
    ///
    /// # Errors
    ///
    /// Returns a categorized [`ProviderError`]; the caller decides what to
    /// surface and whether retrying is worthwhile.
    async fn complete(&self, prompt: &str, input: &str) -> Result<String, ProviderError>;
}
