// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Claves front end core.
//!
//! This crate contains the front-end functionality:
//! - Character classification
//! - Lexical analysis (tokenization with per-character error recovery)
//! - Parsing (grammar checking with synchronization-based recovery)
//!
//! The crate never touches the filesystem or the console; callers pass in
//! source text and render the returned tokens and diagnostics themselves.

#![doc = include_str!("../../../README.md")]

pub mod analysis;
pub mod source_analysis;

pub use analysis::{Analysis, analyze};

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::analysis::{Analysis, analyze};
    pub use crate::source_analysis::{
        Diagnostic, Locale, Position, Span, Token, TokenKind, TokenValue,
    };
}
