// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexing and parsing for Claves source code.
//!
//! This module contains the character classifier, the lexer, the parser and
//! the token and diagnostic types they share.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a sequence of [`Token`]s. Each
//! token carries the [`Position`] of its first character and a byte [`Span`].
//!
//! ```
//! use claves_core::source_analysis::{TokenKind, lex};
//!
//! let (tokens, diagnostics) = lex("Claves = [\"a\"];");
//! assert_eq!(tokens[0].kind(), TokenKind::Keys);
//! assert!(diagnostics.is_empty());
//! ```
//!
//! See [`TokenKind`] for all supported token kinds.
//!
//! # Parsing
//!
//! The [`parse`] function checks a token sequence against the grammar (see
//! [`parser`] module for details) and returns syntactic diagnostics.
//!
//! # Error Handling
//!
//! Neither phase stops at the first error. Each problem becomes a
//! [`Diagnostic`] with a typed kind ([`LexErrorKind`] or [`SyntaxErrorKind`])
//! and analysis resumes right after it. Diagnostics render in Spanish or
//! English depending on the [`Locale`].

pub mod chars;
mod diagnostic;
mod error;
mod lexer;
mod locale;
pub mod parser;
mod span;
mod token;


pub use chars::Lookahead;
pub use diagnostic::{Diagnostic, DiagnosticKind, Phase};
pub use error::{LexErrorKind, LexemeContext, SyntaxErrorKind};
pub use lexer::{Lexer, lex};
pub use locale::Locale;
pub use parser::{Parser, parse};
pub use span::{Position, Span, TAB_WIDTH};
pub use token::{Token, TokenKind, TokenValue};
