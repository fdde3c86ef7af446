// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The full front-end pipeline: lex, then parse.

use crate::source_analysis::{Diagnostic, Lexer, Parser, Token};

/// The result of running both phases over one source text.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Tokens in input order.
    pub tokens: Vec<Token>,
    /// Diagnostics from the lexer.
    pub lexical: Vec<Diagnostic>,
    /// Diagnostics from the parser.
    pub syntactic: Vec<Diagnostic>,
}

impl Analysis {
    /// Returns `true` if neither phase recorded an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lexical.is_empty() && self.syntactic.is_empty()
    }

    /// All diagnostics: lexical first, then syntactic.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lexical.iter().chain(&self.syntactic)
    }

    /// Total number of diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.lexical.len() + self.syntactic.len()
    }
}

/// Lexes and parses `source`.
///
/// # Examples
///
/// ```
/// use claves_core::analyze;
///
/// let analysis = analyze("imprimir(\"hola\")");
/// assert_eq!(analysis.tokens.len(), 4);
/// assert!(analysis.lexical.is_empty());
/// assert_eq!(analysis.syntactic.len(), 1);
/// assert!(!analysis.is_valid());
/// ```
#[must_use]
pub fn analyze(source: &str) -> Analysis {
    let mut lexer = Lexer::new();
    lexer.analyze(source);
    let (tokens, lexical) = lexer.into_parts();

    let mut parser = Parser::new();
    parser.parse(&tokens);

    Analysis {
        tokens,
        lexical,
        syntactic: parser.into_diagnostics(),
    }
}
