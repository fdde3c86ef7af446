// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics shared by the lexer and the parser.
//!
//! A diagnostic records what went wrong ([`DiagnosticKind`]), where the user
//! should look ([`Position`]) and which bytes to underline ([`Span`]).
//! Messages are rendered on demand so the same diagnostic can be shown in
//! either [`Locale`].

use ecow::EcoString;

use super::{LexErrorKind, Locale, Position, Span, SyntaxErrorKind};

/// The phase that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Produced while grouping characters into tokens.
    Lexical,
    /// Produced while checking the token stream against the grammar.
    Syntactic,
}

impl Phase {
    /// The category label that prefixes a rendered diagnostic.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Lexical, Locale::Es) => "Error Léxico",
            (Self::Lexical, Locale::En) => "Lexical error",
            (Self::Syntactic, Locale::Es) => "Error Sintáctico",
            (Self::Syntactic, Locale::En) => "Syntax error",
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A lexical error.
    Lexical(LexErrorKind),
    /// A syntax error.
    Syntactic(SyntaxErrorKind),
}

/// A diagnostic message (error) with location information.
///
/// # Examples
///
/// ```
/// use claves_core::source_analysis::{Diagnostic, LexErrorKind, Locale, Position, Span};
///
/// let diag = Diagnostic::lexical(
///     LexErrorKind::UnknownCharacter('&'),
///     Position::new(1, 3),
///     Span::new(2, 3),
///     "&",
/// );
/// assert_eq!(
///     diag.render(Locale::En),
///     "Lexical error: unknown character '&' at line 1, column 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Where the error is reported.
    pub position: Position,
    /// The offending bytes.
    pub span: Span,
    /// The offending text, when there is any.
    pub offending: Option<EcoString>,
}

impl Diagnostic {
    /// Creates a lexical error diagnostic.
    #[must_use]
    pub fn lexical(
        kind: LexErrorKind,
        position: Position,
        span: Span,
        offending: impl Into<EcoString>,
    ) -> Self {
        Self {
            kind: DiagnosticKind::Lexical(kind),
            position,
            span,
            offending: Some(offending.into()),
        }
    }

    /// Creates a syntax error diagnostic.
    #[must_use]
    pub fn syntactic(kind: SyntaxErrorKind, position: Position, span: Span) -> Self {
        let offending = match &kind {
            SyntaxErrorKind::UnexpectedToken { found, .. }
            | SyntaxErrorKind::UnrecognizedCommand { found } => Some(found.clone()),
            SyntaxErrorKind::UnexpectedEndOfInput { .. } => None,
        };
        Self {
            kind: DiagnosticKind::Syntactic(kind),
            position,
            span,
            offending,
        }
    }

    /// Returns the phase that produced this diagnostic.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.kind {
            DiagnosticKind::Lexical(_) => Phase::Lexical,
            DiagnosticKind::Syntactic(_) => Phase::Syntactic,
        }
    }

    /// Returns `true` for lexical diagnostics.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self.phase(), Phase::Lexical)
    }

    /// Returns the line the diagnostic is reported at.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the column the diagnostic is reported at.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.position.column
    }

    /// Returns the message without category or position.
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        match &self.kind {
            DiagnosticKind::Lexical(kind) => kind.message(locale),
            DiagnosticKind::Syntactic(kind) => kind.message(locale),
        }
    }

    /// Renders the full one-line report.
    ///
    /// `Error Léxico: <message> en línea L, columna C` in Spanish,
    /// `Lexical error: <message> at line L, column C` in English.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        let label = self.phase().label(locale);
        let message = self.message(locale);
        let Position { line, column } = self.position;
        match locale {
            Locale::Es => format!("{label}: {message} en línea {line}, columna {column}"),
            Locale::En => format!("{label}: {message} at line {line}, column {column}"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}
