// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error kinds for the lexer and the parser.
//!
//! Neither phase stops on an error: each one is wrapped in a
//! [`Diagnostic`](super::Diagnostic) and analysis resumes. The `Display`
//! implementations give the English message; [`LexErrorKind::message`] and
//! [`SyntaxErrorKind::message`] render for a chosen [`Locale`].

use ecow::EcoString;
use thiserror::Error;

use super::{Locale, TokenKind};

/// Which run of characters an invalid character interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeContext {
    /// A run of letters.
    Identifier,
    /// An integer or float literal.
    Number,
}

impl LexemeContext {
    const fn describe(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Identifier, Locale::En) => "identifier",
            (Self::Identifier, Locale::Es) => "identificador",
            (Self::Number, Locale::En) => "number",
            (Self::Number, Locale::Es) => "número",
        }
    }
}

impl std::fmt::Display for LexemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe(Locale::En))
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unknown character {0:?}")]
    UnknownCharacter(char),

    /// A string literal hit a newline before its closing quote.
    #[error("missing closing {quote}")]
    UnterminatedString {
        /// The opening quote character.
        quote: char,
    },

    /// A string literal hit end of input before its closing quote.
    #[error("missing closing {quote} before end of input")]
    UnterminatedStringAtEnd {
        /// The opening quote character.
        quote: char,
    },

    /// A decimal point with no digit after it at end of input.
    #[error("incomplete number")]
    IncompleteNumber,

    /// A character that may not follow the identifier or number before it.
    #[error("invalid character {ch:?} in {context}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// The run it interrupted.
        context: LexemeContext,
    },

    /// An integer literal that does not fit in 64 bits.
    #[error("integer literal out of range")]
    IntegerOutOfRange,
}

impl LexErrorKind {
    /// Renders the message for `locale`.
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Es => match self {
                Self::UnknownCharacter(c) => format!("Carácter desconocido {c:?}"),
                Self::UnterminatedString { quote } => format!("Falta de cierre {quote}"),
                Self::UnterminatedStringAtEnd { quote } => {
                    format!("Falta de cierre {quote} antes del fin de archivo")
                }
                Self::IncompleteNumber => "Número incompleto".to_string(),
                Self::InvalidCharacter { ch, context } => {
                    format!("Carácter inválido {ch:?} en {}", context.describe(locale))
                }
                Self::IntegerOutOfRange => "Número entero fuera de rango".to_string(),
            },
        }
    }
}

/// The kind of syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A token of the wrong kind where a specific kind was required.
    #[error("expected {expected} but found '{found}'")]
    UnexpectedToken {
        /// The required kind.
        expected: TokenKind,
        /// The lexeme that was there instead.
        found: EcoString,
    },

    /// The token stream ended where a token was required.
    #[error("expected {expected} but found end of input")]
    UnexpectedEndOfInput {
        /// The required kind.
        expected: TokenKind,
    },

    /// A statement starting with something other than `Claves` or `imprimir`.
    #[error("expected a declaration or print statement but found '{found}'")]
    UnrecognizedCommand {
        /// The leading lexeme.
        found: EcoString,
    },
}

impl SyntaxErrorKind {
    /// Renders the message for `locale`.
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Es => match self {
                Self::UnexpectedToken { expected, found } => format!(
                    "Se esperaba {} pero se encontró '{found}'",
                    expected.describe(locale)
                ),
                Self::UnexpectedEndOfInput { expected } => format!(
                    "Se esperaba {} pero se encontró fin de archivo",
                    expected.describe(locale)
                ),
                Self::UnrecognizedCommand { found } => {
                    format!("Se esperaba 'Claves' o 'imprimir' pero se encontró '{found}'")
                }
            },
        }
    }
}
