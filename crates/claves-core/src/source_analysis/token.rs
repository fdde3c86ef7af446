// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Claves lexical analysis.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] indicating the category of the lexeme
//! - A [`TokenValue`] with the parsed payload (number, or text)
//! - The raw lexeme exactly as written
//! - A [`Position`] for the first character and a byte [`Span`]

use ecow::EcoString;

use super::{Locale, Position, Span};

/// The kind of token.
///
/// New reserved words or symbols can be added without breaking matches in
/// downstream crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TokenKind {
    // === Reserved words ===
    /// The key-list declaration keyword: `Claves`
    Keys,
    /// The print keyword: `imprimir`
    Print,
    /// Reserved for an average function: `promedio`
    Average,
    /// Reserved for a conditional count function: `contar_si`
    CountIf,

    // === Symbols ===
    /// `=`
    Equals,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,

    // === Literals ===
    /// A quoted string, quotes included: `"a"`, `'b'`
    StringLiteral,
    /// A base-10 integer: `42`
    IntegerLiteral,
    /// A decimal number: `3.14`
    FloatLiteral,
    /// A bare word that is not reserved: `hola`
    TextLiteral,
}

impl TokenKind {
    /// Returns the symbol kind for a single-character symbol.
    #[must_use]
    pub const fn symbol(c: char) -> Option<Self> {
        let kind = match c {
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            '.' => Self::Dot,
            '=' => Self::Equals,
            _ => return None,
        };
        Some(kind)
    }

    /// Looks up a reserved word, ignoring ASCII case.
    ///
    /// Only whole words match; `imprimirx` is not a keyword.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        RESERVED_WORDS
            .iter()
            .find(|(reserved, _)| reserved.eq_ignore_ascii_case(word))
            .map(|&(_, kind)| kind)
    }

    /// Returns `true` for reserved words.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Keys | Self::Print | Self::Average | Self::CountIf)
    }

    /// Returns `true` for literal kinds.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::StringLiteral | Self::IntegerLiteral | Self::FloatLiteral | Self::TextLiteral
        )
    }

    /// Returns `true` for single-character symbols.
    #[must_use]
    pub const fn is_symbol(self) -> bool {
        !self.is_keyword() && !self.is_literal()
    }

    /// A short name for messages such as "expected `;`".
    #[must_use]
    pub const fn describe(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Keys, _) => "'Claves'",
            (Self::Print, _) => "'imprimir'",
            (Self::Average, _) => "'promedio'",
            (Self::CountIf, _) => "'contar_si'",
            (Self::Equals, _) => "'='",
            (Self::LeftBrace, _) => "'{'",
            (Self::RightBrace, _) => "'}'",
            (Self::LeftParen, _) => "'('",
            (Self::RightParen, _) => "')'",
            (Self::LeftBracket, _) => "'['",
            (Self::RightBracket, _) => "']'",
            (Self::Comma, _) => "','",
            (Self::Semicolon, _) => "';'",
            (Self::Dot, _) => "'.'",
            (Self::StringLiteral, Locale::Es) => "una cadena de texto",
            (Self::StringLiteral, Locale::En) => "a string literal",
            (Self::IntegerLiteral, Locale::Es) => "un número entero",
            (Self::IntegerLiteral, Locale::En) => "an integer literal",
            (Self::FloatLiteral, Locale::Es) => "un número real",
            (Self::FloatLiteral, Locale::En) => "a float literal",
            (Self::TextLiteral, Locale::Es) => "un texto",
            (Self::TextLiteral, Locale::En) => "a text literal",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe(Locale::En))
    }
}

/// Reserved words, stored lowercase.
const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("claves", TokenKind::Keys),
    ("imprimir", TokenKind::Print),
    ("promedio", TokenKind::Average),
    ("contar_si", TokenKind::CountIf),
];

/// The payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Matched text: keywords, symbols, text literals, and string literals
    /// (with their quotes).
    Text(EcoString),
    /// A parsed integer literal.
    Integer(i64),
    /// A parsed float literal.
    Float(f64),
}

impl TokenValue {
    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) | Self::Float(_) => None,
        }
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A token with its value and source location.
///
/// # Examples
///
/// ```
/// use claves_core::source_analysis::{Position, Span, Token, TokenKind, TokenValue};
///
/// let token = Token::new(
///     TokenKind::IntegerLiteral,
///     TokenValue::Integer(42),
///     "42",
///     Position::new(1, 3),
///     Span::new(2, 4),
/// );
/// assert_eq!(token.kind(), TokenKind::IntegerLiteral);
/// assert_eq!(token.end_position(), Position::new(1, 5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    lexeme: EcoString,
    position: Position,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        value: TokenValue,
        lexeme: impl Into<EcoString>,
        position: Position,
        span: Span,
    ) -> Self {
        Self {
            kind,
            value,
            lexeme: lexeme.into(),
            position,
            span,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the parsed value.
    #[must_use]
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Returns the source text of the token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns the position of the first character.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the line of the first character.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the column of the first character.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Returns the byte span of the lexeme.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the position right after the lexeme.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.position.offset_by(lexeme_width(&self.lexeme))
    }
}

/// Columns occupied by a lexeme once emitted: one per character,
/// saturating at `u32::MAX`.
pub(super) fn lexeme_width(lexeme: &str) -> u32 {
    u32::try_from(lexeme.chars().count()).unwrap_or(u32::MAX)
}
