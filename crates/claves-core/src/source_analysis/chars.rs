// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Character classification for the lexer.
//!
//! The lexer looks at one character at a time, and end-of-input takes part
//! in the decisions as a value of its own ([`Lookahead::End`]) so that every
//! predicate here is total.

/// The character under the lexer cursor, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// A character from the input.
    Char(char),
    /// No characters remain.
    End,
}

impl Lookahead {
    /// Returns the character, or `None` at end of input.
    #[must_use]
    pub const fn char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::End => None,
        }
    }

    /// Returns `true` at end of input.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }
}

impl From<Option<char>> for Lookahead {
    fn from(c: Option<char>) -> Self {
        c.map_or(Self::End, Self::Char)
    }
}

/// Characters that end an identifier or a number run.
const DELIMITERS: &[char] = &[
    '{', '}', '(', ')', ',', ';', '[', ']', '#', '=', '"', '\'', '\t', '\n', ' ',
];

/// ASCII letters only.
#[must_use]
pub const fn is_letter(c: Lookahead) -> bool {
    matches!(c, Lookahead::Char('a'..='z' | 'A'..='Z'))
}

/// Characters that may continue an identifier after its first letter:
/// ASCII letters and `_`, so that `contar_si` is one word.
#[must_use]
pub const fn is_identifier_part(c: Lookahead) -> bool {
    is_letter(c) || matches!(c, Lookahead::Char('_'))
}

/// ASCII decimal digits only.
#[must_use]
pub const fn is_digit(c: Lookahead) -> bool {
    matches!(c, Lookahead::Char('0'..='9'))
}

/// Tab, newline and space. Carriage returns are not whitespace.
#[must_use]
pub const fn is_whitespace(c: Lookahead) -> bool {
    matches!(c, Lookahead::Char('\t' | '\n' | ' '))
}

/// Returns `true` if `c` ends an identifier.
#[must_use]
pub fn is_identifier_delimiter(c: Lookahead) -> bool {
    match c {
        Lookahead::End => true,
        Lookahead::Char(c) => DELIMITERS.contains(&c),
    }
}

/// Returns `true` if `c` ends an integer or float literal.
///
/// The decimal point is not a delimiter: the number states handle it before
/// consulting this predicate.
#[must_use]
pub fn is_numeric_delimiter(c: Lookahead) -> bool {
    match c {
        Lookahead::End => true,
        Lookahead::Char(c) => DELIMITERS.contains(&c),
    }
}
