// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token and diagnostic carries two locations: a human-facing
//! [`Position`] (1-based line and column, as shown to users) and a
//! machine-facing [`Span`] (byte offsets, used to slice the source and to
//! point renderers at the offending text).

use std::ops::Range;

/// Columns a tab advances by.
pub const TAB_WIDTH: u32 = 4;

/// A 1-based line/column position in the source text.
///
/// Columns follow the lexer's whitespace rules: a space advances by one, a
/// tab by [`TAB_WIDTH`], and a newline starts the next line at column 1.
///
/// # Examples
///
/// ```
/// use claves_core::source_analysis::Position;
///
/// let mut pos = Position::start();
/// pos.advance_over('\t');
/// assert_eq!(pos, Position::new(1, 5));
/// pos.advance_over('\n');
/// assert_eq!(pos, Position::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The first position of any source text.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(1, 1)
    }

    /// Returns this position shifted right by `columns` on the same line.
    /// The column saturates at `u32::MAX`.
    #[must_use]
    pub const fn offset_by(self, columns: u32) -> Self {
        Self::new(self.line, self.column.saturating_add(columns))
    }

    /// Moves this position past `c` using the whitespace rules.
    ///
    /// Any character other than a tab or newline occupies one column.
    pub fn advance_over(&mut self, c: char) {
        match c {
            '\n' => {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            }
            '\t' => self.column = self.column.saturating_add(TAB_WIDTH),
            _ => self.column = self.column.saturating_add(1),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source code, represented as a byte offset range.
///
/// # Examples
///
/// ```
/// use claves_core::source_analysis::Span;
///
/// let span = Span::new(0, 10);
/// assert_eq!(span.start(), 0);
/// assert_eq!(span.end(), 10);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the start byte offset.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Returns the end byte offset (exclusive).
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Converts to a `Range<usize>` for indexing into source text.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<usize>> for Span {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.as_range()
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start as usize, span.len() as usize).into()
    }
}
