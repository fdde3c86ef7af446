// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Claves source code.
//!
//! This module converts source text into a sequence of [`Token`]s and a
//! parallel sequence of lexical [`Diagnostic`]s. The lexer is a hand-written
//! finite-state machine that looks at one character at a time.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never panic on malformed input; every error is
//!   recorded and consumes at most the offending character
//! - **Precise positions**: Every token carries the line and column of its
//!   first character plus its byte span
//! - **One handler per state**: the states form a closed enum and the scan
//!   loop dispatches on it with a single `match`
//!
//! # Example
//!
//! ```
//! use claves_core::source_analysis::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new();
//! let (tokens, diagnostics) = lexer.analyze("imprimir(\"hola\");");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[2].kind(), TokenKind::StringLiteral);
//! assert!(diagnostics.is_empty());
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::{debug, trace};

use super::chars::{self, Lookahead};
use super::token::lexeme_width;
use super::{
    Diagnostic, LexErrorKind, LexemeContext, Position, Span, Token, TokenKind, TokenValue,
};

/// A lexer that tokenizes Claves source code.
///
/// Each call to [`Lexer::analyze`] starts from a clean state, so one lexer
/// can be reused across inputs.
///
/// # Error Recovery
///
/// The lexer never fails completely. Unknown characters, unterminated
/// strings and malformed numbers are recorded as diagnostics and lexing
/// resumes at the next character.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Creates a lexer with no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `source`, replacing the results of any earlier call.
    pub fn analyze(&mut self, source: &str) -> (&[Token], &[Diagnostic]) {
        let (tokens, diagnostics) = Scanner::new(source).run();
        debug!(
            tokens = tokens.len(),
            errors = diagnostics.len(),
            "lexed source"
        );
        self.tokens = tokens;
        self.diagnostics = diagnostics;
        (&self.tokens, &self.diagnostics)
    }

    /// Discards the results of the last analysis.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.diagnostics.clear();
    }

    /// Tokens from the last analysis, in input order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lexical diagnostics from the last analysis, in input order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the last analysis recorded any error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Consumes the lexer, returning its tokens and diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Tokenizes `source` with a fresh lexer.
#[must_use]
pub fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new();
    lexer.analyze(source);
    lexer.into_parts()
}

/// States of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Between tokens.
    Start,
    /// After `#`, until the end of the line.
    Comment,
    /// Inside a run of letters.
    Identifier,
    /// Inside the integer part of a number.
    IntegerLiteral,
    /// Right after the decimal point.
    FractionStart,
    /// Inside the fractional digits.
    FractionDigits,
    /// Inside `"..."`.
    DoubleQuoteString,
    /// Inside `'...'`.
    SingleQuoteString,
}

impl LexState {
    const fn closing_quote(self) -> char {
        match self {
            Self::SingleQuoteString => '\'',
            _ => '"',
        }
    }
}

/// The state of one analysis run.
///
/// `offset` and `position` always describe the next unconsumed character;
/// `lexeme_offset` and `lexeme_start` describe the first character of the
/// lexeme being accumulated.
struct Scanner<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    offset: usize,
    position: Position,
    lexeme_offset: usize,
    lexeme_start: Position,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            offset: 0,
            position: Position::start(),
            lexeme_offset: 0,
            lexeme_start: Position::start(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut state = LexState::Start;
        loop {
            let c = self.peek();
            trace!(?state, lookahead = ?c, position = %self.position, "lexer step");
            let next = match state {
                LexState::Start => self.start(c),
                LexState::Comment => self.comment(c),
                LexState::Identifier => self.identifier(c),
                LexState::IntegerLiteral => self.integer(c),
                LexState::FractionStart => self.fraction_start(c),
                LexState::FractionDigits => self.fraction_digits(c),
                LexState::DoubleQuoteString | LexState::SingleQuoteString => {
                    self.string(c, state)
                }
            };
            match next {
                Some(next) => state = next,
                None => break,
            }
        }
        (self.tokens, self.diagnostics)
    }

    fn peek(&mut self) -> Lookahead {
        self.chars.peek().map(|&(_, c)| c).into()
    }

    /// Consumes the next character.
    fn bump(&mut self) {
        if let Some((at, c)) = self.chars.next() {
            self.offset = at + c.len_utf8();
        }
    }

    /// Marks the next character as the start of a lexeme.
    fn begin_lexeme(&mut self) {
        self.lexeme_offset = self.offset;
        self.lexeme_start = self.position;
    }

    /// The characters consumed since [`Self::begin_lexeme`].
    fn lexeme(&self) -> &'src str {
        &self.source[self.lexeme_offset..self.offset]
    }

    fn lexeme_span(&self) -> Span {
        Span::from(self.lexeme_offset..self.offset)
    }

    /// Emits the current lexeme and moves the column past it.
    fn emit(&mut self, kind: TokenKind, value: TokenValue) {
        let lexeme = self.lexeme();
        trace!(?kind, lexeme, "emit token");
        self.tokens.push(Token::new(
            kind,
            value,
            lexeme,
            self.lexeme_start,
            self.lexeme_span(),
        ));
        self.position = self.lexeme_start.offset_by(lexeme_width(lexeme));
    }

    fn error(&mut self, kind: LexErrorKind, position: Position, span: Span, offending: &str) {
        trace!(%kind, %position, "lexical error");
        self.diagnostics
            .push(Diagnostic::lexical(kind, position, span, offending));
    }

    /// Records `bad` as an invalid character right after the current lexeme,
    /// discards the lexeme and consumes `bad`.
    fn reject(&mut self, bad: char, context: LexemeContext) -> Option<LexState> {
        let at = self.lexeme_start.offset_by(lexeme_width(self.lexeme()));
        let start = self.offset;
        self.bump();
        self.error(
            LexErrorKind::InvalidCharacter { ch: bad, context },
            at,
            Span::from(start..self.offset),
            &bad.to_string(),
        );
        self.position = at;
        self.position.advance_over(bad);
        Some(LexState::Start)
    }

    fn start(&mut self, c: Lookahead) -> Option<LexState> {
        match c {
            Lookahead::End => None,
            Lookahead::Char(ws) if chars::is_whitespace(c) => {
                self.bump();
                self.position.advance_over(ws);
                Some(LexState::Start)
            }
            Lookahead::Char('#') => {
                self.bump();
                self.position.advance_over('#');
                Some(LexState::Comment)
            }
            Lookahead::Char(quote @ ('"' | '\'')) => {
                self.begin_lexeme();
                self.bump();
                Some(if quote == '"' {
                    LexState::DoubleQuoteString
                } else {
                    LexState::SingleQuoteString
                })
            }
            Lookahead::Char(_) if chars::is_letter(c) => {
                self.begin_lexeme();
                Some(LexState::Identifier)
            }
            Lookahead::Char(_) if chars::is_digit(c) => {
                self.begin_lexeme();
                Some(LexState::IntegerLiteral)
            }
            Lookahead::Char(other) => {
                self.begin_lexeme();
                self.bump();
                if let Some(kind) = TokenKind::symbol(other) {
                    self.emit(kind, TokenValue::Text(self.lexeme().into()));
                } else {
                    self.error(
                        LexErrorKind::UnknownCharacter(other),
                        self.lexeme_start,
                        self.lexeme_span(),
                        self.lexeme(),
                    );
                    self.position.advance_over(other);
                }
                Some(LexState::Start)
            }
        }
    }

    fn comment(&mut self, c: Lookahead) -> Option<LexState> {
        match c {
            Lookahead::End | Lookahead::Char('\n') => Some(LexState::Start),
            Lookahead::Char(skipped) => {
                self.bump();
                self.position.advance_over(skipped);
                Some(LexState::Comment)
            }
        }
    }

    fn identifier(&mut self, c: Lookahead) -> Option<LexState> {
        match c {
            Lookahead::Char(_) if chars::is_identifier_part(c) => {
                self.bump();
                Some(LexState::Identifier)
            }
            Lookahead::Char(bad) if !chars::is_identifier_delimiter(c) => {
                self.reject(bad, LexemeContext::Identifier)
            }
            _ => {
                let word = self.lexeme();
                let kind = TokenKind::keyword(word).unwrap_or(TokenKind::TextLiteral);
                self.emit(kind, TokenValue::Text(word.into()));
                Some(LexState::Start)
            }
        }
    }

    fn integer(&mut self, c: Lookahead) -> Option<LexState> {
        match c {
            Lookahead::Char(_) if chars::is_digit(c) => {
                self.bump();
                Some(LexState::IntegerLiteral)
            }
            Lookahead::Char('.') => {
                self.bump();
                Some(LexState::FractionStart)
            }
            Lookahead::Char(bad) if !chars::is_numeric_delimiter(c) => {
                self.reject(bad, LexemeContext::Number)
            }
            _ => {
                let digits = self.lexeme();
                if let Ok(n) = digits.parse::<i64>() {
                    self.emit(TokenKind::IntegerLiteral, TokenValue::Integer(n));
                } else {
                    self.error(
                        LexErrorKind::IntegerOutOfRange,
                        self.lexeme_start,
                        self.lexeme_span(),
                        digits,
                    );
                    self.position = self.lexeme_start.offset_by(lexeme_width(digits));
                }
                Some(LexState::Start)
            }
        }
    }

    fn fraction_start(&mut self, c: Lookahead) -> Option<LexState> {
        match c {
            Lookahead::End => {
                let partial = self.lexeme();
                self.error(
                    LexErrorKind::IncompleteNumber,
                    self.lexeme_start.offset_by(lexeme_width(partial)),
                    self.lexeme_span(),
                    partial,
                );
                None
            }
            Lookahead::Char(_) if chars::is_digit(c) => Some(LexState::FractionDigits),
            Lookahead::Char(bad) => self.reject(bad, LexemeContext::Number),
        }
    }

    fn fraction_digits(&mut self, c: Lookahead) -> Option<LexState> {
        match c {
            Lookahead::Char(_) if chars::is_digit(c) => {
                self.bump();
                Some(LexState::FractionDigits)
            }
            Lookahead::Char(bad) if !chars::is_numeric_delimiter(c) => {
                self.reject(bad, LexemeContext::Number)
            }
            _ => {
                let text = self.lexeme();
                match text.parse::<f64>() {
                    Ok(x) => self.emit(TokenKind::FloatLiteral, TokenValue::Float(x)),
                    Err(_) => {
                        self.error(
                            LexErrorKind::IncompleteNumber,
                            self.lexeme_start,
                            self.lexeme_span(),
                            text,
                        );
                        self.position = self.lexeme_start.offset_by(lexeme_width(text));
                    }
                }
                Some(LexState::Start)
            }
        }
    }

    fn string(&mut self, c: Lookahead, state: LexState) -> Option<LexState> {
        let quote = state.closing_quote();
        match c {
            Lookahead::End => {
                self.error(
                    LexErrorKind::UnterminatedStringAtEnd { quote },
                    self.lexeme_start,
                    self.lexeme_span(),
                    self.lexeme(),
                );
                None
            }
            Lookahead::Char('\n') => {
                self.error(
                    LexErrorKind::UnterminatedString { quote },
                    self.lexeme_start,
                    self.lexeme_span(),
                    self.lexeme(),
                );
                self.bump();
                self.position = Position::new(self.lexeme_start.line.saturating_add(1), 1);
                Some(LexState::Start)
            }
            Lookahead::Char(closing) if closing == quote => {
                self.bump();
                self.emit(
                    TokenKind::StringLiteral,
                    TokenValue::Text(self.lexeme().into()),
                );
                Some(LexState::Start)
            }
            Lookahead::Char(_) => {
                self.bump();
                Some(state)
            }
        }
    }
}
