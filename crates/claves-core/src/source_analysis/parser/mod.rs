// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Claves source code.
//!
//! The parser checks a token sequence against the Claves grammar and
//! records a [`Diagnostic`] for every violation. It never builds a tree:
//! its output is the diagnostic list and a validity verdict.
//!
//! # Design Philosophy
//!
//! - **Multiple errors** - Report all errors, don't stop at first
//! - **Precise positions** - Every diagnostic points at the offending token,
//!   or right after the last token when input ends early
//! - **Synchronization points** - Recover at `;`, `]` and `)`
//!
//! # Grammar
//!
//! ```text
//! program    := command*
//! command    := keysDecl | printStmt
//! keysDecl   := KEYS '=' '[' stringList ']' ';'
//! stringList := (STRING (',' STRING)*)?
//! printStmt  := PRINT '(' STRING ')' ';'
//! ```
//!
//! # Usage
//!
//! ```
//! use claves_core::source_analysis::{lex, parse};
//!
//! let (tokens, _) = lex("Claves = [\"a\", \"b\"];");
//! let diagnostics = parse(&tokens);
//!
//! assert!(diagnostics.is_empty());
//! ```

use tracing::{debug, trace};

use crate::source_analysis::{Diagnostic, Position, Span, SyntaxErrorKind, Token, TokenKind};

// Submodule with the grammar rules for ParseState
mod commands;


/// Parses a token sequence with a fresh parser, returning its diagnostics.
#[must_use]
pub fn parse(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut parser = Parser::new();
    parser.parse(tokens);
    parser.into_diagnostics()
}

/// A reusable parser.
///
/// Each call to [`Parser::parse`] starts with an empty diagnostic list.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a parser with no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `tokens`, replacing the results of any earlier call.
    pub fn parse(&mut self, tokens: &[Token]) -> &[Diagnostic] {
        let mut state = ParseState::new(tokens);
        state.parse_program();
        debug!(
            tokens = tokens.len(),
            errors = state.diagnostics.len(),
            "parsed tokens"
        );
        self.diagnostics = state.diagnostics;
        &self.diagnostics
    }

    /// Syntactic diagnostics from the last parse, in discovery order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the last parse recorded no error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// The state of one parse run.
struct ParseState<'tok> {
    /// The tokens being parsed.
    tokens: &'tok [Token],
    /// Current token index.
    current: usize,
    /// Accumulated diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl<'tok> ParseState<'tok> {
    fn new(tokens: &'tok [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token, or `None` at end of input.
    fn current_token(&self) -> Option<&'tok Token> {
        self.tokens.get(self.current)
    }

    /// Returns the current token kind, or `None` at end of input.
    fn current_kind(&self) -> Option<TokenKind> {
        self.current_token().map(Token::kind)
    }

    /// Checks if we're at the end of input.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advances to the next token and returns the one passed over.
    fn advance(&mut self) -> Option<&'tok Token> {
        let token = self.current_token()?;
        self.current += 1;
        Some(token)
    }

    /// Checks if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consumes the current token if it has the given kind.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind, or records an error without
    /// consuming anything.
    fn expect(&mut self, kind: TokenKind) -> Option<&'tok Token> {
        if self.check(kind) {
            return self.advance();
        }
        let error = match self.current_token() {
            Some(token) => Diagnostic::syntactic(
                SyntaxErrorKind::UnexpectedToken {
                    expected: kind,
                    found: token.lexeme().into(),
                },
                token.position(),
                token.span(),
            ),
            None => {
                let (position, span) = self.end_of_input();
                Diagnostic::syntactic(
                    SyntaxErrorKind::UnexpectedEndOfInput { expected: kind },
                    position,
                    span,
                )
            }
        };
        self.error(error);
        None
    }

    // ========================================================================
    // Error Handling & Recovery
    // ========================================================================

    /// Records an error diagnostic.
    fn error(&mut self, diagnostic: Diagnostic) {
        trace!(%diagnostic, "syntax error");
        self.diagnostics.push(diagnostic);
    }

    /// Where end-of-input errors are reported: right after the last token.
    fn end_of_input(&self) -> (Position, Span) {
        self.tokens.last().map_or(
            (Position::start(), Span::default()),
            |last| {
                let end = last.span().end();
                (last.end_position(), Span::new(end, end))
            },
        )
    }

    /// Discards tokens up to, not including, the next token of `kind`.
    fn synchronize(&mut self, kind: TokenKind) {
        let from = self.current;
        while !self.is_at_end() && !self.check(kind) {
            self.current += 1;
        }
        trace!(?kind, skipped = self.current - from, "synchronized");
    }

    /// Expects a closing delimiter. On failure, skips to the next one and
    /// leaves it in place. Returns `true` if the delimiter was consumed.
    fn expect_closing(&mut self, kind: TokenKind) -> bool {
        if self.expect(kind).is_some() {
            return true;
        }
        self.synchronize(kind);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{DiagnosticKind, lex};

    fn parse_source(source: &str) -> Vec<Diagnostic> {
        let (tokens, lex_errors) = lex(source);
        assert!(lex_errors.is_empty(), "lexical errors in {source:?}: {lex_errors:?}");
        parse(&tokens)
    }

    fn parse_ok(source: &str) {
        let diagnostics = parse_source(source);
        assert!(
            diagnostics.is_empty(),
            "Expected no errors for {source:?}, got: {diagnostics:?}"
        );
    }

    fn parse_err(source: &str) -> Vec<(SyntaxErrorKind, Position)> {
        parse_source(source)
            .into_iter()
            .map(|d| match d.kind {
                DiagnosticKind::Syntactic(kind) => (kind, d.position),
                DiagnosticKind::Lexical(kind) => panic!("unexpected lexical error {kind}"),
            })
            .collect()
    }

    fn unexpected(expected: TokenKind, found: &str) -> SyntaxErrorKind {
        SyntaxErrorKind::UnexpectedToken {
            expected,
            found: found.into(),
        }
    }

    #[test]
    fn parse_empty_input() {
        let mut parser = Parser::new();
        assert!(parser.parse(&[]).is_empty());
        assert!(parser.is_valid());
    }

    #[test]
    fn parse_keys_declaration() {
        parse_ok("Claves = [\"a\",\"b\"];");
        parse_ok("Claves = [];");
        parse_ok("claves = ['x'];");
        parse_ok("CLAVES=[ \"a\" , 'b' , \"c\" ] ;");
    }

    #[test]
    fn parse_print_statement() {
        parse_ok("imprimir(\"hola\");");
        parse_ok("Imprimir('hola');");
    }

    #[test]
    fn parse_program_of_several_commands() {
        parse_ok(
            "# claves del sistema\n\
             Claves = [\"uno\", \"dos\"];\n\
             imprimir(\"listo\");\n\
             imprimir('fin');\n",
        );
    }

    #[test]
    fn parse_non_string_list_element() {
        let errors = parse_err("Claves = [\"a\", 3];");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::StringLiteral, "3"), Position::new(1, 16))]
        );
    }

    #[test]
    fn parse_non_string_first_element() {
        let errors = parse_err("Claves = [3];\nimprimir(\"x\");");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::StringLiteral, "3"), Position::new(1, 11))]
        );
    }

    #[test]
    fn parse_list_element_recovers_at_bracket() {
        let errors = parse_err("Claves = [\"a\", 3, 4.5, hola];\nimprimir(\"x\");");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn parse_missing_semicolon_at_end() {
        let errors = parse_err("imprimir(\"hi\")");
        assert_eq!(
            errors,
            vec![(
                SyntaxErrorKind::UnexpectedEndOfInput {
                    expected: TokenKind::Semicolon
                },
                Position::new(1, 15)
            )]
        );
    }

    #[test]
    fn parse_missing_equals() {
        let errors = parse_err("Claves [\"a\"];");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::Equals, "["), Position::new(1, 8))]
        );
    }

    #[test]
    fn parse_missing_open_paren() {
        let errors = parse_err("imprimir \"a\");");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::LeftParen, "\"a\""), Position::new(1, 10))]
        );
    }

    #[test]
    fn parse_print_argument_must_be_string() {
        let errors = parse_err("imprimir(3);\nimprimir(\"ok\");");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::StringLiteral, "3"), Position::new(1, 10))]
        );
    }

    #[test]
    fn parse_print_argument_recovers_at_paren() {
        let errors = parse_err("imprimir(hola mundo);");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn parse_missing_semicolon_between_statements() {
        let errors = parse_err("imprimir(\"a\")\nimprimir(\"b\");\nimprimir(\"c\");");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::Semicolon, "imprimir"), Position::new(2, 1))]
        );
    }

    #[test]
    fn parse_unrecognized_command() {
        let errors = parse_err("hola mundo;\nimprimir(\"x\");");
        assert_eq!(
            errors,
            vec![(
                SyntaxErrorKind::UnrecognizedCommand {
                    found: "hola".into()
                },
                Position::new(1, 1)
            )]
        );
    }

    #[test]
    fn parse_reserved_function_name_is_not_a_command() {
        let errors = parse_err("Promedio(\"x\");\nimprimir(\"y\");");
        assert_eq!(
            errors,
            vec![(
                SyntaxErrorKind::UnrecognizedCommand {
                    found: "Promedio".into()
                },
                Position::new(1, 1)
            )]
        );
    }

    #[test]
    fn parse_stray_semicolon() {
        let errors = parse_err(";imprimir(\"x\");");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, Position::new(1, 1));
    }

    #[test]
    fn parse_unrecognized_command_at_end() {
        let errors = parse_err("42");
        assert_eq!(
            errors,
            vec![(
                SyntaxErrorKind::UnrecognizedCommand { found: "42".into() },
                Position::new(1, 1)
            )]
        );
    }

    #[test]
    fn parse_missing_close_bracket_leaves_bracket_in_place() {
        // The failed `]` skips `"b"` and stops on `]`, which the `;` check
        // then reports. The declaration's `;` ends the statement.
        let errors = parse_err("Claves = [\"a\" \"b\"];\nimprimir(\"x\");");
        assert_eq!(
            errors,
            vec![
                (unexpected(TokenKind::RightBracket, "\"b\""), Position::new(1, 15)),
                (unexpected(TokenKind::Semicolon, "]"), Position::new(1, 18)),
            ]
        );
    }

    #[test]
    fn parse_missing_semicolon_after_declaration() {
        let errors = parse_err("Claves = [\"a\"]\nimprimir(\"b\");\nimprimir(\"c\");");
        assert_eq!(
            errors,
            vec![(unexpected(TokenKind::Semicolon, "imprimir"), Position::new(2, 1))]
        );
    }

    #[test]
    fn failed_closing_delimiter_is_not_consumed() {
        let (tokens, _) = lex("Claves = [\"a\" 3];");
        let mut state = ParseState::new(&tokens);
        state.advance();
        state.advance();
        state.advance();
        state.advance();
        assert!(!state.expect_closing(TokenKind::RightBracket));
        assert_eq!(state.current_kind(), Some(TokenKind::RightBracket));
        assert!(state.expect_closing(TokenKind::RightBracket));
        assert_eq!(state.current_kind(), Some(TokenKind::Semicolon));
    }

    #[test]
    fn parse_missing_close_bracket() {
        // No `]` follows, so the skip runs to end of input and the `;` check
        // reports end of input.
        let errors = parse_err("Claves = [\"a\";");
        assert_eq!(
            errors,
            vec![
                (unexpected(TokenKind::RightBracket, ";"), Position::new(1, 14)),
                (
                    SyntaxErrorKind::UnexpectedEndOfInput {
                        expected: TokenKind::Semicolon
                    },
                    Position::new(1, 15)
                ),
            ]
        );
    }

    #[test]
    fn parse_truncated_declaration() {
        let errors = parse_err("Claves");
        assert_eq!(
            errors[0],
            (
                SyntaxErrorKind::UnexpectedEndOfInput {
                    expected: TokenKind::Equals
                },
                Position::new(1, 7)
            )
        );
    }

    #[test]
    fn end_of_input_span_is_empty_after_last_token() {
        let (tokens, _) = lex("imprimir(\"hi\")");
        let diagnostics = parse(&tokens);
        assert_eq!(diagnostics[0].span, Span::new(14, 14));
        assert_eq!(diagnostics[0].offending, None);
    }

    #[test]
    fn parser_only_sees_tokens() {
        let (tokens, lex_errors) = lex("Claves = [\"a\" & ];");
        assert_eq!(lex_errors.len(), 1);
        assert!(parse(&tokens).is_empty());
    }

    #[test]
    fn parser_resets_between_calls() {
        let (bad, _) = lex("imprimir(");
        let (good, _) = lex("imprimir(\"x\");");
        let mut parser = Parser::new();
        parser.parse(&bad);
        assert!(!parser.is_valid());
        parser.parse(&good);
        assert!(parser.is_valid());
        assert!(parser.diagnostics().is_empty());
    }
}
