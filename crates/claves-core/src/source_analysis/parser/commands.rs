// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Command parsing.
//!
//! This module contains the grammar rules: the top-level command loop, the
//! key-list declaration `Claves = [...];` and the print statement
//! `imprimir(...);`.
//!
//! Each command rule returns `true` when its statement ended normally and
//! `false` when recovery stopped short of the statement's `;`. In the latter
//! case the command loop skips to that `;` and steps over it before the next
//! command.

use tracing::trace;

use super::ParseState;
use crate::source_analysis::{Diagnostic, SyntaxErrorKind, TokenKind};

impl ParseState<'_> {
    /// Parses commands until the tokens run out.
    pub(super) fn parse_program(&mut self) {
        while let Some(kind) = self.current_kind() {
            trace!(?kind, index = self.current, "command");
            let terminated = match kind {
                TokenKind::Keys => self.parse_keys_declaration(),
                TokenKind::Print => self.parse_print_statement(),
                _ => self.skip_unrecognized_command(),
            };
            if !terminated {
                self.skip_to_next_statement();
            }
        }
    }

    /// Skips to the `;` ending the current statement and steps over it.
    fn skip_to_next_statement(&mut self) {
        self.synchronize(TokenKind::Semicolon);
        self.match_token(TokenKind::Semicolon);
    }

    /// Parses `Claves = [ stringList ] ;`.
    fn parse_keys_declaration(&mut self) -> bool {
        self.advance(); // Claves
        self.expect(TokenKind::Equals);
        self.expect(TokenKind::LeftBracket);
        self.parse_string_list();
        self.expect_closing(TokenKind::RightBracket);
        self.expect_closing(TokenKind::Semicolon)
    }

    /// Parses `(STRING (',' STRING)*)?`.
    ///
    /// A non-string element skips ahead to the closing `]`.
    fn parse_string_list(&mut self) {
        if matches!(self.current_kind(), None | Some(TokenKind::RightBracket)) {
            return;
        }
        if self.expect(TokenKind::StringLiteral).is_none() {
            self.synchronize(TokenKind::RightBracket);
            return;
        }
        while self.match_token(TokenKind::Comma) {
            if self.expect(TokenKind::StringLiteral).is_none() {
                self.synchronize(TokenKind::RightBracket);
                return;
            }
        }
    }

    /// Parses `imprimir ( STRING ) ;`.
    fn parse_print_statement(&mut self) -> bool {
        self.advance(); // imprimir
        self.expect(TokenKind::LeftParen);
        if self.expect(TokenKind::StringLiteral).is_none() {
            self.synchronize(TokenKind::RightParen);
        }
        self.expect(TokenKind::RightParen);
        self.expect_closing(TokenKind::Semicolon)
    }

    /// Reports a token that cannot start a command and steps past it.
    ///
    /// Returns `true` only for a stray `;`, which ends its own statement.
    fn skip_unrecognized_command(&mut self) -> bool {
        let Some(token) = self.advance() else {
            return true;
        };
        self.error(Diagnostic::syntactic(
            SyntaxErrorKind::UnrecognizedCommand {
                found: token.lexeme().into(),
            },
            token.position(),
            token.span(),
        ));
        token.kind() == TokenKind::Semicolon
    }
}
