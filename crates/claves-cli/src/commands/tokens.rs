// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `claves tokens`: print the token stream of one source file.
//!
//! Tokens are printed one per line, followed by any lexical diagnostics.
//! The command exits non-zero if the lexer reported errors.

use camino::{Utf8Path, Utf8PathBuf};
use claves_core::source_analysis::{Lexer, Locale, Token, TokenValue};
use miette::Result;
use tracing::{debug, instrument};

use super::report::print_diagnostics;
use super::sources::{SOURCE_EXTENSION, project_root, read_source};
use crate::config::{OutputFormat, Settings, find_config};

/// Print the tokens of a single source file.
#[instrument(skip_all, fields(path = %path))]
pub fn run_tokens(path: &str, format: Option<OutputFormat>, locale: Option<Locale>) -> Result<()> {
    let file = Utf8PathBuf::from(path);
    if !file.is_file() {
        miette::bail!("'{path}' is not a file; `tokens` takes a single .{SOURCE_EXTENSION} file");
    }
    let settings = Settings::resolve(find_config(&project_root(&file))?, format, locale)?;
    let source = read_source(&file, &settings)?;

    let mut lexer = Lexer::new();
    let (tokens, diagnostics) = lexer.analyze(&source);
    debug!(tokens = tokens.len(), errors = diagnostics.len(), "Lexed file");

    for token in tokens {
        match settings.format {
            OutputFormat::Json => println!("{}", json_token(&file, token)),
            OutputFormat::Plain | OutputFormat::Fancy => println!("{}", token_line(token)),
        }
    }
    print_diagnostics(&file, &source, diagnostics, &settings);

    if lexer.has_errors() {
        let count = lexer.diagnostics().len();
        let plural = if count == 1 { "" } else { "s" };
        miette::bail!("{count} lexical error{plural} in '{file}'");
    }
    Ok(())
}

/// One row of the token table: `line:column  kind  lexeme`.
pub fn token_line(token: &Token) -> String {
    let position = token.position().to_string();
    let kind = format!("{:?}", token.kind());
    format!("{position:<8} {kind:<16} {}", token.lexeme())
}

/// One JSON object describing a token.
pub fn json_token(file: &Utf8Path, token: &Token) -> serde_json::Value {
    let value = match token.value() {
        TokenValue::Text(text) => serde_json::json!(text.as_str()),
        TokenValue::Integer(n) => serde_json::json!(n),
        TokenValue::Float(x) => serde_json::json!(x),
    };
    serde_json::json!({
        "file": file.as_str(),
        "kind": format!("{:?}", token.kind()),
        "lexeme": token.lexeme(),
        "value": value,
        "line": token.line(),
        "column": token.column(),
        "span_start": token.span().start(),
        "span_end": token.span().end(),
    })
}
