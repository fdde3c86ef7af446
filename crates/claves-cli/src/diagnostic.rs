// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rich error diagnostics using miette.
//!
//! Converts claves-core diagnostics into miette-formatted errors with:
//! - Source code context
//! - Arrows pointing to the offending text
//! - A category label per phase

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use claves_core::source_analysis::{Diagnostic as CoreDiagnostic, Locale, Phase};
use miette::{Diagnostic, SourceSpan};

/// A source diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(claves::check))]
pub struct SourceDiagnostic {
    /// Lexical or syntactic
    pub phase: Phase,
    /// Category and message, without the position
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (interpolated by miette derive macro)
    pub label: String,
}

impl SourceDiagnostic {
    /// Create a new diagnostic from a claves-core diagnostic.
    pub fn from_core_diagnostic(
        diagnostic: &CoreDiagnostic,
        source_path: &str,
        source: &str,
        locale: Locale,
    ) -> Self {
        let phase = diagnostic.phase();
        let label = match locale {
            Locale::Es => format!("línea {}, columna {}", diagnostic.line(), diagnostic.column()),
            Locale::En => format!("line {}, column {}", diagnostic.line(), diagnostic.column()),
        };

        Self {
            phase,
            message: format!("{}: {}", phase.label(locale), diagnostic.message(locale)),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: diagnostic.span.into(),
            label,
        }
    }
}

/// Lowercase phase name used in JSON output.
pub const fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Lexical => "lexical",
        Phase::Syntactic => "syntactic",
    }
}
