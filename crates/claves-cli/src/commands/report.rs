// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Printing diagnostics in the configured output format.

use camino::Utf8Path;
use claves_core::source_analysis::Diagnostic;

use crate::config::{OutputFormat, Settings};
use crate::diagnostic::{SourceDiagnostic, phase_name};

/// Print each diagnostic of `file`.
///
/// Plain lines and JSON objects go to stdout; fancy reports go to stderr.
pub fn print_diagnostics<'a>(
    file: &Utf8Path,
    source: &str,
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    settings: &Settings,
) {
    for diag in diagnostics {
        match settings.format {
            OutputFormat::Plain => println!("{}", plain_line(file, diag, settings)),
            OutputFormat::Fancy => {
                let source_diag = SourceDiagnostic::from_core_diagnostic(
                    diag,
                    file.as_str(),
                    source,
                    settings.locale,
                );
                eprintln!("{:?}", miette::Report::new(source_diag));
            }
            OutputFormat::Json => println!("{}", json_diagnostic(file, diag, settings)),
        }
    }
}

/// One plain-format line: the file name and the rendered diagnostic.
pub fn plain_line(file: &Utf8Path, diag: &Diagnostic, settings: &Settings) -> String {
    format!("{file}: {}", diag.render(settings.locale))
}

/// One JSON object describing a diagnostic.
pub fn json_diagnostic(file: &Utf8Path, diag: &Diagnostic, settings: &Settings) -> serde_json::Value {
    serde_json::json!({
        "file": file.as_str(),
        "phase": phase_name(diag.phase()),
        "message": diag.message(settings.locale),
        "line": diag.line(),
        "column": diag.column(),
        "span_start": diag.span.start(),
        "span_end": diag.span.end(),
        "offending": diag.offending.as_deref(),
    })
}
