// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `claves check`: lex and parse Claves source files and report diagnostics.
//!
//! This command runs both front-end phases over each `.claves` file and
//! reports every lexical and syntactic diagnostic. It exits non-zero if any
//! file has diagnostics.

use camino::Utf8PathBuf;
use claves_core::analyze;
use claves_core::source_analysis::Locale;
use miette::Result;
use tracing::{debug, info, instrument};

use super::report::print_diagnostics;
use super::sources::{find_source_files, project_root, read_source};
use crate::config::{OutputFormat, Settings, find_config};

/// Check the given path (file or directory).
///
/// Prints each diagnostic and returns an error if any are found.
#[instrument(skip_all, fields(path = %path))]
pub fn run_check(path: &str, format: Option<OutputFormat>, locale: Option<Locale>) -> Result<()> {
    let source_path = Utf8PathBuf::from(path);
    let source_files = find_source_files(&source_path)?;
    let settings = Settings::resolve(find_config(&project_root(&source_path))?, format, locale)?;
    info!(count = source_files.len(), ?settings, "Checking source files");

    let mut total_errors = 0usize;
    let mut files_with_errors = 0usize;

    for file in &source_files {
        let source = read_source(file, &settings)?;
        let analysis = analyze(&source);
        debug!(
            file = %file,
            tokens = analysis.tokens.len(),
            lexical = analysis.lexical.len(),
            syntactic = analysis.syntactic.len(),
            "Checked file"
        );

        print_diagnostics(file, &source, analysis.diagnostics(), &settings);

        if !analysis.is_valid() {
            files_with_errors += 1;
            total_errors += analysis.error_count();
        }
    }

    if total_errors > 0 {
        let files_checked = source_files.len();
        let plural = if total_errors == 1 { "" } else { "s" };
        miette::bail!(
            "{total_errors} diagnostic{plural} found in {files_with_errors} of {files_checked} file(s)"
        );
    }

    info!("No diagnostics");
    Ok(())
}
