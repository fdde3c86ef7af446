// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for front-end crash safety.
//!
//! Feeds arbitrary UTF-8 to the lexer and parser and checks that analysis
//! never panics and that every token and diagnostic points inside the input.
//!
//! # Corpus Seeding
//!
//! Seed `fuzz/corpus/parse_arbitrary/` with the programs under
//! `test-package-compiler/cases/`.

#![no_main]

use claves_core::analyze;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The lexer takes `&str`; invalid UTF-8 is rejected before it.
    if let Ok(source) = std::str::from_utf8(data) {
        let analysis = analyze(source);

        for token in &analysis.tokens {
            assert_eq!(&source[token.span().as_range()], token.lexeme());
        }
        for diag in analysis.diagnostics() {
            assert!(diag.span.end() as usize <= source.len());
        }
    }
});
