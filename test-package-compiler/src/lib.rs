// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Snapshot tests for the Claves front end.
//!
//! This crate provides integration tests that validate lexer and parser
//! output on whole programs.
//!
//! Tests are organized in the `cases/` directory, with each subdirectory
//! holding one `main.claves` program. The tests live in
//! `tests/compiler_tests.rs`.
