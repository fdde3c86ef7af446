// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Claves command-line interface.
//!
//! This is the main entry point for the `claves` command.

use clap::{ArgAction, Parser, Subcommand};
use claves_core::source_analysis::Locale;
use miette::Result;
use tracing_subscriber::{self, EnvFilter};

mod commands;
mod config;
mod diagnostic;

use config::OutputFormat;

/// Claves: a small language for declaring key lists and printing strings
#[derive(Debug, Parser)]
#[command(name = "claves")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v: info, -vv: debug, -vvv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format: plain, fancy or json (overrides claves.toml)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Message language: es or en (overrides claves.toml)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lex and parse source files and report every diagnostic
    Check {
        /// Source file or directory to check
        #[arg(default_value = ".")]
        path: String,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Source file to tokenize
        path: String,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Check { path } => commands::check::run_check(&path, cli.format, cli.locale),
        Command::Tokens { path } => commands::tokens::run_tokens(&path, cli.format, cli.locale),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays reserved for tokens and diagnostics.
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // Targets are the crates' module paths, not the binary name.
    match v {
        0 => "claves_cli=warn,claves_core=warn",
        1 => "claves_cli=info,claves_core=info",
        2 => "claves_cli=debug,claves_core=debug",
        _ => "claves_cli=trace,claves_core=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "claves_cli=warn,claves_core=warn");
        assert_eq!(directive_for_verbosity(1), "claves_cli=info,claves_core=info");
        assert_eq!(directive_for_verbosity(2), "claves_cli=debug,claves_core=debug");
        assert_eq!(directive_for_verbosity(5), "claves_cli=trace,claves_core=trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["claves", "check"]).unwrap();
        assert!(matches!(cli.command, Command::Check { ref path } if path == "."));
        assert_eq!(cli.format, None);
        assert_eq!(cli.locale, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "claves", "tokens", "main.claves", "--format", "json", "--locale", "en", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.locale, Some(Locale::En));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["claves", "check", "--locale", "fr"]).is_err());
    }
}
