// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shellsplit - shell-style word splitting and quoting from the command line

mod commands;
mod config;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{quote, split};
use std::path::PathBuf;

use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "shellsplit",
    version,
    about = "Split strings into words the way a shell would, and quote words back"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Lexer configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Treat $'...' as a literal dollar followed by a single-quoted string
    #[arg(long = "no-ansi-c", global = true)]
    no_ansi_c: bool,

    /// Treat $"..." as a literal dollar followed by a double-quoted string
    #[arg(long = "no-locale", global = true)]
    no_locale: bool,

    /// Log more (repeat for trace output)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a string into words
    Split(split::SplitArgs),
    /// Quote one word for safe use in a shell command
    Quote(quote::QuoteArgs),
    /// Quote several words and join them into one command line
    Join(quote::JoinArgs),
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("{}", msg);
        }
        std::process::exit(code);
    }
}

/// Render an error for stderr.
///
/// [`ExitError`](exit_error::ExitError) messages are printed verbatim; they
/// are already formatted diagnostics. Everything else gets an `Error:` prefix
/// and its cause chain.
fn format_error(err: &anyhow::Error) -> String {
    if let Some(exit) = err.downcast_ref::<exit_error::ExitError>() {
        return exit.message.clone();
    }

    let mut buf = format!("Error: {}", err);
    for cause in err.chain().skip(1) {
        buf.push_str(&format!("\n  caused by: {}", cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut lexer_config = match &cli.config {
        Some(path) => config::load(path)?,
        None => shellsplit::LexerConfig::default(),
    };
    if cli.no_ansi_c {
        lexer_config.ansi_c_quotes = false;
    }
    if cli.no_locale {
        lexer_config.locale_quotes = false;
    }
    tracing::debug!(config = ?lexer_config, "lexer configuration");

    match cli.command {
        Commands::Split(args) => split::handle(args, &lexer_config, cli.output),
        Commands::Quote(args) => quote::handle_quote(args, cli.output),
        Commands::Join(args) => quote::handle_join(args, cli.output),
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
