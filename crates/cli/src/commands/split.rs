// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellsplit split`

use anyhow::{Context, Result};
use clap::Args;
use shellsplit::LexerConfig;
use std::io::Read;

use crate::exit_error::{ExitError, EXIT_MALFORMED_INPUT};
use crate::output::{format_words, OutputFormat};

#[derive(Args)]
pub struct SplitArgs {
    /// String to split. Read from stdin if omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,
}

pub fn handle(args: SplitArgs, config: &LexerConfig, format: OutputFormat) -> Result<()> {
    let input = match args.input {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let words = split_input(&input, config)?;
    tracing::debug!(count = words.len(), "split input");
    print!("{}", format_words(&words, format)?);
    Ok(())
}

/// Split `input`, turning lexer failures into a diagnostic exit error.
pub(crate) fn split_input(input: &str, config: &LexerConfig) -> Result<Vec<String>> {
    shellsplit::split_with(input, config)
        .map_err(|e| ExitError::new(EXIT_MALFORMED_INPUT, e.diagnostic(input)).into())
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
