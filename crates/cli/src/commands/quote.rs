// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellsplit quote` and `shellsplit join`

use anyhow::Result;
use clap::Args;

use crate::output::{format_line, OutputFormat};

#[derive(Args)]
pub struct QuoteArgs {
    /// Word to quote
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(Args)]
pub struct JoinArgs {
    /// Words to quote and join. Words after the first may start with `-`;
    /// pass global flags before the subcommand.
    #[arg(value_name = "WORD", allow_hyphen_values = true)]
    pub words: Vec<String>,
}

pub fn handle_quote(args: QuoteArgs, format: OutputFormat) -> Result<()> {
    print!("{}", format_line(&shellsplit::quote(&args.word), format)?);
    Ok(())
}

pub fn handle_join(args: JoinArgs, format: OutputFormat) -> Result<()> {
    tracing::debug!(count = args.words.len(), "joining words");
    print!("{}", format_line(&shellsplit::join(&args.words), format)?);
    Ok(())
}
