// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a word list: one word per line as text, or a JSON array.
pub fn format_words(words: &[String], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(words.iter().map(|w| format!("{w}\n")).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(words)?)),
    }
}

/// Render a single line of shell text: verbatim, or as a JSON string.
pub fn format_line(line: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{line}\n")),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(line)?)),
    }
}
