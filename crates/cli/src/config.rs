// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loading lexer configuration files.

use anyhow::{Context, Result};
use shellsplit::LexerConfig;
use std::path::Path;

/// Read a TOML lexer configuration. Missing keys take their defaults.
pub fn load(path: &Path) -> Result<LexerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded lexer config");
    Ok(config)
}

pub fn parse(text: &str) -> Result<LexerConfig> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
