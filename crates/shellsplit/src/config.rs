// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Character classes and feature switches for a [`Lexer`](crate::Lexer).
///
/// The configuration is an immutable value: build it once, then hand a
/// reference to as many lexers as needed. Every field has a default, and
/// deserialization accepts partial documents.
///
/// # Examples
///
/// ```
/// use shellsplit::{split_with, LexerConfig};
///
/// let config = LexerConfig::default().with_ansi_c_quotes(false);
/// assert_eq!(split_with("$'a\\tb'", &config).unwrap(), vec!["$a\\tb"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Characters that separate tokens outside of quotes.
    pub whitespace: String,
    /// Characters that open and close a quoted section.
    pub quotes: String,
    /// Characters that escape the character after them.
    pub escapes: String,
    /// Quote characters inside which escapes are honored.
    pub escaped_quotes: String,
    /// Enable ANSI-C `$'...'` quoting.
    pub ansi_c_quotes: bool,
    /// Enable locale `$"..."` quoting (contents are never translated).
    pub locale_quotes: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            whitespace: " \t\r\n".to_string(),
            quotes: "'\"".to_string(),
            escapes: "\\".to_string(),
            escaped_quotes: "\"".to_string(),
            ansi_c_quotes: true,
            locale_quotes: true,
        }
    }
}

impl LexerConfig {
    pub fn with_whitespace(mut self, chars: impl Into<String>) -> Self {
        self.whitespace = chars.into();
        self
    }

    pub fn with_quotes(mut self, chars: impl Into<String>) -> Self {
        self.quotes = chars.into();
        self
    }

    pub fn with_escapes(mut self, chars: impl Into<String>) -> Self {
        self.escapes = chars.into();
        self
    }

    pub fn with_escaped_quotes(mut self, chars: impl Into<String>) -> Self {
        self.escaped_quotes = chars.into();
        self
    }

    pub fn with_ansi_c_quotes(mut self, enabled: bool) -> Self {
        self.ansi_c_quotes = enabled;
        self
    }

    pub fn with_locale_quotes(mut self, enabled: bool) -> Self {
        self.locale_quotes = enabled;
        self
    }

    #[inline]
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(c)
    }

    #[inline]
    pub(crate) fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(c)
    }

    #[inline]
    pub(crate) fn is_escape(&self, c: char) -> bool {
        self.escapes.contains(c)
    }

    #[inline]
    pub(crate) fn honors_escapes(&self, quote: char) -> bool {
        self.escaped_quotes.contains(quote)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
