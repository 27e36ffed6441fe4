// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Errors raised when the input ends in the middle of a construct.
///
/// A failed split never yields a partial token list: the caller gets either
/// every token or one of these.
///
/// # Examples
///
/// ```
/// use shellsplit::{split, LexError};
///
/// let err = split("echo \"oops").unwrap_err();
/// assert!(matches!(err, LexError::UnterminatedQuote { quote: '"', .. }));
///
/// let err = split("trailing\\").unwrap_err();
/// assert!(matches!(err, LexError::UnterminatedEscape { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// End of input while a quoted section was still open.
    ///
    /// The span runs from the opening quote (or the `$` of a `$'`/`$"` quote)
    /// to the end of input.
    #[error("unterminated {} quote starting at position {}", quote_name(*quote), span.start)]
    UnterminatedQuote {
        /// The character that would have closed the quote.
        quote: char,
        span: Span,
    },

    /// End of input right after an escape character.
    #[error("unterminated escape '{escape}' at position {}", span.start)]
    UnterminatedEscape {
        /// The pending escape character.
        escape: char,
        span: Span,
    },
}

fn quote_name(quote: char) -> String {
    match quote {
        '\'' => "single".to_string(),
        '"' => "double".to_string(),
        other => format!("'{other}'"),
    }
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedQuote { span, .. } => *span,
            LexError::UnterminatedEscape { span, .. } => *span,
        }
    }

    /// Caret snippet of `input` around the error location.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// Rustc-style report with line and column of the error.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
