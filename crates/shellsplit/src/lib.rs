// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shell-style word splitting and quoting.
//!
//! This crate turns a command-line string into the argument list a shell
//! would pass to a program, and quotes arguments so they survive the trip
//! back.
//!
//! # Quick Start
//!
//! ```
//! use shellsplit::{join, split};
//!
//! let args = split(r#"run --name "my box" $'tab\there'"#)?;
//! assert_eq!(args, vec!["run", "--name", "my box", "tab\there"]);
//! assert_eq!(split(&join(&args))?, args);
//! # Ok::<(), shellsplit::LexError>(())
//! ```
//!
//! # Features
//!
//! - **POSIX quoting**: single quotes, double quotes, backslash escapes,
//!   escaped-newline line continuation
//! - **ANSI-C quoting**: `$'...'` with `\n`, `\t`, `\x41`, `\101`, `\u2603`,
//!   `\cA` and friends
//! - **Locale quoting**: `$"..."`, kept untranslated
//! - **Configurable** character classes via [`LexerConfig`]
//!
//! Variable and command substitution, globbing, redirections and comments
//! are out of scope; `$`, `*`, `>` and `#` are ordinary characters.

mod config;
mod error;
mod escape;
mod lexer;
mod quote;
pub mod span;

pub use config::LexerConfig;
pub use error::LexError;
pub use lexer::Lexer;
pub use quote::{join, quote};
pub use span::Span;

/// Split `input` into words with the default [`LexerConfig`].
pub fn split(input: &str) -> Result<Vec<String>, LexError> {
    split_with(input, &LexerConfig::default())
}

/// Split `input` into words with a custom [`LexerConfig`].
pub fn split_with(input: &str, config: &LexerConfig) -> Result<Vec<String>, LexError> {
    Lexer::tokenize(input, config)
}
