// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word-splitting lexer.
//!
//! The lexer walks the input one character at a time and cuts it into words
//! at unquoted whitespace, resolving quotes and escapes on the way. Besides
//! POSIX single and double quotes it understands bash's `$'...'` (ANSI-C)
//! and `$"..."` (locale) forms.
//!
//! Comments are not recognized: `#` is an ordinary character.

use std::iter::FusedIterator;
use std::str::CharIndices;

use crate::config::LexerConfig;
use crate::error::LexError;
use crate::escape::{decode_ansi_c, unescape_quoted};
use crate::span::Span;

/// How the currently open quote treats its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteMode {
    /// Quoted by the given character.
    Plain(char),
    /// `$'...'`
    AnsiC,
    /// `$"..."`
    Locale,
}

impl QuoteMode {
    fn closing(self) -> char {
        match self {
            QuoteMode::Plain(c) => c,
            QuoteMode::AnsiC => '\'',
            QuoteMode::Locale => '"',
        }
    }

    fn honors_escapes(self, config: &LexerConfig) -> bool {
        match self {
            QuoteMode::Plain(c) => config.honors_escapes(c),
            QuoteMode::AnsiC | QuoteMode::Locale => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenQuote {
    mode: QuoteMode,
    /// Byte offset of the opening quote, or of its `$` prefix.
    start: usize,
    /// Length of the token buffer when the quote opened. Everything after it
    /// is raw quoted content.
    segment: usize,
}

/// Shell-style word splitter over a single input string.
///
/// A `Lexer` is an iterator of words. It makes one forward pass over the
/// input and stops for good after the last word or the first error.
///
/// # Examples
///
/// ```
/// use shellsplit::{Lexer, LexerConfig};
///
/// let config = LexerConfig::default();
/// let words: Vec<String> = Lexer::new("cp 'my file' $'a\\tb'", &config)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(words, vec!["cp", "my file", "a\tb"]);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    config: &'a LexerConfig,
    quote: Option<OpenQuote>,
    /// Position and character of an escape waiting for its operand.
    escape: Option<(usize, char)>,
    last_dollar: Option<usize>,
    /// `None` between words; `Some("")` once a word has started, even if it
    /// is still empty (as after `''`).
    token: Option<String>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            config,
            quote: None,
            escape: None,
            last_dollar: None,
            token: None,
            finished: false,
        }
    }

    /// Split `input` into words, all or nothing.
    pub fn tokenize(input: &str, config: &LexerConfig) -> Result<Vec<String>, LexError> {
        Lexer::new(input, config).collect()
    }

    fn next_token(&mut self) -> Result<Option<String>, LexError> {
        loop {
            let Some((pos, c)) = self.chars.next() else {
                return self.finish();
            };

            if let Some((_, escape)) = self.escape.take() {
                self.complete_escape(escape, c);
                continue;
            }

            if self.config.is_escape(c) && self.escaping_active() {
                self.escape = Some((pos, c));
                continue;
            }

            if let Some(open) = self.quote {
                if c == open.mode.closing() {
                    self.close_quote(open);
                } else {
                    self.push(c);
                }
                continue;
            }

            if self.config.is_quote(c) {
                self.open_quote(pos, c);
                continue;
            }

            if c == '$' {
                self.last_dollar = Some(pos);
            }

            if self.config.is_whitespace(c) {
                if let Some(token) = self.token.take() {
                    tracing::trace!(end = pos, token = %token, "split word");
                    return Ok(Some(token));
                }
                continue;
            }

            self.push(c);
        }
    }

    fn finish(&mut self) -> Result<Option<String>, LexError> {
        if let Some(open) = self.quote.take() {
            return Err(LexError::UnterminatedQuote {
                quote: open.mode.closing(),
                span: Span::new(open.start, self.input.len()),
            });
        }
        if let Some((pos, escape)) = self.escape.take() {
            return Err(LexError::UnterminatedEscape {
                escape,
                span: Span::char_at(pos, escape),
            });
        }
        if let Some(token) = &self.token {
            tracing::trace!(end = self.input.len(), token = %token, "split word");
        }
        Ok(self.token.take())
    }

    fn escaping_active(&self) -> bool {
        self.quote
            .map_or(true, |open| open.mode.honors_escapes(self.config))
    }

    fn complete_escape(&mut self, escape: char, c: char) {
        // Escaped newline continues the line.
        if c == '\n' {
            return;
        }
        if self.quote.is_some() {
            // Decoded when the quote closes.
            self.push(escape);
        }
        self.push(c);
    }

    fn open_quote(&mut self, pos: usize, c: char) {
        let after_dollar = self.last_dollar.is_some_and(|d| d + 1 == pos);
        let mode = match c {
            '\'' if after_dollar && self.config.ansi_c_quotes => QuoteMode::AnsiC,
            '"' if after_dollar && self.config.locale_quotes => QuoteMode::Locale,
            _ => QuoteMode::Plain(c),
        };

        let token = self.token.get_or_insert_with(String::new);
        let mut start = pos;
        if mode != QuoteMode::Plain(c) && token.ends_with('$') {
            token.pop();
            start -= 1;
        }

        self.quote = Some(OpenQuote {
            mode,
            start,
            segment: token.len(),
        });
    }

    fn close_quote(&mut self, open: OpenQuote) {
        self.quote = None;
        let token = self.token.get_or_insert_with(String::new);
        let raw = token.split_off(open.segment);
        let decoded = match open.mode {
            QuoteMode::Plain(q) if !self.config.honors_escapes(q) => raw,
            QuoteMode::Plain(q) => unescape_quoted(&raw, q, self.config),
            QuoteMode::Locale => unescape_quoted(&raw, '"', self.config),
            QuoteMode::AnsiC => decode_ansi_c(&raw, self.config),
        };
        tracing::trace!(start = open.start, mode = ?open.mode, decoded = %decoded, "closed quote");
        token.push_str(&decoded);
    }

    fn push(&mut self, c: char) {
        self.token.get_or_insert_with(String::new).push(c);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                tracing::debug!(error = %e, input = self.input, "split failed");
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
