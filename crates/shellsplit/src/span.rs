// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset spans into lexer input and diagnostic rendering.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the lexer input.
///
/// Offsets always fall on UTF-8 character boundaries because the lexer only
/// records positions reported by `char_indices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Span covering the single character `c` at `pos`.
    #[inline]
    pub fn char_at(pos: usize, c: char) -> Self {
        Self::new(pos, pos + c.len_utf8())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` when the span does not fit `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the text around `span` with carets underneath it.
///
/// At most `context_chars` characters are shown on either side of the span
/// start.
///
/// ```text
/// echo "oops
///      ^^^^^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let anchor = span.start.min(input.len());

    let start = input[..anchor]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(anchor);

    let end = input[anchor..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| anchor + i + c.len_utf8())
        .unwrap_or(input.len());

    let shown = &input[start..end];
    let pad = input[start..anchor].chars().count();
    let carets = span.slice(input).chars().count().max(1);

    format!("{}\n{}{}", shown, " ".repeat(pad), "^".repeat(carets))
}

/// Find the 1-indexed line, 0-indexed column (in characters), and the line
/// text containing `span.start`.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let anchor = span.start.min(source.len());
    let line_start = source[..anchor].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);
    let line_num = source[..line_start].matches('\n').count() + 1;
    let col = source[line_start..anchor].chars().count();

    (line_num, col, &source[line_start..line_end])
}

/// Render a rustc-style diagnostic for `span`.
///
/// ```text
/// error: unterminated double quote
///   --> line 1, column 6
///    |
///  1 | echo "oops
///    |      ^^^^^
/// ```
///
/// Carets stop at the end of the first line for spans that run past it.
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let on_line = line_content.chars().count().saturating_sub(col);
    let carets = span.slice(source).chars().count().min(on_line).max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(carets)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
