// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-sequence decoding for quoted sections.
//!
//! The lexer keeps escape sequences inside quotes raw and hands the whole
//! section to this module when the quote closes. Two decoders exist:
//!
//! - [`unescape_quoted`]: the double-quote (and `$"..."`) rule, where only an
//!   escaped escape character and an escaped closing quote are resolved.
//! - [`decode_ansi_c`]: the `$'...'` rule, driven by [`ANSI_C_RULES`].

use crate::config::LexerConfig;

/// Resolve escape+escape and escape+`quote`; keep every other pair verbatim.
pub(crate) fn unescape_quoted(raw: &str, quote: char, config: &LexerConfig) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if config.is_escape(c) {
            if let Some(&next) = chars.peek() {
                if next == quote || config.is_escape(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// A decoded escape: the produced character and how many bytes of the text
/// after the escape character it consumed.
type Decoded = Option<(char, usize)>;

/// One ANSI-C escape form. Receives the text right after the escape
/// character and the escape character itself.
type Rule = fn(&str, char) -> Decoded;

/// ANSI-C escape forms in precedence order. The first rule that matches wins.
pub(crate) const ANSI_C_RULES: &[Rule] = &[
    literal,
    control_letter,
    octal,
    hex_byte,
    unicode_short,
    unicode_long,
    control_char,
];

/// Decode every ANSI-C escape sequence in `raw`.
///
/// An escape character followed by something no rule accepts is kept as is,
/// together with the character after it.
pub(crate) fn decode_ansi_c(raw: &str, config: &LexerConfig) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        let after = &rest[c.len_utf8()..];
        if config.is_escape(c) {
            if let Some((decoded, used)) = ANSI_C_RULES.iter().find_map(|rule| rule(after, c)) {
                out.push(decoded);
                rest = &after[used..];
                continue;
            }
        }
        out.push(c);
        rest = after;
    }
    out
}

fn literal(rest: &str, escape: char) -> Decoded {
    let c = rest.chars().next()?;
    (matches!(c, '\\' | '\'' | '"' | '?') || c == escape).then(|| (c, c.len_utf8()))
}

fn control_letter(rest: &str, _escape: char) -> Decoded {
    let decoded = match rest.chars().next()? {
        'a' => '\x07',
        'b' => '\x08',
        'e' | 'E' => '\x1b',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        _ => return None,
    };
    Some((decoded, 1))
}

fn octal(rest: &str, _escape: char) -> Decoded {
    let digits = leading(rest, 3, |c| matches!(c, '0'..='7'));
    radix_value(digits, 8).map(|c| (c, digits.len()))
}

fn hex_byte(rest: &str, _escape: char) -> Decoded {
    prefixed_hex(rest, 'x', 2)
}

fn unicode_short(rest: &str, _escape: char) -> Decoded {
    prefixed_hex(rest, 'u', 4)
}

fn unicode_long(rest: &str, _escape: char) -> Decoded {
    prefixed_hex(rest, 'U', 8)
}

fn control_char(rest: &str, _escape: char) -> Decoded {
    let arg = rest.strip_prefix('c')?.chars().next()?;
    let decoded = match arg {
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => return None,
        '?' => '\x7f',
        '@' => '\0',
        other => char::from_u32(u32::from(other) & 0x1f)?,
    };
    Some((decoded, 1 + arg.len_utf8()))
}

/// `prefix` followed by 1 to `max` hex digits, greedy.
fn prefixed_hex(rest: &str, prefix: char, max: usize) -> Decoded {
    let digits = leading(rest.strip_prefix(prefix)?, max, |c| c.is_ascii_hexdigit());
    radix_value(digits, 16).map(|c| (c, prefix.len_utf8() + digits.len()))
}

/// The longest prefix of `s` of at most `max` ASCII characters accepted by
/// `accept`.
fn leading(s: &str, max: usize, accept: impl Fn(char) -> bool) -> &str {
    let len = s
        .chars()
        .take(max)
        .take_while(|&c| accept(c))
        .count();
    &s[..len]
}

/// Parse `digits` as a code point. Values that are not Unicode scalar values
/// decode to U+FFFD.
fn radix_value(digits: &str, radix: u32) -> Option<char> {
    if digits.is_empty() {
        return None;
    }
    let value = u32::from_str_radix(digits, radix).ok()?;
    Some(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER))
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
