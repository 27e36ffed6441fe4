// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting words for safe reinsertion into a shell command line.

use std::borrow::Cow;

/// Quote `word` so that splitting the result yields exactly `word`.
///
/// Words made only of ASCII letters, digits and `@%_-+=:,./` come back
/// unchanged. Anything else is wrapped in single quotes, with each embedded
/// `'` written as `'"'"'`.
///
/// # Examples
///
/// ```
/// use shellsplit::quote;
///
/// assert_eq!(quote(""), "''");
/// assert_eq!(quote("file.txt"), "file.txt");
/// assert_eq!(quote("a b"), "'a b'");
/// assert_eq!(quote("it's"), r#"'it'"'"'s'"#);
/// ```
pub fn quote(word: &str) -> Cow<'_, str> {
    if word.is_empty() {
        return Cow::Borrowed("''");
    }
    if word.chars().all(is_safe) {
        return Cow::Borrowed(word);
    }
    Cow::Owned(format!("'{}'", word.replace('\'', r#"'"'"'"#)))
}

/// Quote each word and join them with single spaces.
///
/// ```
/// use shellsplit::{join, split};
///
/// let line = join(["echo", "two words", ""]);
/// assert_eq!(line, "echo 'two words' ''");
/// assert_eq!(split(&line).unwrap(), vec!["echo", "two words", ""]);
/// ```
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&quote(word.as_ref()));
    }
    line
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '_' | '-' | '+' | '=' | ':' | ',' | '.' | '/')
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
