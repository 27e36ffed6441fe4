// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellsplit quote` and `shellsplit join` specs

use crate::prelude::*;

#[yare::parameterized(
    empty      = { "", "''\n" },
    safe       = { "file.txt", "file.txt\n" },
    space      = { "a b", "'a b'\n" },
    apostrophe = { "it's", "'it'\"'\"'s'\n" },
)]
fn quote_word(word: &str, expected: &str) {
    cli().args(&["quote", word]).passes().stdout_eq(expected);
}

#[test]
fn join_words() {
    cli()
        .args(&["join", "ls", "-l", "my dir", ""])
        .passes()
        .stdout_eq("ls -l 'my dir' ''\n");
}

#[test]
fn join_output_splits_back() {
    let line = cli()
        .args(&["join", "a b", "c'd", "$HOME"])
        .passes()
        .stdout();

    cli()
        .args(&["-o", "json", "split", line.trim_end()])
        .passes()
        .stdout_json(serde_json::json!(["a b", "c'd", "$HOME"]));
}

#[test]
fn quote_as_json() {
    cli()
        .args(&["-o", "json", "quote", "a b"])
        .passes()
        .stdout_eq("\"'a b'\"\n");
}
