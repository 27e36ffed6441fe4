// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellsplit split` specs

use crate::prelude::*;
use serde_json::json;

#[test]
fn prints_one_word_per_line() {
    cli()
        .args(&["split", r#"docker run --name "my box" alpine"#])
        .passes()
        .stdout_eq("docker\nrun\n--name\nmy box\nalpine\n");
}

#[test]
fn json_output_keeps_empty_and_control_words() {
    cli()
        .args(&["-o", "json", "split", r"a '' $'x\ty'"])
        .passes()
        .stdout_json(json!(["a", "", "x\ty"]));
}

#[test]
fn reads_stdin_when_input_omitted() {
    cli()
        .args(&["split", "-o", "json"])
        .stdin("one 'two three'\n")
        .passes()
        .stdout_json(json!(["one", "two three"]));
}

#[test]
fn empty_input_prints_nothing() {
    cli().args(&["split", "   "]).passes().stdout_eq("");
}

#[test]
fn unterminated_quote_shows_diagnostic() {
    cli()
        .args(&["split", "echo 'open"])
        .fails()
        .code(2)
        .stderr_has("error: unterminated single quote starting at position 5")
        .stderr_has("line 1, column 6")
        .stderr_has("echo 'open");
}

#[test]
fn unterminated_escape_fails() {
    cli()
        .args(&["split", "trailing\\"])
        .fails()
        .code(2)
        .stderr_has("unterminated escape");
}

#[test]
fn no_ansi_c_flag_keeps_dollar() {
    cli()
        .args(&["--no-ansi-c", "-o", "json", "split", r"$'\n'"])
        .passes()
        .stdout_json(json!([r"$\n"]));
}

#[test]
fn no_locale_flag_keeps_dollar() {
    cli()
        .args(&["--no-locale", "-o", "json", "split", r#"$"x""#])
        .passes()
        .stdout_json(json!(["$x"]));
}
