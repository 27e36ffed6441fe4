// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `--config` specs

use crate::prelude::*;
use serde_json::json;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn custom_whitespace_from_config() {
    let file = config_file("whitespace = \",\"\n");
    let path = file.path().to_str().unwrap();
    cli()
        .args(&["--config", path, "-o", "json", "split", "a b,c"])
        .passes()
        .stdout_json(json!(["a b", "c"]));
}

#[test]
fn flags_override_config() {
    let file = config_file("ansi_c_quotes = true\n");
    let path = file.path().to_str().unwrap();
    cli()
        .args(&["--config", path, "--no-ansi-c", "-o", "json", "split", r"$'\t'"])
        .passes()
        .stdout_json(json!([r"$\t"]));
}

#[test]
fn missing_config_fails() {
    cli()
        .args(&["--config", "/nonexistent/shellsplit.toml", "split", "a"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to read config /nonexistent/shellsplit.toml");
}

#[test]
fn invalid_config_fails() {
    let file = config_file("quotes = [1, 2]\n");
    let path = file.path().to_str().unwrap();
    cli()
        .args(&["--config", path, "split", "a"])
        .fails()
        .code(1)
        .stderr_has("Error: invalid config");
}
