// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for help and version output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;
use common::*;
use yare::parameterized;

#[parameterized(
    short = { "-h" },
    long = { "--help" },
)]
fn help_exits_zero_and_describes_options(flag: &str) {
    primetable()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--delimiter"))
        .stdout(predicate::str::contains("multiplication table"));
}

#[test]
fn help_shows_default_delimiter() {
    primetable()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: ,]"));
}

#[test]
fn help_shows_examples() {
    primetable()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("primetable -n 10"));
}

#[test]
fn no_color_disables_escape_sequences() {
    primetable()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[parameterized(
    long_version = { "--version" },
    short_v = { "-v" },
    silent_v = { "-V" },
)]
fn version_flag_outputs_version(flag: &str) {
    primetable()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("primetable"))
        .stdout(predicate::str::is_match(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap());
}

#[test]
fn help_is_written_to_stdout_only() {
    primetable()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty().not())
        .stderr(predicate::str::is_empty());
}
