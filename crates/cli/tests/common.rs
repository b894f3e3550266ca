// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;

pub fn primetable() -> Command {
    let mut cmd = cargo_bin_cmd!("primetable");
    cmd.env_remove("PRIMETABLE_LOG")
        .env_remove("PRIMETABLE_TIMINGS")
        .env("NO_COLOR", "1");
    cmd
}

/// Run with the given args and return stdout, asserting success.
pub fn stdout_of(args: &[&str]) -> String {
    let output = primetable().args(args).output().unwrap();
    assert!(output.status.success(), "failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}
