// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the rendered table on stdout.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;
use common::*;
use yare::parameterized;

/// Parse stdout back into (headers, rows) using the given delimiter.
fn parse_table(stdout: &str, delimiter: &str) -> (Vec<u64>, Vec<(u64, Vec<u64>)>) {
    let body = stdout.strip_suffix("\n\n").expect("table ends with a blank line");
    let mut lines = body.split('\n');
    let header = lines.next().unwrap();
    let mut fields = header.split(delimiter);
    similar_asserts::assert_eq!(fields.next(), Some("*"));
    let headers = fields.map(|f| f.parse().unwrap()).collect();
    let rows = lines
        .map(|line| {
            let mut fields = line.split(delimiter).map(|f| f.parse::<u64>().unwrap());
            let label = fields.next().unwrap();
            (label, fields.collect())
        })
        .collect();
    (headers, rows)
}

// =============================================================================
// Exact output
// =============================================================================

#[parameterized(
    one_comma = { &["-n", "1"], "*,2\n2,4\n\n" },
    three_semicolon = { &["-n", "3", "-d", ";"], "*;2;3;5\n2;4;6;10\n3;6;9;15\n5;10;15;25\n\n" },
    two_multi_char = { &["-n", "2", "-d", " | "], "* | 2 | 3\n2 | 4 | 6\n3 | 6 | 9\n\n" },
    two_empty = { &["-n", "2", "-d", ""], "*23\n246\n369\n\n" },
)]
fn renders_exact_table(args: &[&str], expected: &str) {
    similar_asserts::assert_eq!(stdout_of(args), expected);
}

#[test]
fn ten_primes_header_line() {
    let stdout = stdout_of(&["-n", "10"]);
    similar_asserts::assert_eq!(
        stdout.lines().next().unwrap(),
        "*,2,3,5,7,11,13,17,19,23,29"
    );
}

// =============================================================================
// Table structure
// =============================================================================

#[test]
fn every_cell_is_product_of_row_and_column_headers() {
    let stdout = stdout_of(&["-n", "60", "-d", "\t"]);
    let (headers, rows) = parse_table(&stdout, "\t");
    similar_asserts::assert_eq!(headers.len(), 60);
    similar_asserts::assert_eq!(rows.len(), 60);
    for ((label, row), expected_label) in rows.iter().zip(&headers) {
        similar_asserts::assert_eq!(label, expected_label);
        similar_asserts::assert_eq!(row.len(), headers.len());
        for (cell, column) in row.iter().zip(&headers) {
            similar_asserts::assert_eq!(*cell, label * column);
        }
    }
}

#[test]
fn largest_table_sums_to_known_value() {
    let stdout = stdout_of(&["-n", "1000"]);
    let (headers, rows) = parse_table(&stdout, ",");
    similar_asserts::assert_eq!(headers.iter().sum::<u64>(), 3_682_913);
    similar_asserts::assert_eq!(rows.len(), 1000);
    similar_asserts::assert_eq!(rows[999].1[999], 7919 * 7919);
}

#[test]
fn repeated_runs_are_identical() {
    similar_asserts::assert_eq!(stdout_of(&["-n", "42", "-d", ":"]), stdout_of(&["-n", "42", "-d", ":"]));
}
