// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pt-core operations.

use thiserror::Error;

/// All possible errors that can occur in pt-core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("table has {rows} content rows but {headers} headers\n  hint: a table must be square, one row per header")]
    RowCountMismatch { rows: usize, headers: usize },

    #[error("table row {row} has {len} values, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("prime sequence exhausted after {produced} of {requested} primes")]
    SequenceExhausted { produced: usize, requested: usize },
}

/// A specialized Result type for pt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
