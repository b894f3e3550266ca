// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ptrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("count {count} is out of range\n  hint: the number of primes must be between {min} and {max}")]
    CountOutOfRange { count: usize, min: usize, max: usize },

    #[error(transparent)]
    Core(#[from] pt_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ptrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
