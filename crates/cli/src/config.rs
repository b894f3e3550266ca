// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! A [`RunConfig`] is the validated form of the command line: how many primes
//! head the table and which delimiter separates fields. Clap enforces the
//! same bounds at parse time; [`RunConfig::new`] repeats the check for
//! library callers that build a config directly.

use crate::error::{Error, Result};

/// Smallest accepted number of primes.
pub const MIN_COUNT: usize = 1;
/// Largest accepted number of primes.
pub const MAX_COUNT: usize = 1000;
/// Field delimiter used when none is given.
pub const DEFAULT_DELIMITER: &str = ",";

/// Validated settings for one table run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of primes heading the table, within `MIN_COUNT..=MAX_COUNT`.
    pub count: usize,
    /// Field delimiter, used verbatim. May be empty.
    pub delimiter: String,
}

impl RunConfig {
    pub fn new(count: usize, delimiter: impl Into<String>) -> Result<Self> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(Error::CountOutOfRange {
                count,
                min: MIN_COUNT,
                max: MAX_COUNT,
            });
        }
        Ok(RunConfig {
            count,
            delimiter: delimiter.into(),
        })
    }
}

impl TryFrom<&crate::Cli> for RunConfig {
    type Error = Error;

    fn try_from(cli: &crate::Cli) -> Result<Self> {
        RunConfig::new(usize::from(cli.count), cli.delimiter.as_str())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
