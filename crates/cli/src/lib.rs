// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ptrs - prime multiplication tables from the command line.
//!
//! This crate provides the library behind the `primetable` CLI tool. It
//! wires argument parsing, configuration, logging and output around the
//! generator, table builder and renderer from [`pt_core`].
//!
//! # Main Components
//!
//! - [`Cli`] - Command line arguments
//! - [`RunConfig`] - Validated prime count and delimiter
//! - [`render_table`] - Produce the table text for a config
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use ptrs::{render_table, RunConfig};
//!
//! let config = RunConfig::new(3, ";")?;
//! assert_eq!(render_table(&config)?, "*;2;3;5\n2;4;6;10\n3;6;9;15\n5;10;15;25\n");
//! ```

mod cli;
pub mod colors;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;
pub mod timings;

pub use cli::Cli;
pub use config::RunConfig;
pub use error::{Error, Result};

use std::io::Write;

use pt_core::{first_primes, Table};

/// Build and render the multiplication table described by `config`.
pub fn render_table(config: &RunConfig) -> Result<String> {
    tracing::debug!(count = config.count, delimiter = %config.delimiter, "rendering table");

    let primes = crate::time_phase!("primes::generate", first_primes(config.count))?;
    tracing::trace!(last = ?primes.last(), "generated primes");

    let table = crate::time_phase!("table::build", Table::from_headers(primes, |x, y| x * y));
    let rendered = crate::time_phase!("table::render", table.render(&config.delimiter));

    tracing::debug!(bytes = rendered.len(), "rendered table");
    Ok(rendered)
}

/// Execute a parsed command line, writing the table to `out`.
///
/// The table is rendered completely before anything is written, and is
/// followed by one extra line break.
pub fn run_to<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = RunConfig::try_from(cli)?;
    let rendered = render_table(&config)?;
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}

/// Execute a parsed command line against stdout. This is the main entry
/// point for the binary.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(cli, &mut out)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
