// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::{DEFAULT_DELIMITER, MAX_COUNT, MIN_COUNT};
use crate::help;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "primetable")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Generates the multiplication table for the first n primes")]
#[command(
    long_about = "Generates the multiplication table for the first n primes.\n\n\
    The table is printed as delimited text: a header line starting with '*',\n\
    then one line per prime with that prime as the row label."
)]
#[command(help_template = help::template())]
#[command(after_help = help::examples())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Number of primes to be generated, must be between 1 and 1000
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(MIN_COUNT as i64..=MAX_COUNT as i64),
    )]
    pub count: u16,

    /// Output field delimiter
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = DEFAULT_DELIMITER,
        allow_hyphen_values = true,
    )]
    pub delimiter: String,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
