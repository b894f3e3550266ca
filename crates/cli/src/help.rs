// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Examples shown after options in main help.
pub fn examples() -> String {
    colors::examples(
        "\
Examples:
  primetable -n 10             Table of the first 10 primes, comma separated
  primetable -n 5 -d \";\"       Semicolon separated
  primetable -n 3 -d \" | \"     Any string works as a delimiter",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
