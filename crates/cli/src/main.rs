// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use ptrs::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version succeed only if they were actually written.
            // Usage errors, and any output that could not be written, exit 1.
            let code = match e.print() {
                Ok(()) if !e.use_stderr() => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    ptrs::logging::init();

    if let Err(e) = ptrs::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
