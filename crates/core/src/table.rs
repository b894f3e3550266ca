// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Square tables and their delimited-text rendering.
//!
//! Output format:
//! ```text
//! *,2,3,5
//! 2,4,6,10
//! 3,6,9,15
//! 5,10,15,25
//! ```
//!
//! The first line is the corner marker followed by the headers. Every
//! following line starts with the header of that row. Delimiters are
//! written verbatim with no quoting or escaping.

use std::fmt::{self, Display, Write};

use crate::error::{Error, Result};
use crate::product::outer_product;

/// Marker written in the top-left cell.
pub const CORNER_MARKER: &str = "*";

/// Terminator written after every line, including the last.
pub const LINE_TERMINATOR: &str = "\n";

/// Header values plus a row-major content matrix.
///
/// Invariant: there is one content row per header and every row has one
/// value per header. Tables are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    headers: Vec<T>,
    content: Vec<Vec<T>>,
}

impl<T> Table<T> {
    /// Creates a table from explicit headers and content, checking its shape.
    pub fn new(headers: Vec<T>, content: Vec<Vec<T>>) -> Result<Self> {
        if content.len() != headers.len() {
            return Err(Error::RowCountMismatch {
                rows: content.len(),
                headers: headers.len(),
            });
        }
        if let Some((row, values)) = content
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != headers.len())
        {
            return Err(Error::RaggedRow {
                row,
                len: values.len(),
                expected: headers.len(),
            });
        }
        Ok(Table { headers, content })
    }

    /// Builds the table whose cell `(i, j)` is `f(headers[i], headers[j])`.
    pub fn from_headers<F>(headers: Vec<T>, f: F) -> Self
    where
        F: Fn(&T, &T) -> T,
    {
        let content = outer_product(&headers, f);
        Table { headers, content }
    }

    pub fn headers(&self) -> &[T] {
        &self.headers
    }

    pub fn content(&self) -> &[Vec<T>] {
        &self.content
    }

    /// Number of headers (and rows).
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl<T: Display> Table<T> {
    /// Renders the table as delimited text, one `\n`-terminated line per row.
    pub fn render(&self, delimiter: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_delimited(&mut out, delimiter);
        out
    }

    /// Streams the rendered table into `out`.
    pub fn write_delimited<W: Write>(&self, out: &mut W, delimiter: &str) -> fmt::Result {
        out.write_str(CORNER_MARKER)?;
        out.write_str(delimiter)?;
        write_joined(out, &self.headers, delimiter)?;
        out.write_str(LINE_TERMINATOR)?;

        for (label, row) in self.headers.iter().zip(&self.content) {
            write!(out, "{label}")?;
            out.write_str(delimiter)?;
            write_joined(out, row, delimiter)?;
            out.write_str(LINE_TERMINATOR)?;
        }
        Ok(())
    }
}

fn write_joined<W: Write, T: Display>(out: &mut W, values: &[T], delimiter: &str) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_str(delimiter)?;
        }
        write!(out, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
