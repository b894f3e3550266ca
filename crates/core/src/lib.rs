// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pt-core: Prime multiplication tables.
//!
//! This crate provides the computational pieces used by the `primetable` CLI:
//!
//! - [`Primes`] - a lazy, strictly increasing sequence of primes starting at 2
//! - [`outer_product`] - applies a binary function to every ordered pair of a vector
//! - [`Table`] - headers plus a square row-major content matrix, renderable as
//!   delimited text
//!
//! ```rust,ignore
//! use pt_core::{first_primes, Table};
//!
//! let primes = first_primes(3)?;
//! let table = Table::from_headers(primes, |x, y| x * y);
//! assert_eq!(table.render(";"), "*;2;3;5\n2;4;6;10\n3;6;9;15\n5;10;15;25\n");
//! ```

pub mod error;
pub mod primes;
pub mod product;
pub mod table;

pub use error::{Error, Result};
pub use primes::{first_primes, Primes};
pub use product::outer_product;
pub use table::{Table, CORNER_MARKER, LINE_TERMINATOR};
