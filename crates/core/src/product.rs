// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generalized outer product of a vector with itself.

/// Applies `f` to every ordered pair of `vector`, row-major.
///
/// `result[i][j] == f(&vector[i], &vector[j])`. Element order is preserved
/// exactly; the combiner need not be commutative.
pub fn outer_product<T, U, F>(vector: &[T], f: F) -> Vec<Vec<U>>
where
    F: Fn(&T, &T) -> U,
{
    vector
        .iter()
        .map(|row| vector.iter().map(|col| f(row, col)).collect())
        .collect()
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod tests;
