// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy prime sequence.
//!
//! A candidate `n` is prime when no previously found prime `p` with
//! `2p <= n` divides it. The scan over found primes stops at the first
//! `p` past that bound, so the found list doubles as the divisor table.
//!
//! The sequence is infinite in principle and not restartable in place:
//! construct a new [`Primes`] to start again from 2.

use crate::error::{Error, Result};

/// First candidate tested by a fresh generator.
const FIRST_CANDIDATE: u64 = 2;

/// Stateful prime generator owning its found list and candidate cursor.
#[derive(Debug, Clone)]
pub struct Primes {
    /// Primes produced so far, in increasing order.
    found: Vec<u64>,
    /// Next integer to test. `None` once the cursor has passed `u64::MAX`.
    next: Option<u64>,
}

impl Primes {
    /// Creates a generator positioned at the first prime.
    pub fn new() -> Self {
        Primes {
            found: Vec::new(),
            next: Some(FIRST_CANDIDATE),
        }
    }

    /// Produces the next prime and advances past it.
    ///
    /// Returns `None` only if the candidate space is exhausted, which
    /// cannot happen for any count a caller could reasonably request.
    pub fn advance(&mut self) -> Option<u64> {
        let mut candidate = self.next?;
        loop {
            if self.is_prime(candidate) {
                self.found.push(candidate);
                self.next = candidate.checked_add(1);
                return Some(candidate);
            }
            match candidate.checked_add(1) {
                Some(n) => candidate = n,
                None => {
                    self.next = None;
                    return None;
                }
            }
        }
    }

    /// Primes produced so far.
    pub fn found(&self) -> &[u64] {
        &self.found
    }

    // `p <= n / 2` is the integer form of `2p <= n` and cannot overflow.
    fn is_prime(&self, n: u64) -> bool {
        self.found
            .iter()
            .take_while(|&&p| p <= n / 2)
            .all(|&p| n % p != 0)
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.advance()
    }
}

/// Collects the first `count` primes from a fresh generator.
pub fn first_primes(count: usize) -> Result<Vec<u64>> {
    let primes: Vec<u64> = Primes::new().take(count).collect();
    if primes.len() < count {
        return Err(Error::SequenceExhausted {
            produced: primes.len(),
            requested: count,
        });
    }
    Ok(primes)
}

#[cfg(test)]
#[path = "primes_tests.rs"]
mod tests;
