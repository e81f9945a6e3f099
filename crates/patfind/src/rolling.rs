// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rabin-Karp substring search with a rolling polynomial hash.
//!
//! Each window hash is derived from the previous one in O(1), so a search
//! runs in expected O(N + M). Hash equality only nominates a candidate;
//! a direct byte compare confirms it, so collisions cost time but never
//! produce a false match.

use crate::error::PatternError;

/// Polynomial base: one weight per byte value.
const BASE: u64 = 256;

/// Hash modulus. A small prime keeps residues tiny; collisions are
/// resolved by the confirming compare.
const MODULUS: u64 = 101;

/// Rabin-Karp matcher: owns the pattern, its hash, and the weight of a
/// window's leading byte.
///
/// Immutable after construction; window hashes live only for the duration
/// of a `search` call.
#[derive(Debug)]
pub struct RollingHashMatcher {
    pattern: Vec<u8>,
    /// Horner hash of the whole pattern, in `[0, MODULUS)`.
    hash: u64,
    /// `BASE^(M-1) % MODULUS`, subtracted out when the window rolls.
    lead_weight: u64,
}

impl RollingHashMatcher {
    /// Builds a matcher for `pattern`.
    ///
    /// Returns [`PatternError::EmptyPattern`] before any hash work when
    /// the pattern has no symbols.
    pub fn new(pattern: impl Into<Vec<u8>>) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let hash = horner_hash(&pattern);
        let mut lead_weight = 1;
        for _ in 1..pattern.len() {
            lead_weight = (lead_weight * BASE) % MODULUS;
        }
        tracing::trace!(pattern_len = pattern.len(), hash, "computed pattern hash");

        Ok(Self {
            pattern,
            hash,
            lead_weight,
        })
    }

    /// The pattern this matcher was built from.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// All start offsets where the pattern occurs in `text`, ascending.
    ///
    /// Text shorter than the pattern (including empty text) yields an
    /// empty result.
    pub fn search(&self, text: impl AsRef<[u8]>) -> Vec<usize> {
        let text = text.as_ref();
        let n = text.len();
        let m = self.pattern.len();
        let mut matches = Vec::new();

        if m > n {
            return matches;
        }

        let mut window = horner_hash(&text[..m]);

        for i in 0..=(n - m) {
            // Equal hashes only nominate a candidate; the byte compare
            // rules out collisions.
            if window == self.hash && text[i..i + m] == self.pattern[..] {
                matches.push(i);
            }

            if i + m < n {
                // Roll: drop text[i], append text[i + m]. Adding MODULUS
                // before the subtraction keeps the arithmetic unsigned
                // and the residue in `[0, MODULUS)`.
                let outgoing = (u64::from(text[i]) * self.lead_weight) % MODULUS;
                window = ((window + MODULUS - outgoing) * BASE + u64::from(text[i + m])) % MODULUS;
            }
        }

        matches
    }
}

/// Horner's rule over `bytes`, reduced mod [`MODULUS`] at every step so
/// intermediates stay far below `u64` overflow.
fn horner_hash(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |acc, &b| (acc * BASE + u64::from(b)) % MODULUS)
}

#[cfg(test)]
#[path = "rolling_tests.rs"]
mod tests;
