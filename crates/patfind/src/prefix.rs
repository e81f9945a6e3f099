// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt substring search.
//!
//! The pattern is compiled into a failure table once; each search is then
//! a single pass over the text in O(N + M), with no backtracking over
//! text symbols.

use crate::error::PatternError;

/// KMP matcher: owns the pattern and its precomputed failure table.
///
/// Immutable after construction; `search` takes `&self`, so one instance
/// can serve any number of texts, concurrently if shared behind a
/// reference.
#[derive(Debug)]
pub struct PrefixFunctionMatcher {
    pattern: Vec<u8>,
    lps: Vec<usize>,
}

impl PrefixFunctionMatcher {
    /// Builds a matcher for `pattern`.
    ///
    /// Returns [`PatternError::EmptyPattern`] before any table work when
    /// the pattern has no symbols.
    pub fn new(pattern: impl Into<Vec<u8>>) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let lps = build_failure_table(&pattern);
        tracing::trace!(pattern_len = pattern.len(), "built failure table");

        Ok(Self { pattern, lps })
    }

    /// The pattern this matcher was built from.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// The failure table: entry `i` is the length of the longest proper
    /// prefix of `pattern[..=i]` that is also a suffix of it.
    pub fn failure_table(&self) -> &[usize] {
        &self.lps
    }

    /// All start offsets where the pattern occurs in `text`, ascending.
    ///
    /// Overlapping occurrences are all reported. Text shorter than the
    /// pattern (including empty text) yields an empty result.
    pub fn search(&self, text: impl AsRef<[u8]>) -> Vec<usize> {
        let text = text.as_ref();
        let n = text.len();
        let m = self.pattern.len();
        let mut matches = Vec::new();

        if m > n {
            return matches;
        }

        let mut i = 0; // text index
        let mut j = 0; // pattern index
        while i < n {
            if text[i] == self.pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    matches.push(i - j);
                    // Resume from the longest border so overlapping
                    // occurrences are still found.
                    j = self.lps[j - 1];
                }
            } else if j != 0 {
                // Fall back within the pattern; `i` never moves backwards.
                j = self.lps[j - 1];
            } else {
                i += 1;
            }
        }

        matches
    }
}

/// Builds the failure table with the two-pointer recurrence.
///
/// `length` holds the border length of the prefix ending at `i - 1`; on a
/// mismatch it falls back through successively shorter borders via the
/// table itself. Invariants: `lps[0] == 0` and `lps[i] <= i`.
fn build_failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut length = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
