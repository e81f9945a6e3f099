// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the rolling-hash matcher.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;

#[parameterized(
    full_match = { "abc", "abc", &[0] },
    at_start = { "abc", "abcdef", &[0] },
    interior = { "bcd", "abcdef", &[1] },
    at_end = { "def", "abcdef", &[3] },
    no_match = { "xyz", "abcdef", &[] },
    single_byte = { "a", "aaaaa", &[0, 1, 2, 3, 4] },
    overlapping = { "aa", "aaaa", &[0, 1, 2] },
    self_overlapping = { "aba", "ababa", &[0, 2] },
    repeated_block = { "abc", "abcXXXabcYYYabc", &[0, 6, 12] },
    pattern_longer_than_text = { "abcdef", "abc", &[] },
    empty_text = { "abc", "", &[] },
)]
fn search_positions(pattern: &str, text: &str, expected: &[usize]) {
    let matcher = RollingHashMatcher::new(pattern).unwrap();
    assert_eq!(
        matcher.search(text),
        expected,
        "pattern {:?} in text {:?}",
        pattern,
        text
    );
}

#[test]
fn empty_pattern_is_rejected() {
    assert_eq!(
        RollingHashMatcher::new("").unwrap_err(),
        PatternError::EmptyPattern
    );
}

#[test]
fn search_is_idempotent() {
    let matcher = RollingHashMatcher::new("ana").unwrap();
    let first = matcher.search("banana");
    let second = matcher.search("banana");
    assert_eq!(first, vec![1, 3]);
    assert_eq!(first, second);
}

// =============================================================================
// HASH-SPECIFIC TESTS
// =============================================================================

#[test]
fn pattern_hash_uses_horner_rule() {
    // "ab" = 97, 98: (97 * 256 + 98) % 101 == 84.
    let matcher = RollingHashMatcher::new("ab").unwrap();
    assert_eq!(matcher.hash, 84);
    assert_eq!(matcher.lead_weight, 256 % 101);
}

#[test]
fn hash_stays_within_modulus() {
    // High byte values push every intermediate toward the subtraction
    // edge; any residue leaking out of [0, MODULUS) would desync the
    // window from the pattern hash and drop the trailing matches.
    let matcher = RollingHashMatcher::new(vec![255u8, 255]).unwrap();
    assert!(matcher.hash < MODULUS);
    let text: Vec<u8> = [255u8, 255, 0, 255, 255, 255].into_iter().cycle().take(60).collect();
    let expected: Vec<usize> = (0..59)
        .filter(|&i| text[i..i + 2] == [255, 255])
        .collect();
    assert_eq!(matcher.search(&text), expected);
}

#[test]
fn single_byte_collision_is_verified_away() {
    // Byte 101 ('e') and byte 0 both hash to 0 mod 101; only the real
    // occurrence may be reported.
    let matcher = RollingHashMatcher::new("e").unwrap();
    assert_eq!(matcher.search([0u8, b'e', 0]), vec![1]);
}

#[test]
fn window_collision_is_verified_away() {
    // 256 % 101 == 54, so windows [1, 0] and [0, 54] share residue 54.
    let matcher = RollingHashMatcher::new(vec![1u8, 0]).unwrap();
    assert_eq!(matcher.search([0u8, 54, 1, 0]), vec![2]);
}
