// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Similarity scoring between fingerprints.

use crate::fingerprint::block::{signature, BlockSizeRelation};
use crate::fingerprint::Fingerprint;


/// The minimum length of a common substring two signatures must share
/// before they are scored at all.
///
/// Shorter signatures only need to share a substring as long as the
/// shorter one of them, and never more than a third of the longer one.
pub const MIN_COMMON_SUBSTRING: usize = 7;

/// Computes the Levenshtein distance between two symbol sequences.
///
/// Insertion, deletion and substitution all cost 1.
///
/// # Panics
///
/// Panics if `s2` is longer than [`signature::MAX_LEN`] symbols.
/// The distance is computed with a single row of that size.
pub fn edit_distance(s1: &[u8], s2: &[u8]) -> u32 {
    assert!(
        s2.len() <= signature::MAX_LEN,
        "edit_distance: the second sequence is longer than a signature"
    );
    let mut row = [0u32; signature::MAX_LEN + 1];
    for (i, slot) in row.iter_mut().enumerate().take(s2.len() + 1) {
        *slot = i as u32;
    }
    for (i1, &s1ch) in s1.iter().enumerate() {
        let mut prev_l = row[0];
        row[0] = i1 as u32 + 1;
        for (i2, &s2ch) in s2.iter().enumerate() {
            let curr_l = row[i2];
            let prev_c = row[i2 + 1];
            let cost_a = curr_l + 1;
            let cost_d = prev_c + 1;
            let cost_r = prev_l + u32::from(s1ch != s2ch);
            prev_l = prev_c;
            row[i2 + 1] = cost_a.min(cost_d.min(cost_r));
        }
    }
    row[s2.len()]
}

/// Tests whether two sequences share a common substring of `len` symbols.
///
/// An empty substring (`len == 0`) is always shared.
pub fn has_common_substring(s1: &[u8], s2: &[u8], len: usize) -> bool {
    if len == 0 {
        return true;
    }
    s1.windows(len).any(|w1| s2.windows(len).any(|w2| w1 == w2))
}

/// Scores two signatures computed with the same block size.
///
/// Returns `100` for identical sequences (including two empty ones).
/// Otherwise, the pair must share a common substring of
/// `min(MIN_COMMON_SUBSTRING, len1, len2, ceil(max(len1, len2) / 3))`
/// symbols or the result is `0`.
/// The score is the edit distance normalized by the longer length,
/// rounded half up:
///
/// ```text
/// round(100 * (1 - distance / max(len1, len2)))
/// ```
///
/// # Example
///
/// ```
/// use driftprint::internal_comparison::score_signatures;
///
/// assert_eq!(score_signatures(&[1, 2, 3, 4, 5, 6, 7, 8], &[1, 2, 3, 4, 5, 6, 7, 9]), 88);
/// assert_eq!(score_signatures(&[], &[]), 100);
/// assert_eq!(score_signatures(&[1], &[2]), 0);
/// ```
///
/// # Panics
///
/// Panics if `s2` is longer than [`signature::MAX_LEN`] symbols.
pub fn score_signatures(s1: &[u8], s2: &[u8]) -> u32 {
    if s1 == s2 {
        return 100;
    }
    let max_len = s1.len().max(s2.len());
    let min_common = MIN_COMMON_SUBSTRING
        .min(s1.len())
        .min(s2.len())
        .min((max_len + 2) / 3);
    if !has_common_substring(s1, s2, min_common) {
        return 0;
    }
    let max_len = max_len as u32;
    let distance = edit_distance(s1, s2).min(max_len);
    (200 * (max_len - distance) + max_len) / (2 * max_len)
}

impl Fingerprint {
    /// Compares two fingerprints and returns the similarity score
    /// (`0..=100`).
    ///
    /// *   Equal block sizes: the larger of the signature 1 pair score and
    ///     the signature 2 pair score.
    /// *   Block sizes differing by a factor of two: the signatures computed
    ///     with the shared block size are scored.
    /// *   Otherwise, the fingerprints are unrelated and score `0`.
    ///
    /// The comparison is symmetric.
    ///
    /// # Example
    ///
    /// ```
    /// use driftprint::Fingerprint;
    ///
    /// let a: Fingerprint = "192:oFFFFFFFFFFFFF6:oFFFFFF6".parse().unwrap();
    /// let b: Fingerprint = "192:oFFFFFFkFFFFFF6:oFFFkFF6".parse().unwrap();
    /// assert_eq!(a.compare(&b), 93);
    /// assert_eq!(a.compare(&a), 100);
    /// ```
    pub fn compare(&self, other: &Self) -> u32 {
        match self.block_size_relation(other) {
            BlockSizeRelation::NearEq => {
                let score1 = score_signatures(self.signature_1(), other.signature_1());
                let score2 = score_signatures(self.signature_2(), other.signature_2());
                score1.max(score2)
            }
            BlockSizeRelation::NearLt => score_signatures(self.signature_2(), other.signature_1()),
            BlockSizeRelation::NearGt => score_signatures(self.signature_1(), other.signature_2()),
            BlockSizeRelation::Far => 0,
        }
    }
}
