// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Tests: [`crate::test_utils`].

#![cfg(test)]

use super::{cut_positions, random_bytes, SplitMix64};

#[test]
fn splitmix64_reference_values() {
    let mut rng = SplitMix64::new(0);
    assert_eq!(rng.next_u64(), 0xe220a8397b1dcdaf);
    assert_eq!(rng.next_u64(), 0x6e789e6aa1b965f4);
    assert_eq!(rng.next_u64(), 0x06c45d188009454f);
}

#[test]
fn random_bytes_layout() {
    assert!(random_bytes(1, 0).is_empty());
    assert_eq!(random_bytes(1, 10), [0xc1, 0x5c, 0x02, 0x89, 0xec, 0x2d, 0x0a, 0x91, 0x67, 0xec]);
    // Prefix-stable.
    assert_eq!(random_bytes(5, 100)[..37], random_bytes(5, 37)[..]);
}

#[test]
fn cut_positions_ceiling() {
    // Once the window is full, a constant run never triggers at 192 and is
    // cut by the ceiling (4 * 192) only.
    let cuts = cut_positions(&[b'A'; 2000], 192);
    assert_eq!(cuts, [4, 772, 1540]);
}
