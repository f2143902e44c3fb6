/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Tests for the canonical mode enumeration

use gmt_rs::vsh::{linear_index, lmax_to_rmax, mode_indices, rmax_to_lmax, Mode, VshError};
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(10)]
fn test_mode_count_and_uniqueness(#[case] lmax: usize) {
    let modes: Vec<Mode> = mode_indices(lmax).collect();

    assert_eq!(modes.len(), lmax * (lmax + 2));
    assert_eq!(mode_indices(lmax).len(), lmax_to_rmax(lmax).unwrap());

    let pairs: HashSet<(i32, i32)> = modes.iter().map(|mode| (mode.n, mode.m)).collect();
    assert_eq!(pairs.len(), modes.len());

    for (expected_r, mode) in (1..).zip(modes.iter()) {
        assert_eq!(mode.r, expected_r);
        assert!(mode.n >= 1 && mode.n as usize <= lmax);
        assert!(mode.m.abs() <= mode.n);
        assert_eq!(linear_index(mode.n, mode.m), mode.r);
    }
}

#[test]
fn test_canonical_order() {
    let modes: Vec<(i32, i32)> = mode_indices(2).map(|mode| (mode.n, mode.m)).collect();
    assert_eq!(
        modes,
        vec![(1, -1), (1, 0), (1, 1), (2, -2), (2, -1), (2, 0), (2, 1), (2, 2)]
    );
}

#[rstest]
#[case(1, 3)]
#[case(2, 8)]
#[case(3, 15)]
#[case(4, 24)]
#[case(20, 440)]
fn test_rmax_lmax_inverse(#[case] lmax: usize, #[case] rmax: usize) {
    assert_eq!(lmax_to_rmax(lmax).unwrap(), rmax);
    assert_eq!(rmax_to_lmax(rmax).unwrap(), lmax);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(9)]
#[case(14)]
#[case(16)]
fn test_unreachable_rmax(#[case] rmax: usize) {
    assert!(matches!(rmax_to_lmax(rmax), Err(VshError::Configuration(_))));
}

#[test]
fn test_companion_is_order_negation() {
    for mode in mode_indices(4) {
        let companion = mode.companion();
        assert_eq!(companion.n, mode.n);
        assert_eq!(companion.m, -mode.m);
        assert_eq!(companion.r as i64, mode.r as i64 - 2 * mode.m as i64);
        assert_eq!(companion.companion(), mode);
    }
}

#[test]
fn test_oversized_counts_are_configuration_errors() {
    assert!(matches!(rmax_to_lmax(usize::MAX), Err(VshError::Configuration(_))));
    assert!(matches!(lmax_to_rmax(usize::MAX - 1), Err(VshError::Configuration(_))));
}
