/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Canonical multipole mode ordering
//!
//! Every array in this crate that is indexed by multipole mode uses the same
//! layout: degree `n` outermost, order `m` ascending within each degree. The
//! 1-based linear index of `(n, m)` is `n(n+1) + m`, so a truncation at degree
//! `lmax` holds `rmax = lmax(lmax+2)` modes.
//!
//! Because orders are stored symmetrically around `m = 0`, the slot of the
//! companion mode `(n, -m)` is always `r - 2m`.

use super::errors::{Result, VshError};
use std::fmt;

/// A single multipole mode `(n, m)` together with its linear index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode {
    /// 1-based linear index in the canonical ordering
    pub r: usize,
    /// Multipole degree, `n >= 1`
    pub n: i32,
    /// Multipole order, `-n <= m <= n`
    pub m: i32,
}

impl Mode {
    /// Create the mode `(n, m)`, validating the quantum numbers
    pub fn new(n: i32, m: i32) -> Result<Self> {
        if n < 1 || m.abs() > n {
            return Err(VshError::Configuration(format!(
                "invalid multipole mode (n={}, m={})",
                n, m
            )));
        }

        Ok(Self {
            r: linear_index(n, m),
            n,
            m,
        })
    }

    /// Recover the mode stored at 1-based linear index `r`
    pub fn from_index(r: usize) -> Result<Self> {
        if r == 0 {
            return Err(VshError::Configuration(
                "linear mode index is 1-based; got 0".to_string(),
            ));
        }

        let n = integer_sqrt(r);
        let m = r as i64 - (n * (n + 1)) as i64;

        Ok(Self {
            r,
            n: n as i32,
            m: m as i32,
        })
    }

    /// 0-based array slot of this mode
    pub fn offset(&self) -> usize {
        self.r - 1
    }

    /// The mode `(n, -m)`
    pub fn companion(&self) -> Self {
        Self {
            r: (self.r as i64 - 2 * self.m as i64) as usize,
            n: self.n,
            m: -self.m,
        }
    }

    /// 0-based array slot of the companion mode `(n, -m)`
    pub fn companion_offset(&self) -> usize {
        self.companion().offset()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r={} (n={}, m={})", self.r, self.n, self.m)
    }
}

/// 1-based linear index of `(n, m)`; the caller guarantees `|m| <= n`
pub fn linear_index(n: i32, m: i32) -> usize {
    (n as i64 * (n as i64 + 1) + m as i64) as usize
}

/// Number of modes for truncation degree `lmax`
///
/// Fails when `lmax(lmax+2)` does not fit in a `usize`.
pub fn lmax_to_rmax(lmax: usize) -> Result<usize> {
    lmax.checked_add(2)
        .and_then(|upper| lmax.checked_mul(upper))
        .ok_or_else(|| VshError::Configuration(format!("lmax={} holds more modes than fit in usize", lmax)))
}

/// Truncation degree holding exactly `rmax` modes
///
/// Fails when no integer `lmax >= 1` satisfies `lmax(lmax+2) == rmax`.
pub fn rmax_to_lmax(rmax: usize) -> Result<usize> {
    let unreachable = || {
        VshError::Configuration(format!(
            "rmax={} is not lmax(lmax+2) for any integer lmax >= 1",
            rmax
        ))
    };

    let lmax = integer_sqrt(rmax.checked_add(1).ok_or_else(unreachable)?) - 1;
    if lmax == 0 || lmax_to_rmax(lmax)? != rmax {
        return Err(unreachable());
    }

    Ok(lmax)
}

/// Iterate over all modes up to degree `lmax` in canonical order
///
/// A degree too large for [`lmax_to_rmax`] enumerates up to `usize::MAX`.
pub fn mode_indices(lmax: usize) -> ModeIndices {
    ModeIndices {
        next: 1,
        rmax: lmax_to_rmax(lmax).unwrap_or(usize::MAX),
    }
}

/// Iterator produced by [`mode_indices`]
#[derive(Debug, Clone)]
pub struct ModeIndices {
    next: usize,
    rmax: usize,
}

impl Iterator for ModeIndices {
    type Item = Mode;

    fn next(&mut self) -> Option<Mode> {
        if self.next > self.rmax {
            return None;
        }

        let r = self.next;
        self.next += 1;

        let n = integer_sqrt(r);
        Some(Mode {
            r,
            n: n as i32,
            m: (r as i64 - (n * (n + 1)) as i64) as i32,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.rmax {
            0
        } else {
            self.rmax - self.next + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ModeIndices {}

/// Largest `s` with `s * s <= x`
fn integer_sqrt(x: usize) -> usize {
    let mut s = (x as f64).sqrt() as usize;
    while s.checked_mul(s).map_or(true, |sq| sq > x) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).is_some_and(|sq| sq <= x) {
        s += 1;
    }
    s
}
