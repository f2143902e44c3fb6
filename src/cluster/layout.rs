/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Flattening of (polarization, particle, mode) triples
//!
//! The interaction operator is stored as `[2, N, rmax, 2, N, rmax]` and the
//! coefficient tensors as `[2, N, rmax]`. The square linear system seen by the
//! solver uses the row-major flattening of the leading three axes:
//!
//! `flat = (polarization * N + particle) * rmax + mode_offset`

/// Number of polarizations (electric, magnetic)
pub const POLARIZATIONS: usize = 2;

/// Electric (TE, "p"/"a") polarization slot
pub const ELECTRIC: usize = 0;

/// Magnetic (TM, "q"/"b") polarization slot
pub const MAGNETIC: usize = 1;

/// Shape bookkeeping for an `N`-particle cluster truncated at `rmax` modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorLayout {
    particles: usize,
    rmax: usize,
}

impl OperatorLayout {
    /// Layout for `particles` particles with `rmax` modes each
    pub fn new(particles: usize, rmax: usize) -> Self {
        Self { particles, rmax }
    }

    /// Number of particles
    pub fn particles(&self) -> usize {
        self.particles
    }

    /// Number of modes per particle and polarization
    pub fn rmax(&self) -> usize {
        self.rmax
    }

    /// Side length of the flattened square system
    pub fn dim(&self) -> usize {
        POLARIZATIONS * self.particles * self.rmax
    }

    /// Shape of a coefficient tensor
    pub fn coefficient_shape(&self) -> (usize, usize, usize) {
        (POLARIZATIONS, self.particles, self.rmax)
    }

    /// Shape of the interaction operator
    pub fn operator_shape(&self) -> [usize; 6] {
        [
            POLARIZATIONS,
            self.particles,
            self.rmax,
            POLARIZATIONS,
            self.particles,
            self.rmax,
        ]
    }

    /// Flat index of `(polarization, particle, mode_offset)`
    #[inline]
    pub fn flat_index(&self, polarization: usize, particle: usize, mode_offset: usize) -> usize {
        (polarization * self.particles + particle) * self.rmax + mode_offset
    }

    /// Inverse of [`flat_index`](Self::flat_index)
    #[inline]
    pub fn unflatten(&self, flat: usize) -> (usize, usize, usize) {
        let mode_offset = flat % self.rmax;
        let rest = flat / self.rmax;
        (rest / self.particles, rest % self.particles, mode_offset)
    }

    /// Row/column index of `(polarization, mode_offset)` inside one
    /// particle-pair block of side `2 * rmax`
    #[inline]
    pub fn block_index(&self, polarization: usize, mode_offset: usize) -> usize {
        polarization * self.rmax + mode_offset
    }
}
