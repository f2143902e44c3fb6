/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! VSH translation coefficients
//!
//! The addition theorem itself lives outside this crate. The cluster
//! assembler only needs a pure function of separation geometry and the four
//! mode integers, modelled here by the [`VshTranslation`] trait.
//!
//! Implementations must honour the reciprocity relations the assembler relies
//! on: translating in the opposite direction multiplies `A` by `(-1)^(n+v)` and
//! `B` by `(-1)^(n+v+1)`.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radial character of the translated expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VshMode {
    /// Outgoing waves (spherical Hankel functions of the first kind)
    Outgoing,
    /// Ingoing waves (spherical Hankel functions of the second kind)
    Ingoing,
    /// Regular waves (spherical Bessel functions)
    Incident,
}

/// Separation vector between two expansion origins in spherical form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Distance between the origins
    pub distance: f64,
    /// Polar angle measured from +z
    pub theta: f64,
    /// Azimuthal angle measured from +x
    pub phi: f64,
}

impl Separation {
    /// Spherical form of the cartesian vector `d`
    ///
    /// The polar angle of a zero vector is undefined; callers reject
    /// coincident origins before getting here.
    pub fn from_cartesian(d: [f64; 3]) -> Self {
        let distance = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        Self {
            distance,
            theta: (d[2] / distance).clamp(-1.0, 1.0).acos(),
            phi: d[1].atan2(d[0]),
        }
    }

    /// Separation of `target` relative to `origin`, i.e. `target - origin`
    pub fn between(target: [f64; 3], origin: [f64; 3]) -> Self {
        Self::from_cartesian([
            target[0] - origin[0],
            target[1] - origin[1],
            target[2] - origin[2],
        ])
    }
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r={:.6}, theta={:.6}, phi={:.6})",
            self.distance, self.theta, self.phi
        )
    }
}

/// Source of VSH translation coefficients `(A, B)`
///
/// `translate(m, n, u, v, ...)` returns the coefficients coupling mode
/// `(v, u)` of one origin into mode `(n, m)` of another. The result must depend
/// only on the geometry and the mode integers.
pub trait VshTranslation: Sync {
    #[allow(clippy::too_many_arguments)]
    fn translate(
        &self,
        m: i32,
        n: i32,
        u: i32,
        v: i32,
        separation: &Separation,
        k: Complex64,
        kind: VshMode,
    ) -> (Complex64, Complex64);
}

impl<F> VshTranslation for F
where
    F: Fn(i32, i32, i32, i32, &Separation, Complex64, VshMode) -> (Complex64, Complex64) + Sync,
{
    fn translate(
        &self,
        m: i32,
        n: i32,
        u: i32,
        v: i32,
        separation: &Separation,
        k: Complex64,
        kind: VshMode,
    ) -> (Complex64, Complex64) {
        self(m, n, u, v, separation, k, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_separation_axes() {
        let up = Separation::from_cartesian([0.0, 0.0, 2.0]);
        assert_relative_eq!(up.distance, 2.0);
        assert_relative_eq!(up.theta, 0.0);

        let down = Separation::between([0.0, 0.0, -1.0], [0.0, 0.0, 1.0]);
        assert_relative_eq!(down.distance, 2.0);
        assert_relative_eq!(down.theta, PI);

        let y = Separation::from_cartesian([0.0, 3.0, 0.0]);
        assert_relative_eq!(y.theta, FRAC_PI_2);
        assert_relative_eq!(y.phi, FRAC_PI_2);
    }

    #[test]
    fn test_closure_is_a_translation() {
        let stub = |m: i32, n: i32, u: i32, v: i32, sep: &Separation, _k: Complex64, _kind: VshMode| {
            (
                Complex64::new((m + n) as f64, sep.distance),
                Complex64::new((u + v) as f64, 0.0),
            )
        };
        let sep = Separation::from_cartesian([1.0, 0.0, 0.0]);
        let (a, b) = stub.translate(1, 2, -1, 3, &sep, Complex64::new(1.0, 0.0), VshMode::Outgoing);
        assert_eq!(a, Complex64::new(3.0, 1.0));
        assert_eq!(b, Complex64::new(2.0, 0.0));
    }
}
