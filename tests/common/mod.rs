/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Stub translation coefficients shared by the integration tests
//!
//! Both stubs decay like an outgoing spherical wave and obey the reciprocity
//! relations of real VSH translation coefficients: reversing the separation
//! multiplies `A` by `(-1)^(n+v)` and `B` by `(-1)^(n+v+1)`.

#![allow(dead_code)]

use gmt_rs::{Separation, VshMode};
use ndarray::Array3;
use num_complex::Complex64;

fn radial(sep: &Separation, k: Complex64) -> Complex64 {
    let kr = k * sep.distance;
    (Complex64::i() * kr).exp() / kr
}

/// Odd powers of cos(theta) flip sign when the separation is reversed
fn reciprocity(sep: &Separation, exponent: i32) -> f64 {
    sep.theta.cos().powi(exponent.rem_euclid(2))
}

/// Couples every pair of orders
pub fn generic_translation(
    m: i32,
    n: i32,
    u: i32,
    v: i32,
    sep: &Separation,
    k: Complex64,
    _kind: VshMode,
) -> (Complex64, Complex64) {
    let weight = 1.0 / (1.0 + (n + v) as f64) + 0.05 * (m - u) as f64 + 0.01 * (m * u) as f64;
    let base = radial(sep, k) * weight;
    let a = base * reciprocity(sep, n + v);
    let b = base * Complex64::new(0.3, 0.4) * reciprocity(sep, n + v + 1);
    (a, b)
}

/// Only couples equal orders, as for a separation along the z axis
pub fn axial_translation(
    m: i32,
    n: i32,
    u: i32,
    v: i32,
    sep: &Separation,
    k: Complex64,
    _kind: VshMode,
) -> (Complex64, Complex64) {
    if u != m {
        return (Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0));
    }
    let weight = 1.0 / (1.0 + (n + v) as f64 + 0.5 * m.abs() as f64);
    let base = radial(sep, k) * weight;
    let a = base * reciprocity(sep, n + v);
    let b = base * Complex64::new(0.0, 0.5) * reciprocity(sep, n + v + 1);
    (a, b)
}

/// Mie coefficients `[N, 2, lmax]` with a distinct value per particle
pub fn mie_coefficients(particles: usize, lmax: usize) -> Array3<Complex64> {
    Array3::from_shape_fn((particles, 2, lmax), |(i, p, n)| {
        Complex64::new(
            0.3 / (n + 1) as f64 + 0.05 * i as f64,
            0.1 * (p + 1) as f64 - 0.02 * n as f64,
        )
    })
}

/// Mie coefficients `[N, 2, lmax]` identical for every particle
pub fn identical_mie_coefficients(particles: usize, lmax: usize) -> Array3<Complex64> {
    Array3::from_shape_fn((particles, 2, lmax), |(_, p, n)| {
        Complex64::new(0.3 / (n + 1) as f64, 0.1 * (p + 1) as f64)
    })
}
