/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Two identical spheres illuminated along their common axis
//!
//! Uses a toy translation that only couples equal orders, which is what real
//! VSH translation coefficients do for a separation along z.
//!
//! Run with `RUST_LOG=debug cargo run --example dimer` to see the solver log.

use anyhow::Result;
use gmt_rs::cluster::{scattering_coefficients_spheres, ClusterConfig, ClusterSolver};
use gmt_rs::utils::medium_wavenumber;
use gmt_rs::vsh::{lmax_to_rmax, mode_indices};
use gmt_rs::{Separation, VshMode};
use log::info;
use ndarray::{array, Array3};
use num_complex::Complex64;

fn axial_translation(
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
    let kr = k * sep.distance;
    let radial = (Complex64::i() * kr).exp() / kr;
    let sign = sep.theta.cos().powi((n + v).rem_euclid(2));
    let a = radial * sign / (1.0 + (n + v) as f64);
    let b = radial * Complex64::new(0.0, 0.2) * sep.theta.cos().powi((n + v + 1).rem_euclid(2));
    (a, b)
}

fn main() -> Result<()> {
    env_logger::init();

    let lmax = 2;
    let rmax = lmax_to_rmax(lmax)?;
    let wavelength = 600e-9;
    let k = Complex64::new(medium_wavenumber(wavelength, 1.77, 1.0), 0.0);

    let gap = 150e-9;
    let positions = array![[0.0, 0.0, -gap / 2.0], [0.0, 0.0, gap / 2.0]];
    let mie = Array3::from_shape_fn((2, 2, lmax), |(_, p, n)| {
        Complex64::new(0.4 / (n + 1) as f64, 0.2 - 0.1 * p as f64)
    });

    // plane wave along z: only m = +-1 dipole-like modes are excited
    let mut source = Array3::<Complex64>::zeros((2, 2, rmax));
    for mode in mode_indices(lmax) {
        if mode.m.abs() == 1 {
            for i in 0..2 {
                let phase = (Complex64::i() * k * positions[(i, 2)]).exp();
                source[(0, i, mode.offset())] = phase;
                source[(1, i, mode.offset())] = phase * mode.m as f64;
            }
        }
    }

    let solver = ClusterSolver::new(ClusterConfig::default());
    let incident = solver.solve_spheres(&axial_translation, &positions, &mie, &source, k)?;
    let scattered = scattering_coefficients_spheres(&mie, &incident)?;

    info!("Solved dimer with {} modes per particle", rmax);
    for mode in mode_indices(lmax) {
        let r = mode.offset();
        println!(
            "{}  electric {:>10.4}  magnetic {:>10.4}",
            mode,
            scattered[(0, 0, r)].norm(),
            scattered[(1, 0, r)].norm()
        );
    }

    Ok(())
}
