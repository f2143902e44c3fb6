/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Per-particle response helpers
//!
//! Conversions between incident and scattered coefficients once the cluster
//! system has been solved, and the diagonal T-matrix equivalent of a set of
//! Mie coefficients.

use super::errors::{ClusterError, Result};
use super::layout::POLARIZATIONS;
use crate::vsh::{lmax_to_rmax, mode_indices};
use ndarray::{Array3, Array5, Ix5};
use num_complex::Complex64;

/// Diagonal T-matrices `[N, 2, rmax, 2, rmax]` from Mie coefficients `[N, 2, lmax]`
///
/// Every mode `(n, m)` of polarization `p` scatters into itself with
/// coefficient `mie[i, p, n-1]`.
pub fn tmatrix_from_mie(mie: &Array3<Complex64>) -> Array5<Complex64> {
    let (particles, polarizations, lmax) = mie.dim();
    let rmax = mode_indices(lmax).len();
    let mut tmatrix = Array5::<Complex64>::zeros(Ix5(particles, POLARIZATIONS, rmax, POLARIZATIONS, rmax));

    for i in 0..particles {
        for p in 0..polarizations.min(POLARIZATIONS) {
            for mode in mode_indices(lmax) {
                let r = mode.offset();
                tmatrix[[i, p, r, p, r]] = mie[(i, p, mode.n as usize - 1)];
            }
        }
    }

    tmatrix
}

/// Scattered coefficients of spheres from their incident coefficients
///
/// # Arguments
///
/// * `mie` - Mie coefficients `[N, 2, lmax]`
/// * `incident` - Incident coefficients `[2, N, rmax]`
///
/// # Returns
///
/// `scattered[p, i, r] = mie[i, p, n(r) - 1] * incident[p, i, r]`
pub fn scattering_coefficients_spheres(
    mie: &Array3<Complex64>,
    incident: &Array3<Complex64>,
) -> Result<Array3<Complex64>> {
    let (particles, polarizations, lmax) = mie.dim();
    let expected = (POLARIZATIONS, particles, lmax_to_rmax(lmax)?);

    if polarizations != POLARIZATIONS || incident.dim() != expected {
        return Err(ClusterError::Shape(format!(
            "incident coefficients {:?} do not match Mie coefficients {:?}",
            incident.dim(),
            mie.dim()
        )));
    }

    let mut scattered = incident.clone();
    for mode in mode_indices(lmax) {
        let r = mode.offset();
        let degree = mode.n as usize - 1;
        for p in 0..POLARIZATIONS {
            for i in 0..particles {
                scattered[(p, i, r)] *= mie[(i, p, degree)];
            }
        }
    }

    Ok(scattered)
}

/// Scattered coefficients of general particles from their incident coefficients
///
/// # Arguments
///
/// * `tmatrix` - T-matrices `[N, 2, rmax, 2, rmax]`
/// * `incident` - Incident coefficients `[2, N, rmax]`
///
/// # Returns
///
/// `scattered[p, i, r] = sum over (q, s) of tmatrix[i, p, r, q, s] * incident[q, i, s]`
pub fn scattering_coefficients_tmatrix(
    tmatrix: &Array5<Complex64>,
    incident: &Array3<Complex64>,
) -> Result<Array3<Complex64>> {
    let shape = tmatrix.shape();
    let (particles, rmax) = (shape[0], shape[2]);

    if shape[1] != POLARIZATIONS
        || shape[3] != POLARIZATIONS
        || shape[4] != rmax
        || incident.dim() != (POLARIZATIONS, particles, rmax)
    {
        return Err(ClusterError::Shape(format!(
            "incident coefficients {:?} do not match T-matrices {:?}",
            incident.dim(),
            shape
        )));
    }

    Ok(Array3::from_shape_fn(incident.dim(), |(p, i, r)| {
        let mut sum = Complex64::new(0.0, 0.0);
        for q in 0..POLARIZATIONS {
            for s in 0..rmax {
                sum += tmatrix[[i, p, r, q, s]] * incident[(q, i, s)];
            }
        }
        sum
    }))
}
