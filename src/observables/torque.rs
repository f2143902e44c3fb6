/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Optical torque from expansion coefficients

use crate::cluster::errors::{ClusterError, Result};
use crate::utils::constants::EPSILON_0;
use crate::vsh::{mode_indices, rmax_to_lmax};
use ndarray::ArrayView2;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Torque `[Tx, Ty, Tz]` on a particle
///
/// # Arguments
///
/// * `p_scat` - Scattered coefficients `[2, rmax]` (electric, magnetic)
/// * `p_inc` - Incident coefficients `[2, rmax]`
/// * `k` - Medium wavenumber
/// * `eps_b` - Relative permittivity of the background
///
/// The transverse components couple `(n, m)` with `(n, m+1)`; the axial
/// component is weighted by `m`.
pub fn torque(
    p_scat: ArrayView2<'_, Complex64>,
    p_inc: ArrayView2<'_, Complex64>,
    k: f64,
    eps_b: f64,
) -> Result<[f64; 3]> {
    if p_scat.dim() != p_inc.dim() || p_scat.nrows() != 2 {
        return Err(ClusterError::Shape(format!(
            "torque needs matching [2, rmax] coefficients, got {:?} and {:?}",
            p_scat.dim(),
            p_inc.dim()
        )));
    }
    let lmax = rmax_to_lmax(p_scat.ncols())?;

    let prefactor = -2.0 * PI / k.powi(3) * EPSILON_0 * eps_b.sqrt();
    let (p, q) = (p_scat.row(0), p_scat.row(1));
    let (p_inc, q_inc) = (p_inc.row(0), p_inc.row(1));
    let mut torque = [0.0; 3];

    for mode in mode_indices(lmax) {
        let (n, m) = (mode.n as f64, mode.m as f64);
        let r = mode.offset();

        if mode.m != mode.n {
            let r1 = r + 1;
            let factor = -prefactor * ((n - m) * (n + m + 1.0)).sqrt();
            let scat = p[r] * p[r1].conj() + q[r] * q[r1].conj();

            let tx = scat
                - 0.5
                    * (p[r1] * p_inc[r].conj()
                        + p[r] * p_inc[r1].conj()
                        + q[r1] * q_inc[r].conj()
                        + q[r] * q_inc[r1].conj());
            let ty = scat
                + 0.5
                    * (p[r1] * p_inc[r].conj() - p[r] * p_inc[r1].conj() + q[r1] * q_inc[r].conj()
                        - q[r] * q_inc[r1].conj());

            torque[0] += factor * tx.re;
            torque[1] += factor * ty.im;
        }

        let extinction = (p[r] * p_inc[r].conj() + q[r] * q_inc[r].conj()).re;
        torque[2] += prefactor * m * (p[r].norm_sqr() + q[r].norm_sqr() - extinction);
    }

    Ok(torque)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_no_scattering_no_torque() {
        let zeros = Array2::<Complex64>::zeros((2, 8));
        let incident = Array2::from_elem((2, 8), Complex64::new(1.0, 0.5));
        let t = torque(zeros.view(), incident.view(), 1.0, 1.0).unwrap();
        assert_eq!(t, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_axial_torque_from_single_mode() {
        // only (n=1, m=1) scatters, no incident field
        let mut p_scat = Array2::<Complex64>::zeros((2, 3));
        p_scat[(0, 2)] = Complex64::new(1.0, 0.0);
        let p_inc = Array2::<Complex64>::zeros((2, 3));

        let t = torque(p_scat.view(), p_inc.view(), 1.0, 1.0).unwrap();
        let expected = -2.0 * PI * EPSILON_0;
        assert!((t[2] - expected).abs() < 1e-24);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[1], 0.0);
    }

    #[test]
    fn test_rejects_bad_rmax() {
        let a = Array2::<Complex64>::zeros((2, 5));
        assert!(torque(a.view(), a.view(), 1.0, 1.0).is_err());
    }
}
