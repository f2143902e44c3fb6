/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Poynting vector, Maxwell stress tensor and surface flux

use crate::cluster::errors::{ClusterError, Result};
use crate::utils::constants::EPSILON_0;
use ndarray::Array2;
use num_complex::Complex64;

fn cross(a: [Complex64; 3], b: [Complex64; 3]) -> [Complex64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Time-averaged Poynting vector `Re(E x conj(H)) / 2`
pub fn poynting_vector(e: [Complex64; 3], h: [Complex64; 3]) -> [f64; 3] {
    let s = cross(e, [h[0].conj(), h[1].conj(), h[2].conj()]);
    [0.5 * s[0].re, 0.5 * s[1].re, 0.5 * s[2].re]
}

/// Maxwell stress tensor at a point
///
/// `eps0/2 [eps E_i E_j* + mu H_i H_j* - 1/2 delta_ij (eps|E|^2 + mu|H|^2)]`
pub fn maxwell_stress_tensor(
    e: [Complex64; 3],
    h: [Complex64; 3],
    eps: f64,
    mu: f64,
) -> [[Complex64; 3]; 3] {
    let energy: f64 = e.iter().map(|x| eps * x.norm_sqr()).sum::<f64>()
        + h.iter().map(|x| mu * x.norm_sqr()).sum::<f64>();

    let mut sigma = [[Complex64::new(0.0, 0.0); 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            let mut value = e[i] * e[j].conj() * eps + h[i] * h[j].conj() * mu;
            if i == j {
                value -= 0.5 * energy;
            }
            sigma[i][j] = value * (EPSILON_0 / 2.0);
        }
    }

    sigma
}

/// Flux of the Poynting vector through a sampled surface
///
/// # Arguments
///
/// * `e`, `h` - Field samples, shape `[3, M]`
/// * `area_normals` - Area-weighted surface normals, shape `[3, M]`
pub fn flux_from_poynting(
    e: &Array2<Complex64>,
    h: &Array2<Complex64>,
    area_normals: &Array2<f64>,
) -> Result<f64> {
    if e.nrows() != 3 || e.dim() != h.dim() || e.dim() != area_normals.dim() {
        return Err(ClusterError::Shape(format!(
            "field samples and normals must share a [3, M] shape, got {:?}, {:?}, {:?}",
            e.dim(),
            h.dim(),
            area_normals.dim()
        )));
    }

    let mut flux = 0.0;
    for col in 0..e.ncols() {
        let s = poynting_vector(
            [e[(0, col)], e[(1, col)], e[(2, col)]],
            [h[(0, col)], h[(1, col)], h[(2, col)]],
        );
        flux += (0..3).map(|i| s[i] * area_normals[(i, col)]).sum::<f64>();
    }

    Ok(flux)
}
