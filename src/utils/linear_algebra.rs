/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Linear algebra glue between ndarray and faer
//!
//! Coefficient tensors live in ndarray; the dense factorization runs on faer
//! matrices.

use faer::Mat;
use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;

/// Convert from ndarray::Array2<Complex64> to faer::Mat<Complex64>
pub fn ndarray_to_faer(array: &Array2<Complex64>) -> Mat<Complex64> {
    let (rows, cols) = array.dim();
    Mat::<Complex64>::from_fn(rows, cols, |i, j| array[(i, j)])
}

/// Convert from faer::Mat<Complex64> to ndarray::Array2<Complex64>
pub fn faer_to_ndarray(matrix: &Mat<Complex64>) -> Array2<Complex64> {
    Array2::from_shape_fn((matrix.nrows(), matrix.ncols()), |(i, j)| matrix[(i, j)])
}

/// Frobenius norm of a complex matrix
pub fn frobenius_norm(matrix: &Mat<Complex64>) -> f64 {
    let mut sum = 0.0;
    for j in 0..matrix.ncols() {
        for i in 0..matrix.nrows() {
            sum += matrix[(i, j)].norm_sqr();
        }
    }
    sum.sqrt()
}

/// `||A x - b|| / (||A|| ||x|| + ||b||)`
///
/// Rows of the product are computed in parallel for large systems.
pub fn relative_residual(a: &Mat<Complex64>, x: &Mat<Complex64>, b: &Mat<Complex64>) -> f64 {
    let rows = a.nrows();
    let inner = a.ncols();
    let rhs = x.ncols();

    let row_residual = |i: usize| -> f64 {
        let mut sum = 0.0;
        for c in 0..rhs {
            let mut ax = Complex64::new(0.0, 0.0);
            for k in 0..inner {
                ax += a[(i, k)] * x[(k, c)];
            }
            sum += (ax - b[(i, c)]).norm_sqr();
        }
        sum
    };

    let squared: f64 = if rows > 512 {
        (0..rows).into_par_iter().map(row_residual).sum()
    } else {
        (0..rows).map(row_residual).sum()
    };

    let scale = frobenius_norm(a) * frobenius_norm(x) + frobenius_norm(b);
    if scale > 0.0 {
        squared.sqrt() / scale
    } else {
        squared.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_conversion() {
        let array = Array2::from_shape_fn((3, 4), |(i, j)| Complex64::new(i as f64, j as f64));
        let matrix = ndarray_to_faer(&array);
        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 4);
        assert_eq!(matrix[(2, 1)], Complex64::new(2.0, 1.0));
        assert_eq!(faer_to_ndarray(&matrix), array);
    }

    #[test]
    fn test_exact_solution_has_zero_residual() {
        let a = Mat::<Complex64>::from_fn(3, 3, |i, j| {
            if i == j {
                Complex64::new(2.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            }
        });
        let x = Mat::<Complex64>::from_fn(3, 1, |i, _| Complex64::new(i as f64, 1.0));
        let b = Mat::<Complex64>::from_fn(3, 1, |i, _| Complex64::new(2.0 * i as f64, 2.0));
        assert!(relative_residual(&a, &x, &b) < 1e-15);
        assert!(frobenius_norm(&b) > 0.0);
    }
}
