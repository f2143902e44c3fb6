/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! The cluster interaction operator
//!
//! A rank-6 complex tensor `T[p, i, r, q, j, s]` coupling mode `s` of
//! polarization `q` on particle `j` into mode `r` of polarization `p` on
//! particle `i`. The assembler produces `Identity + Coupling`; the solver
//! consumes its flattening as a dense square matrix.

use super::errors::{ClusterError, Result};
use super::layout::{OperatorLayout, POLARIZATIONS};
use ndarray::{Array2, Array3, Array6};
use num_complex::Complex64;

/// Dense interaction operator of shape `[2, N, rmax, 2, N, rmax]`
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOperator {
    layout: OperatorLayout,
    tensor: Array6<Complex64>,
}

impl InteractionOperator {
    /// The identity operator: a Kronecker delta over (polarization, particle, mode)
    pub fn identity(layout: OperatorLayout) -> Self {
        let mut tensor = Array6::<Complex64>::zeros(layout.operator_shape());

        for p in 0..POLARIZATIONS {
            for i in 0..layout.particles() {
                for r in 0..layout.rmax() {
                    tensor[[p, i, r, p, i, r]] = Complex64::new(1.0, 0.0);
                }
            }
        }

        Self { layout, tensor }
    }

    /// Wrap an existing tensor, checking that it is a valid operator shape
    pub fn from_tensor(tensor: Array6<Complex64>) -> Result<Self> {
        let shape = tensor.shape();
        let layout = OperatorLayout::new(shape[1], shape[2]);

        if shape != layout.operator_shape() {
            return Err(ClusterError::Shape(format!(
                "operator must be [2, N, rmax, 2, N, rmax], got {:?}",
                shape
            )));
        }

        Ok(Self { layout, tensor })
    }

    /// Shape bookkeeping of this operator
    pub fn layout(&self) -> OperatorLayout {
        self.layout
    }

    /// Borrow the rank-6 tensor
    pub fn tensor(&self) -> &Array6<Complex64> {
        &self.tensor
    }

    /// Mutable access to the rank-6 tensor
    pub fn tensor_mut(&mut self) -> &mut Array6<Complex64> {
        &mut self.tensor
    }

    /// Consume the operator, returning the rank-6 tensor
    pub fn into_tensor(self) -> Array6<Complex64> {
        self.tensor
    }

    /// Whether every entry is finite
    pub fn is_finite(&self) -> bool {
        self.tensor.iter().all(|z| z.re.is_finite() && z.im.is_finite())
    }

    /// The `(2 rmax) x (2 rmax)` block coupling particle `j` into particle `i`
    ///
    /// Rows and columns use [`OperatorLayout::block_index`].
    pub fn block(&self, i: usize, j: usize) -> Array2<Complex64> {
        let rmax = self.layout.rmax();
        Array2::from_shape_fn((POLARIZATIONS * rmax, POLARIZATIONS * rmax), |(row, col)| {
            self.tensor[[row / rmax, i, row % rmax, col / rmax, j, col % rmax]]
        })
    }

    /// Flatten into the square matrix of the linear system
    pub fn to_matrix(&self) -> Array2<Complex64> {
        let layout = self.layout;
        let dim = layout.dim();
        Array2::from_shape_fn((dim, dim), |(row, col)| {
            let (p, i, r) = layout.unflatten(row);
            let (q, j, s) = layout.unflatten(col);
            self.tensor[[p, i, r, q, j, s]]
        })
    }

    /// Contract the operator with a coefficient tensor of shape `[2, N, rmax]`
    pub fn apply(&self, x: &Array3<Complex64>) -> Result<Array3<Complex64>> {
        let layout = self.layout;
        if x.dim() != layout.coefficient_shape() {
            return Err(ClusterError::Shape(format!(
                "coefficients must be {:?}, got {:?}",
                layout.coefficient_shape(),
                x.dim()
            )));
        }

        let mut result = Array3::<Complex64>::zeros(layout.coefficient_shape());
        for ((p, i, r), out) in result.indexed_iter_mut() {
            let mut sum = Complex64::new(0.0, 0.0);
            for ((q, j, s), value) in x.indexed_iter() {
                sum += self.tensor[[p, i, r, q, j, s]] * value;
            }
            *out = sum;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Ix6;

    #[test]
    fn test_identity_matrix() {
        let op = InteractionOperator::identity(OperatorLayout::new(2, 3));
        let matrix = op.to_matrix();
        assert_eq!(matrix.dim(), (12, 12));
        for ((row, col), value) in matrix.indexed_iter() {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_eq!(*value, Complex64::new(expected, 0.0));
        }
    }

    #[test]
    fn test_from_tensor_rejects_bad_shape() {
        for shape in [Ix6(2, 2, 3, 2, 1, 3), Ix6(3, 2, 3, 3, 2, 3), Ix6(2, 2, 3, 2, 2, 8)] {
            let tensor = Array6::<Complex64>::zeros(shape);
            assert!(matches!(
                InteractionOperator::from_tensor(tensor),
                Err(ClusterError::Shape(_))
            ));
        }
    }

    #[test]
    fn test_identity_has_operator_shape() {
        let layout = OperatorLayout::new(3, 8);
        let op = InteractionOperator::identity(layout);
        assert_eq!(op.tensor().shape(), layout.operator_shape());
        assert_eq!(InteractionOperator::from_tensor(op.clone().into_tensor()).unwrap(), op);
    }

    #[test]
    fn test_flattening_matches_reshape() {
        let layout = OperatorLayout::new(2, 3);
        let tensor = Array6::from_shape_fn(Ix6(2, 2, 3, 2, 2, 3), |(p, i, r, q, j, s)| {
            Complex64::new((p * 1000 + i * 100 + r * 10) as f64, (q * 100 + j * 10 + s) as f64)
        });
        let op = InteractionOperator::from_tensor(tensor.clone()).unwrap();
        let reshaped = tensor
            .into_shape_with_order((layout.dim(), layout.dim()))
            .unwrap();
        assert_eq!(op.to_matrix(), reshaped);
    }
}
