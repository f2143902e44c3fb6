/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Self-consistent cluster solver
//!
//! Solves `T x = source` where `T` is the flattened interaction operator and
//! `x`, `source` have shape `[2, N, rmax]`. Mutual illumination is entirely
//! encoded in `T`, so a single dense LU solve gives the self-consistent
//! incident coefficients of every particle.

use super::assembler::{check_positions, ClusterAssembler};
use super::config::{ClusterConfig, SolverMethod};
use super::errors::{ClusterError, Result};
use super::layout::{OperatorLayout, POLARIZATIONS};
use super::operator::InteractionOperator;
use crate::utils::linear_algebra::{faer_to_ndarray, ndarray_to_faer, relative_residual};
use crate::vsh::{lmax_to_rmax, rmax_to_lmax, VshTranslation};
use faer::linalg::solvers::Solve;
use faer::Mat;
use log::{debug, info, warn};
use ndarray::{Array2, Array3, Array5};
use num_complex::Complex64;

/// Dense solver for the cluster interaction equations
#[derive(Debug, Clone, Default)]
pub struct ClusterSolver {
    config: ClusterConfig,
}

impl ClusterSolver {
    /// Create a solver with the given configuration
    pub fn new(config: ClusterConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Solve `operator * x = source` for `x`
    ///
    /// # Arguments
    ///
    /// * `operator` - Interaction operator `[2, N, rmax, 2, N, rmax]`
    /// * `source` - Source coefficients `[2, N, rmax]`
    ///
    /// # Returns
    ///
    /// Self-consistent coefficients with the shape of `source`
    pub fn solve(
        &self,
        operator: &InteractionOperator,
        source: &Array3<Complex64>,
    ) -> Result<Array3<Complex64>> {
        self.config.validate()?;
        let layout = operator.layout();
        check_source(layout, source)?;

        let matrix = ndarray_to_faer(&operator.to_matrix());
        let rhs = Mat::<Complex64>::from_fn(layout.dim(), 1, |row, _| {
            let (p, i, r) = layout.unflatten(row);
            source[(p, i, r)]
        });

        let finite = operator.is_finite();
        if !finite {
            warn!("Interaction operator contains non-finite entries; they will propagate into the solution");
        }

        debug!(
            "Solving {}x{} cluster system with {:?}",
            layout.dim(),
            layout.dim(),
            self.config.method
        );

        let solution = match self.config.method {
            SolverMethod::PartialPivLu => {
                let lu = matrix.partial_piv_lu();
                if finite {
                    self.check_pivots(&lu.U().to_owned())?;
                }
                lu.solve(&rhs)
            }
            SolverMethod::FullPivLu => {
                let lu = matrix.full_piv_lu();
                if finite {
                    self.check_pivots(&lu.U().to_owned())?;
                }
                lu.solve(&rhs)
            }
        };

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Relative residual {:e}",
                relative_residual(&matrix, &solution, &rhs)
            );
        }

        let flat = faer_to_ndarray(&solution);
        Ok(Array3::from_shape_fn(layout.coefficient_shape(), |(p, i, r)| {
            flat[(layout.flat_index(p, i, r), 0)]
        }))
    }

    /// Assemble and solve the interaction equations for a cluster of spheres
    ///
    /// # Arguments
    ///
    /// * `translation` - VSH translation coefficients
    /// * `positions` - Particle positions `[N, 3]`
    /// * `mie` - Mie coefficients `[N, 2, lmax]`
    /// * `source` - Source coefficients `[2, N, rmax]`
    /// * `k` - Medium wavenumber
    pub fn solve_spheres<T: VshTranslation>(
        &self,
        translation: &T,
        positions: &Array2<f64>,
        mie: &Array3<Complex64>,
        source: &Array3<Complex64>,
        k: Complex64,
    ) -> Result<Array3<Complex64>> {
        let particles = check_positions(positions)?;
        let layout = OperatorLayout::new(particles, lmax_to_rmax(mie.dim().2)?);
        check_source(layout, source)?;

        let assembler = ClusterAssembler::new(translation, self.config.clone());
        let operator = assembler.sphere_cluster_operator(positions, mie, k)?;
        self.solve(&operator, source)
    }

    /// Assemble and solve the interaction equations for general particles
    ///
    /// # Arguments
    ///
    /// * `translation` - VSH translation coefficients
    /// * `positions` - Particle positions `[N, 3]`
    /// * `tmatrix` - Per-particle T-matrices `[N, 2, rmax, 2, rmax]`
    /// * `source` - Source coefficients `[2, N, rmax]`
    /// * `k` - Medium wavenumber
    pub fn solve_particles<T: VshTranslation>(
        &self,
        translation: &T,
        positions: &Array2<f64>,
        tmatrix: &Array5<Complex64>,
        source: &Array3<Complex64>,
        k: Complex64,
    ) -> Result<Array3<Complex64>> {
        let particles = check_positions(positions)?;
        let layout = OperatorLayout::new(particles, tmatrix.shape()[2]);
        check_source(layout, source)?;

        let assembler = ClusterAssembler::new(translation, self.config.clone());
        let operator = assembler.particle_cluster_operator(positions, tmatrix, k)?;
        self.solve(&operator, source)
    }

    /// Reject factorizations whose pivots vanish relative to the largest one
    fn check_pivots(&self, u: &Mat<Complex64>) -> Result<()> {
        let n = u.nrows().min(u.ncols());
        let mut smallest = f64::INFINITY;
        let mut largest = 0.0_f64;

        for i in 0..n {
            let pivot = u[(i, i)].norm();
            smallest = smallest.min(pivot);
            largest = largest.max(pivot);
        }

        let ratio = if largest > 0.0 { smallest / largest } else { 0.0 };
        debug!("LU pivot ratio {:e}", ratio);

        if !(ratio > self.config.singular_threshold) {
            return Err(ClusterError::SingularSystem(format!(
                "pivot ratio {:e} is below threshold {:e}",
                ratio, self.config.singular_threshold
            )));
        }

        info!("Cluster system factorized, pivot ratio {:e}", ratio);
        Ok(())
    }
}

/// Source coefficients must match the operator's `[2, N, rmax]`
fn check_source(layout: OperatorLayout, source: &Array3<Complex64>) -> Result<()> {
    if source.dim() != layout.coefficient_shape() {
        return Err(ClusterError::Shape(format!(
            "source coefficients must be [{}, {}, {}], got {:?}",
            POLARIZATIONS,
            layout.particles(),
            layout.rmax(),
            source.dim()
        )));
    }

    if layout.rmax() > 0 {
        rmax_to_lmax(layout.rmax())?;
    }

    Ok(())
}
