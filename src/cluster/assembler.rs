/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Cluster interaction operator assembly
//!
//! Builds `Identity + Coupling` for a cluster of particles, where the coupling
//! block between particles `i` and `j` translates the outgoing expansion of `j`
//! into the incident expansion at `i` and weights it by `j`'s scattering
//! response.
//!
//! Each unordered particle pair needs a single sweep over mode pairs. One
//! translation call for `(n, m) <- (v, u)` fills four placements:
//!
//! * `i <- j` at `(r, s)` with the raw `A`, `B`
//! * `j <- i` at `(r, s)` with `(-1)^(n+v)` on `A` and `(-1)^(n+v+1)` on `B`
//! * `i <- j` at the companion slots `(s - 2u, r - 2m)` with `(-1)^(m+u)` on `A`
//!   and `(-1)^(m+u+1)` on `B`
//! * `j <- i` at the companion slots with `(-1)^(m+u+n+v)` on both
//!
//! so a mode pair is skipped whenever its companion image `s - 2u` precedes `r`.

use super::config::ClusterConfig;
use super::errors::{ClusterError, Result};
use super::layout::{OperatorLayout, ELECTRIC, MAGNETIC, POLARIZATIONS};
use super::operator::InteractionOperator;
use crate::vsh::{lmax_to_rmax, mode_indices, rmax_to_lmax, Mode, Separation, VshMode, VshTranslation};
use log::{debug, info};
use ndarray::{Array2, Array3, Array5};
use num_complex::Complex64;
use rayon::prelude::*;

/// Coupling blocks produced by one unordered particle pair `(i, j)`, `i < j`
#[derive(Debug, Clone)]
struct PairBlocks {
    i: usize,
    j: usize,
    /// Block coupling `j` into `i`
    ij: Array2<Complex64>,
    /// Block coupling `i` into `j`
    ji: Array2<Complex64>,
}

/// How the raw translation blocks are weighted by the source particle
enum Response<'m> {
    /// Degree-indexed Mie coefficients `a[N, 2, lmax]`
    Mie(&'m Array3<Complex64>),
    /// Full per-particle T-matrices `t[N, 2, rmax, 2, rmax]`
    TMatrix(&'m Array5<Complex64>),
}

/// Interaction operator builder
///
/// Holds the translation capability and an immutable configuration; every
/// call to an assembly method is independent.
pub struct ClusterAssembler<'t, T: VshTranslation> {
    translation: &'t T,
    config: ClusterConfig,
}

impl<'t, T: VshTranslation> ClusterAssembler<'t, T> {
    /// Create an assembler using `translation` for the VSH coefficients
    pub fn new(translation: &'t T, config: ClusterConfig) -> Self {
        Self {
            translation,
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Interaction operator for a cluster of spheres
    ///
    /// # Arguments
    ///
    /// * `positions` - Particle positions, shape `[N, 3]`
    /// * `mie` - Mie coefficients, shape `[N, 2, lmax]`; index 0 of the second
    ///   axis is electric, 1 is magnetic. They are indexed by degree only, so
    ///   only spherically symmetric particles can be described this way; use
    ///   [`particle_cluster_operator`](Self::particle_cluster_operator) for
    ///   anything with order-dependent response.
    /// * `k` - Medium wavenumber
    ///
    /// # Returns
    ///
    /// The operator `T[2, N, rmax, 2, N, rmax]`
    pub fn sphere_cluster_operator(
        &self,
        positions: &Array2<f64>,
        mie: &Array3<Complex64>,
        k: Complex64,
    ) -> Result<InteractionOperator> {
        let particles = check_positions(positions)?;
        let (mie_particles, polarizations, lmax) = mie.dim();

        if mie_particles != particles || polarizations != POLARIZATIONS {
            return Err(ClusterError::Shape(format!(
                "Mie coefficients must be [{}, 2, lmax] for {} particles, got {:?}",
                particles,
                particles,
                mie.dim()
            )));
        }
        if lmax == 0 {
            return Err(ClusterError::Configuration(
                "Mie coefficients must cover at least one degree (lmax >= 1)".to_string(),
            ));
        }

        self.assemble(positions, lmax, k, Response::Mie(mie))
    }

    /// Interaction operator for a cluster of general particles
    ///
    /// # Arguments
    ///
    /// * `positions` - Particle positions, shape `[N, 3]`
    /// * `tmatrix` - Per-particle T-matrices, shape `[N, 2, rmax, 2, rmax]`
    /// * `k` - Medium wavenumber
    ///
    /// # Returns
    ///
    /// The operator `T[2, N, rmax, 2, N, rmax]` where each coupling block has
    /// been contracted with the source particle's T-matrix
    pub fn particle_cluster_operator(
        &self,
        positions: &Array2<f64>,
        tmatrix: &Array5<Complex64>,
        k: Complex64,
    ) -> Result<InteractionOperator> {
        let particles = check_positions(positions)?;
        let shape = tmatrix.shape();

        if shape[0] != particles
            || shape[1] != POLARIZATIONS
            || shape[3] != POLARIZATIONS
            || shape[2] != shape[4]
        {
            return Err(ClusterError::Shape(format!(
                "T-matrices must be [{}, 2, rmax, 2, rmax] for {} particles, got {:?}",
                particles, particles, shape
            )));
        }

        let lmax = rmax_to_lmax(shape[2])?;
        self.assemble(positions, lmax, k, Response::TMatrix(tmatrix))
    }

    fn assemble(
        &self,
        positions: &Array2<f64>,
        lmax: usize,
        k: Complex64,
        response: Response<'_>,
    ) -> Result<InteractionOperator> {
        self.config.validate()?;
        check_wavenumber(k)?;
        check_geometry(positions, self.config.min_separation)?;

        let particles = positions.nrows();
        let layout = OperatorLayout::new(particles, lmax_to_rmax(lmax)?);
        let modes: Vec<Mode> = mode_indices(lmax).collect();

        let pairs: Vec<(usize, usize)> = (0..particles)
            .flat_map(|i| ((i + 1)..particles).map(move |j| (i, j)))
            .collect();

        info!(
            "Assembling interaction operator: {} particles, lmax={}, rmax={}, {} pairs",
            particles,
            lmax,
            layout.rmax(),
            pairs.len()
        );

        let compute = |&(i, j): &(usize, usize)| -> PairBlocks {
            let mut blocks = self.pair_blocks(positions, &modes, layout, i, j, k);
            weight_blocks(&mut blocks, &modes, layout, &response);
            blocks
        };

        let blocks: Vec<PairBlocks> =
            if self.config.parallel && pairs.len() >= self.config.parallel_pair_threshold {
                debug!("Computing {} pair blocks in parallel", pairs.len());
                pairs.par_iter().map(compute).collect()
            } else {
                debug!("Computing {} pair blocks sequentially", pairs.len());
                pairs.iter().map(compute).collect()
            };

        let mut operator = InteractionOperator::identity(layout);
        for pair in &blocks {
            place_block(&mut operator, layout, pair.i, pair.j, &pair.ij);
            place_block(&mut operator, layout, pair.j, pair.i, &pair.ji);
        }

        Ok(operator)
    }

    /// Unweighted translation blocks for the pair `(i, j)`
    fn pair_blocks(
        &self,
        positions: &Array2<f64>,
        modes: &[Mode],
        layout: OperatorLayout,
        i: usize,
        j: usize,
        k: Complex64,
    ) -> PairBlocks {
        let side = POLARIZATIONS * layout.rmax();
        let mut ij = Array2::<Complex64>::zeros((side, side));
        let mut ji = Array2::<Complex64>::zeros((side, side));

        let separation = Separation::between(row3(positions, i), row3(positions, j));
        let e = |mode_offset: usize| layout.block_index(ELECTRIC, mode_offset);
        let h = |mode_offset: usize| layout.block_index(MAGNETIC, mode_offset);

        for rm in modes {
            let (n, m) = (rm.n, rm.m);
            for sm in modes {
                let (v, u) = (sm.n, sm.m);
                if (sm.r as i64 - 2 * u as i64) < rm.r as i64 {
                    continue;
                }

                let (a, b) = self
                    .translation
                    .translate(m, n, u, v, &separation, k, VshMode::Outgoing);

                let r = rm.offset();
                let s = sm.offset();
                let cr = rm.companion_offset();
                let cs = sm.companion_offset();

                ij[(e(r), e(s))] = a;
                ij[(e(r), h(s))] = b;
                ij[(h(r), e(s))] = b;
                ij[(h(r), h(s))] = a;

                let swap_a = parity(n + v);
                let swap_b = parity(n + v + 1);
                ji[(e(r), e(s))] = a * swap_a;
                ji[(e(r), h(s))] = b * swap_b;
                ji[(h(r), e(s))] = b * swap_b;
                ji[(h(r), h(s))] = a * swap_a;

                let flip_a = parity(m + u);
                let flip_b = parity(m + u + 1);
                ij[(e(cs), e(cr))] = a * flip_a;
                ij[(e(cs), h(cr))] = b * flip_b;
                ij[(h(cs), e(cr))] = b * flip_b;
                ij[(h(cs), h(cr))] = a * flip_a;

                let both = parity(m + u + n + v);
                ji[(e(cs), e(cr))] = a * both;
                ji[(e(cs), h(cr))] = b * both;
                ji[(h(cs), e(cr))] = b * both;
                ji[(h(cs), h(cr))] = a * both;
            }
        }

        PairBlocks { i, j, ij, ji }
    }
}

/// `(-1)^k`
#[inline]
fn parity(k: i32) -> f64 {
    if k.rem_euclid(2) == 0 {
        1.0
    } else {
        -1.0
    }
}

fn row3(positions: &Array2<f64>, i: usize) -> [f64; 3] {
    [positions[(i, 0)], positions[(i, 1)], positions[(i, 2)]]
}

/// Weight each coupling block by the response of its source (column) particle
fn weight_blocks(blocks: &mut PairBlocks, modes: &[Mode], layout: OperatorLayout, response: &Response<'_>) {
    match response {
        Response::Mie(mie) => {
            let rmax = layout.rmax();
            let (i, j) = (blocks.i, blocks.j);
            for ((_, col), value) in blocks.ij.indexed_iter_mut() {
                let degree = modes[col % rmax].n as usize;
                *value *= mie[(j, col / rmax, degree - 1)];
            }
            for ((_, col), value) in blocks.ji.indexed_iter_mut() {
                let degree = modes[col % rmax].n as usize;
                *value *= mie[(i, col / rmax, degree - 1)];
            }
        }
        Response::TMatrix(tmatrix) => {
            blocks.ij = contract(&blocks.ij, tmatrix, blocks.j, layout);
            blocks.ji = contract(&blocks.ji, tmatrix, blocks.i, layout);
        }
    }
}

/// `block[row, (c,d)] * tmatrix[particle, c, d, e, f]` summed over `(c, d)`
fn contract(
    block: &Array2<Complex64>,
    tmatrix: &Array5<Complex64>,
    particle: usize,
    layout: OperatorLayout,
) -> Array2<Complex64> {
    let rmax = layout.rmax();
    let side = POLARIZATIONS * rmax;
    let mut result = Array2::<Complex64>::zeros((side, side));

    for row in 0..side {
        for col in 0..side {
            let mut sum = Complex64::new(0.0, 0.0);
            for inner in 0..side {
                sum += block[(row, inner)]
                    * tmatrix[[particle, inner / rmax, inner % rmax, col / rmax, col % rmax]];
            }
            result[(row, col)] = sum;
        }
    }

    result
}

/// Copy a pair block into the operator at `(target, source)`
fn place_block(
    operator: &mut InteractionOperator,
    layout: OperatorLayout,
    target: usize,
    source: usize,
    block: &Array2<Complex64>,
) {
    let rmax = layout.rmax();
    let tensor = operator.tensor_mut();
    for ((row, col), value) in block.indexed_iter() {
        tensor[[row / rmax, target, row % rmax, col / rmax, source, col % rmax]] = *value;
    }
}

/// Validate the positions array and return the particle count
pub(crate) fn check_positions(positions: &Array2<f64>) -> Result<usize> {
    let (particles, dims) = positions.dim();
    if dims != 3 {
        return Err(ClusterError::Shape(format!(
            "positions must be [N, 3], got [{}, {}]",
            particles, dims
        )));
    }
    if particles == 0 {
        return Err(ClusterError::Shape(
            "a cluster needs at least one particle".to_string(),
        ));
    }
    Ok(particles)
}

pub(crate) fn check_wavenumber(k: Complex64) -> Result<()> {
    if !(k.re.is_finite() && k.im.is_finite()) || k.re <= 0.0 {
        return Err(ClusterError::Configuration(format!(
            "wavenumber must have a positive, finite real part, got {}",
            k
        )));
    }
    Ok(())
}

/// Reject non-finite coordinates and coincident particles
pub(crate) fn check_geometry(positions: &Array2<f64>, min_separation: f64) -> Result<()> {
    if positions.iter().any(|x| !x.is_finite()) {
        return Err(ClusterError::Configuration(
            "particle positions must be finite".to_string(),
        ));
    }

    let particles = positions.nrows();
    for i in 0..particles {
        for j in (i + 1)..particles {
            let separation = Separation::between(row3(positions, i), row3(positions, j));
            if !(separation.distance > min_separation.max(0.0)) {
                return Err(ClusterError::Configuration(format!(
                    "degenerate particle positions: particles {} and {} are {:e} apart",
                    i, j, separation.distance
                )));
            }
        }
    }

    Ok(())
}
