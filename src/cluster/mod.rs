/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Multi-particle interaction solver
//!
//! Couples the single-particle responses of a cluster through VSH translation
//! and solves for the coefficients each particle sees under mutual
//! illumination.

pub mod assembler;
pub mod coefficients;
pub mod config;
pub mod errors;
pub mod layout;
pub mod operator;
pub mod solver;

pub use assembler::ClusterAssembler;
pub use coefficients::{scattering_coefficients_spheres, scattering_coefficients_tmatrix, tmatrix_from_mie};
pub use config::{ClusterConfig, SolverMethod};
pub use errors::{ClusterError, Result};
pub use layout::{OperatorLayout, ELECTRIC, MAGNETIC, POLARIZATIONS};
pub use operator::InteractionOperator;
pub use solver::ClusterSolver;
