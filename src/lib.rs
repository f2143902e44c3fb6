/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # gmt-rs
//!
//! Generalized multiparticle Mie theory for clusters of particles.
//!
//! Each particle's response is expanded in vector spherical harmonics and the
//! particles are coupled through VSH translation coefficients. This crate
//! assembles the resulting block interaction operator and solves it for the
//! self-consistent coefficients of the whole cluster.
//!
//! The translation coefficients themselves are supplied by the caller through
//! [`vsh::VshTranslation`].

pub mod cli;
pub mod cluster;
pub mod observables;
pub mod utils;
pub mod vsh;

pub use cluster::{ClusterAssembler, ClusterConfig, ClusterError, ClusterSolver, InteractionOperator};
pub use vsh::{Mode, Separation, VshMode, VshTranslation};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
