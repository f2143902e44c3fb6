/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Mechanical and energy observables
//!
//! Torque from the expansion coefficients of a particle, and pointwise
//! Poynting/stress-tensor expressions for sampled fields.

pub mod flux;
pub mod torque;

pub use flux::{flux_from_poynting, maxwell_stress_tensor, poynting_vector};
pub use torque::torque;
