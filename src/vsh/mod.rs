/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Vector spherical harmonic bookkeeping
//!
//! Mode enumeration shared by every multipole-indexed array, and the
//! translation-coefficient contract consumed by the cluster assembler.

pub mod errors;
pub mod mode_indices;
pub mod translation;

pub use errors::{Result, VshError};
pub use mode_indices::{linear_index, lmax_to_rmax, mode_indices, rmax_to_lmax, Mode, ModeIndices};
pub use translation::{Separation, VshMode, VshTranslation};
