/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the VSH module

use thiserror::Error;

/// Result type for VSH operations
pub type Result<T> = std::result::Result<T, VshError>;

/// VSH-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VshError {
    /// Truncation parameters that do not describe a valid multipole set
    #[error("Configuration error: {0}")]
    Configuration(String),
}
