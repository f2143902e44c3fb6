/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the cluster module

use thiserror::Error;

/// Result type for cluster operations
pub type Result<T> = std::result::Result<T, ClusterError>;

/// Cluster assembly and solve errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Invalid truncation, wavenumber or geometry
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inconsistent array shapes among the inputs
    #[error("Shape error: {0}")]
    Shape(String),

    /// The interaction operator cannot be inverted
    #[error("Singular system: {0}")]
    SingularSystem(String),
}

impl From<crate::vsh::VshError> for ClusterError {
    fn from(err: crate::vsh::VshError) -> Self {
        match err {
            crate::vsh::VshError::Configuration(msg) => ClusterError::Configuration(msg),
        }
    }
}

impl From<serde_json::Error> for ClusterError {
    fn from(err: serde_json::Error) -> Self {
        ClusterError::Configuration(format!("invalid configuration document: {}", err))
    }
}

impl From<std::io::Error> for ClusterError {
    fn from(err: std::io::Error) -> Self {
        ClusterError::Configuration(format!("cannot access configuration file: {}", err))
    }
}
