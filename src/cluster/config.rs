/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for cluster assembly and solve

use super::errors::{ClusterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Factorization used by the self-consistent solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SolverMethod {
    /// LU decomposition with partial (row) pivoting
    #[default]
    PartialPivLu,
    /// LU decomposition with full pivoting; slower, more reliable pivot ratio
    FullPivLu,
}

/// Settings shared by the assembler and the solver
///
/// A configuration is handed to [`ClusterAssembler`](super::ClusterAssembler)
/// and [`ClusterSolver`](super::ClusterSolver) by value and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Distribute particle pairs over the rayon thread pool
    pub parallel: bool,
    /// Minimum number of unordered particle pairs before going parallel
    pub parallel_pair_threshold: usize,
    /// Separations at or below this distance are treated as coincident
    pub min_separation: f64,
    /// Smallest admissible ratio between the smallest and largest LU pivot
    pub singular_threshold: f64,
    /// Factorization used for the dense solve
    pub method: SolverMethod,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_pair_threshold: 8,
            min_separation: 1e-12,
            singular_threshold: 1e-13,
            method: SolverMethod::PartialPivLu,
        }
    }
}

impl ClusterConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the numeric thresholds are usable
    ///
    /// Both `min_separation` and `singular_threshold` must be finite and
    /// non-negative; otherwise the coincidence and singularity tests could
    /// never fire.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_separation", self.min_separation),
            ("singular_threshold", self.singular_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ClusterError::Configuration(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
