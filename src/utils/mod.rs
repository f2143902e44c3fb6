/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions shared across the crate

pub mod linear_algebra;

/// Physical constants in SI units
pub mod constants {
    /// Vacuum permittivity (F/m)
    pub const EPSILON_0: f64 = 8.8541878128e-12;

    /// Vacuum permeability (H/m)
    pub const MU_0: f64 = 1.25663706212e-6;

    /// Speed of light in vacuum (m/s)
    pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
}

/// Wavenumber in a medium of relative permittivity `eps_b` and permeability `mu_b`
pub fn medium_wavenumber(wavelength: f64, eps_b: f64, mu_b: f64) -> f64 {
    2.0 * std::f64::consts::PI * (eps_b * mu_b).sqrt() / wavelength
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants_consistent() {
        let c = 1.0 / (constants::EPSILON_0 * constants::MU_0).sqrt();
        assert_relative_eq!(c, constants::SPEED_OF_LIGHT, max_relative = 1e-9);
    }

    #[test]
    fn test_medium_wavenumber() {
        let vacuum = medium_wavenumber(600e-9, 1.0, 1.0);
        assert_relative_eq!(medium_wavenumber(600e-9, 2.25, 1.0), 1.5 * vacuum, max_relative = 1e-12);
    }
}
