//! Non-dispersive media.
//!
//! Waveguide cores are often filled with media whose dispersion is
//! negligible over the band of interest (air, vacuum, a nominal dielectric).
//! These evaluate to the same permittivity at every frequency.

use num_complex::Complex64;

use crate::provider::{DielectricModel, MaterialError};

/// A medium with a fixed complex permittivity.
#[derive(Debug, Clone)]
pub struct Constant {
    name: String,
    permittivity: Complex64,
}

impl Constant {
    /// A medium named `name` with permittivity `permittivity`.
    pub fn new(name: impl Into<String>, permittivity: Complex64) -> Self {
        Self {
            name: name.into(),
            permittivity,
        }
    }

    /// Air, ε = 1.
    #[must_use]
    pub fn air() -> Self {
        Self::new("air", Complex64::new(1.0, 0.0))
    }

    /// A lossless dielectric with refractive index `n`.
    #[must_use]
    pub fn dielectric(name: impl Into<String>, n: f64) -> Self {
        Self::new(name, Complex64::new(n * n, 0.0))
    }
}

impl DielectricModel for Constant {
    fn name(&self) -> &str {
        &self.name
    }

    fn frequency_range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn permittivity(&self, _frequency: f64) -> Result<Complex64, MaterialError> {
        Ok(self.permittivity)
    }
}
