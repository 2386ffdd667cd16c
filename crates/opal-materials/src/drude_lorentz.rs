//! Analytic Drude–Lorentz metal models.
//!
//! A free-electron (Drude) term plus one Lorentz oscillator:
//!
//! $$\epsilon(\omega) = \epsilon_\infty
//!   - \frac{\omega_D^2}{\omega^2 + i\gamma_D\omega}
//!   - \frac{\Delta\epsilon\,\Omega_L^2}{(\omega^2 - \Omega_L^2) + i\Gamma_L\omega}.$$
//!
//! Unlike the tabulated models this is defined at every positive frequency,
//! which makes it the usual choice for metal claddings in broadband mode
//! sweeps. All oscillator frequencies are stored in the same reduced
//! $\omega L / c$ units the tabulated models use.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::constants::SPEED_OF_LIGHT;
use crate::provider::{DielectricModel, MaterialError};

/// Drude–Lorentz dielectric function with a single Lorentz pole.
#[derive(Debug, Clone)]
pub struct DrudeLorentz {
    name: String,
    eps_inf: f64,
    /// Drude plasma frequency $\omega_D$ (reduced units).
    drude_plasma: f64,
    /// Drude damping $\gamma_D$ (reduced units).
    drude_damping: f64,
    /// Lorentz oscillator strength $\Delta\epsilon$.
    lorentz_strength: f64,
    /// Lorentz resonance $\Omega_L$ (reduced units).
    lorentz_frequency: f64,
    /// Lorentz damping $\Gamma_L$ (reduced units).
    lorentz_damping: f64,
}

impl DrudeLorentz {
    /// Construct from oscillator parameters already in reduced units.
    pub fn new(
        name: impl Into<String>,
        eps_inf: f64,
        drude_plasma: f64,
        drude_damping: f64,
        lorentz_strength: f64,
        lorentz_frequency: f64,
        lorentz_damping: f64,
    ) -> Self {
        Self {
            name: name.into(),
            eps_inf,
            drude_plasma,
            drude_damping,
            lorentz_strength,
            lorentz_frequency,
            lorentz_damping,
        }
    }

    /// Gold, using the fit of A. Vial et al., *Phys. Rev. B* **71**, 085416
    /// (2005), converted from SI angular frequencies to reduced units for a
    /// caller whose unit length is `unit_scale` micrometres.
    #[must_use]
    pub fn gold(unit_scale: f64) -> Self {
        let reduce = unit_scale * 1e-6 / SPEED_OF_LIGHT;
        Self::new(
            "gold_dl",
            5.9673,
            TAU * 2113.6e12 * reduce,
            TAU * 15.92e12 * reduce,
            1.09,
            TAU * 650.07e12 * reduce,
            TAU * 104.86e12 * reduce,
        )
    }
}

impl DielectricModel for DrudeLorentz {
    fn name(&self) -> &str {
        &self.name
    }

    fn frequency_range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn permittivity(&self, frequency: f64) -> Result<Complex64, MaterialError> {
        // The Drude pole sits at ω = 0; non-positive queries are out of the
        // model's domain rather than clamped to a static limit.
        if frequency <= 0.0 {
            let (min, max) = self.frequency_range();
            return Err(MaterialError::OutOfRange { frequency, min, max });
        }

        let w2 = frequency * frequency;
        let drude = Complex64::from(self.drude_plasma * self.drude_plasma)
            / Complex64::new(w2, self.drude_damping * frequency);
        let lorentz = Complex64::from(
            self.lorentz_strength * self.lorentz_frequency * self.lorentz_frequency,
        ) / Complex64::new(
            w2 - self.lorentz_frequency * self.lorentz_frequency,
            self.lorentz_damping * frequency,
        );

        Ok(Complex64::from(self.eps_inf) - drude - lorentz)
    }
}
