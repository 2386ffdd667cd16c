//! Dielectric model trait.
//!
//! All material models implement [`DielectricModel`], which returns the
//! frequency-dependent complex permittivity. Implementations include
//! tabulated experimental data resampled onto a uniform grid
//! ([`crate::tabulated`]) and analytic fits ([`crate::drude_lorentz`]).

use std::path::PathBuf;

use num_complex::Complex64;
use thiserror::Error;

/// Errors from dielectric models.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Frequency {frequency} is outside the sampled range [{min}, {max}]")]
    OutOfRange {
        frequency: f64,
        min: f64,
        max: f64,
    },

    #[error("No dataset for material '{name}' at {}", .path.display())]
    DatasetNotFound { name: String, path: PathBuf },

    #[error("Unsupported interpolation kind: {0}")]
    UnsupportedInterpolation(String),

    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Provides a frequency-dependent complex permittivity.
///
/// Models are immutable once constructed, so queries are safe to issue from
/// any number of threads concurrently (hence the `Send + Sync` bound).
pub trait DielectricModel: Send + Sync {
    /// Human-readable name of this material.
    fn name(&self) -> &str;

    /// Angular-frequency range over which the model is defined, in the
    /// reduced units the model was constructed with.
    fn frequency_range(&self) -> (f64, f64);

    /// Complex permittivity $\epsilon(\omega)$ at a given angular frequency.
    fn permittivity(&self, frequency: f64) -> Result<Complex64, MaterialError>;

    /// Complex refractive index $\tilde{n} = n + ik$ at a given frequency.
    ///
    /// Default implementation derives from $\epsilon = \tilde{n}^2$.
    fn refractive_index(&self, frequency: f64) -> Result<Complex64, MaterialError> {
        let eps = self.permittivity(frequency)?;
        Ok(eps.sqrt())
    }
}
