//! Tabulated dielectric models on a uniform frequency grid.
//!
//! Construction converts each measured photon energy to a reduced angular
//! frequency, fits one interpolant per curve ($n$ and $k$), and evaluates
//! both at every point of an evenly spaced grid spanning the converted
//! range. Queries then only need a binary search plus a linear
//! interpolation between the two bracketing grid samples, which keeps
//! evaluation cheap inside a mode solver's root-finding loops.

use num_complex::Complex64;

use crate::constants::photon_energy_to_reduced_frequency;
use crate::interpolate::{Interpolant, InterpolationKind};
use crate::provider::{DielectricModel, MaterialError};
use crate::table::RawSample;

/// Resampling configuration for [`TabulatedDielectric`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleOptions {
    /// Interpolation used to fit the measured curves.
    pub kind: InterpolationKind,
    /// Number of uniform grid points.
    pub grid_size: usize,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            kind: InterpolationKind::Cubic,
            grid_size: 2048,
        }
    }
}

/// A dielectric function resampled onto a uniform angular-frequency grid.
///
/// The grid arrays are written once at construction and only read
/// afterwards; the model holds no file handle and no interior mutability.
#[derive(Debug, Clone)]
pub struct TabulatedDielectric {
    name: String,
    /// Strictly increasing, evenly spaced reduced angular frequencies.
    frequencies: Vec<f64>,
    n_values: Vec<f64>,
    k_values: Vec<f64>,
}

impl TabulatedDielectric {
    /// Build a model from measured samples.
    ///
    /// `samples` must be sorted ascending by energy; this is the dataset
    /// contract and is not re-verified here. `unit_scale` is the caller's
    /// unit length in micrometres (see [`crate::constants`]).
    ///
    /// Fails with [`MaterialError::InvalidData`] on fewer than two samples,
    /// a grid size below two, or an empty frequency span.
    pub fn from_samples(
        name: impl Into<String>,
        samples: &[RawSample],
        unit_scale: f64,
        options: &ResampleOptions,
    ) -> Result<Self, MaterialError> {
        if samples.len() < 2 {
            return Err(MaterialError::InvalidData(format!(
                "need at least 2 samples to interpolate, got {}",
                samples.len()
            )));
        }
        if options.grid_size < 2 {
            return Err(MaterialError::InvalidData(format!(
                "grid size must be at least 2, got {}",
                options.grid_size
            )));
        }

        let raw_freqs: Vec<f64> = samples
            .iter()
            .map(|s| photon_energy_to_reduced_frequency(s.energy_ev, unit_scale))
            .collect();
        let lo = raw_freqs[0];
        let hi = raw_freqs[raw_freqs.len() - 1];
        if !(hi > lo) {
            return Err(MaterialError::InvalidData(format!(
                "frequency span [{lo}, {hi}] is empty"
            )));
        }

        let raw_n: Vec<f64> = samples.iter().map(|s| s.n).collect();
        let raw_k: Vec<f64> = samples.iter().map(|s| s.k).collect();
        let n_fit = Interpolant::fit(options.kind, raw_freqs.clone(), raw_n);
        let k_fit = Interpolant::fit(options.kind, raw_freqs, raw_k);

        let frequencies = linspace(lo, hi, options.grid_size);
        let n_values = frequencies.iter().map(|&w| n_fit.eval(w)).collect();
        let k_values = frequencies.iter().map(|&w| k_fit.eval(w)).collect();

        Ok(Self {
            name: name.into(),
            frequencies,
            n_values,
            k_values,
        })
    }

    /// The uniform frequency grid.
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Interpolated real refractive index at each grid frequency.
    #[must_use]
    pub fn n_values(&self) -> &[f64] {
        &self.n_values
    }

    /// Interpolated extinction coefficient at each grid frequency.
    #[must_use]
    pub fn k_values(&self) -> &[f64] {
        &self.k_values
    }
}

impl DielectricModel for TabulatedDielectric {
    fn name(&self) -> &str {
        &self.name
    }

    fn frequency_range(&self) -> (f64, f64) {
        (
            self.frequencies[0],
            self.frequencies[self.frequencies.len() - 1],
        )
    }

    fn permittivity(&self, frequency: f64) -> Result<Complex64, MaterialError> {
        let ws = &self.frequencies;
        let idx = ws.partition_point(|&w| w < frequency);

        let (n, k) = if idx == 0 || idx == ws.len() {
            // Only an exact hit on the first grid frequency is admitted
            // outside the open interior; the matching query at the upper
            // endpoint falls through the bracketing branch below.
            if frequency == ws[0] {
                (self.n_values[0], self.k_values[0])
            } else {
                let (min, max) = self.frequency_range();
                return Err(MaterialError::OutOfRange { frequency, min, max });
            }
        } else {
            let (w0, w1) = (ws[idx - 1], ws[idx]);
            let t = (frequency - w0) / (w1 - w0);
            (
                self.n_values[idx - 1] + t * (self.n_values[idx] - self.n_values[idx - 1]),
                self.k_values[idx - 1] + t * (self.k_values[idx] - self.k_values[idx - 1]),
            )
        };

        Ok(Complex64::new(n * n - k * k, 2.0 * n * k))
    }
}

/// `count` evenly spaced values from `start` to `stop`, both endpoints exact.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / last;
            (1.0 - t) * start + t * stop
        })
        .collect()
}
