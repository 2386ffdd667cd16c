//! Johnson & Christy gold optical constants, embedded.
//!
//! $(E, n, k)$ values for evaporated gold films from:
//! P. B. Johnson and R. W. Christy, *Phys. Rev. B* **6**, 4370 (1972).
//!
//! The table is embedded at compile time so the crate is exercisable
//! without external dataset files; a mode solver deployment would normally
//! read its materials through a [`Catalog`](crate::catalog::Catalog)
//! instead.

use crate::provider::MaterialError;
use crate::table::RawSample;
use crate::tabulated::{ResampleOptions, TabulatedDielectric};

/// Gold $(E/\mathrm{eV}, n, k)$, sorted ascending by photon energy.
const GOLD: &[(f64, f64, f64)] = &[
    (0.64, 0.92, 13.78),
    (0.77, 0.56, 11.21),
    (0.89, 0.43, 9.519),
    (1.02, 0.35, 8.145),
    (1.14, 0.27, 7.150),
    (1.26, 0.22, 6.350),
    (1.39, 0.17, 5.663),
    (1.51, 0.16, 5.083),
    (1.64, 0.14, 4.542),
    (1.76, 0.13, 4.103),
    (1.88, 0.14, 3.697),
    (2.01, 0.21, 3.272),
    (2.13, 0.29, 2.863),
    (2.26, 0.43, 2.455),
    (2.38, 0.62, 2.081),
    (2.50, 1.04, 1.833),
    (2.63, 1.31, 1.849),
    (2.75, 1.38, 1.914),
    (2.88, 1.45, 1.948),
    (3.00, 1.46, 1.958),
    (3.12, 1.47, 1.952),
    (3.25, 1.46, 1.933),
    (3.37, 1.48, 1.895),
    (3.50, 1.50, 1.866),
    (3.62, 1.48, 1.871),
    (3.74, 1.48, 1.883),
    (3.87, 1.54, 1.898),
    (3.99, 1.53, 1.893),
    (4.12, 1.53, 1.889),
    (4.24, 1.49, 1.878),
    (4.36, 1.47, 1.869),
    (4.49, 1.43, 1.847),
    (4.61, 1.38, 1.803),
    (4.74, 1.35, 1.749),
    (4.86, 1.33, 1.688),
    (4.98, 1.33, 1.631),
    (5.11, 1.32, 1.577),
    (5.23, 1.32, 1.536),
    (5.36, 1.30, 1.497),
    (5.48, 1.31, 1.460),
    (5.60, 1.30, 1.427),
    (5.73, 1.30, 1.387),
    (5.85, 1.30, 1.350),
    (5.98, 1.30, 1.304),
    (6.10, 1.33, 1.277),
    (6.22, 1.33, 1.251),
    (6.35, 1.34, 1.226),
    (6.47, 1.34, 1.204),
    (6.60, 1.35, 1.188),
];

/// The measured gold samples.
#[must_use]
pub fn gold_samples() -> Vec<RawSample> {
    GOLD.iter()
        .map(|&(energy_ev, n, k)| RawSample { energy_ev, n, k })
        .collect()
}

/// A resampled gold model for a caller whose unit length is `unit_scale`
/// micrometres.
pub fn gold(
    unit_scale: f64,
    options: &ResampleOptions,
) -> Result<TabulatedDielectric, MaterialError> {
    TabulatedDielectric::from_samples("gold", &gold_samples(), unit_scale, options)
}
