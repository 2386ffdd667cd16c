//! Natural cubic spline interpolation.
//!
//! Measured optical constants are tabulated at irregular photon energies.
//! Fitting a cubic spline through the converted $(\omega, y)$ pairs gives a
//! smooth, twice-differentiable curve to resample onto a uniform grid.

/// A natural cubic spline through $(x_i, y_i)$ knots.
///
/// Construction solves the tridiagonal system for the second derivatives at
/// each knot with natural boundary conditions ($y'' = 0$ at both ends).
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    /// Second derivatives at each knot.
    curvature: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural cubic spline.
    ///
    /// `knots` is assumed strictly increasing; this is the dataset contract
    /// and is not re-verified here.
    ///
    /// # Panics
    /// Panics if `knots` and `values` differ in length or hold fewer than
    /// two points.
    pub fn fit(knots: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(knots.len(), values.len(), "knots and values must have equal length");
        assert!(knots.len() >= 2, "need at least 2 knots");

        let n = knots.len();
        let mut curvature = vec![0.0; n];
        let mut scratch = vec![0.0; n];

        // Forward elimination of the tridiagonal system.
        for i in 1..n - 1 {
            let h_lo = knots[i] - knots[i - 1];
            let h_hi = knots[i + 1] - knots[i];
            let sig = h_lo / (h_lo + h_hi);
            let p = sig * curvature[i - 1] + 2.0;
            curvature[i] = (sig - 1.0) / p;
            let slope_delta = (values[i + 1] - values[i]) / h_hi - (values[i] - values[i - 1]) / h_lo;
            scratch[i] = (6.0 * slope_delta / (h_lo + h_hi) - sig * scratch[i - 1]) / p;
        }

        // Back substitution.
        for i in (1..n - 1).rev() {
            curvature[i] = curvature[i] * curvature[i + 1] + scratch[i];
        }

        Self {
            knots,
            values,
            curvature,
        }
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the knot range the boundary segment's polynomial is used.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.knots.len();
        let hi = self.knots.partition_point(|&t| t < x).clamp(1, n - 1);
        let lo = hi - 1;

        let h = self.knots[hi] - self.knots[lo];
        let a = (self.knots[hi] - x) / h;
        let b = (x - self.knots[lo]) / h;

        a * self.values[lo]
            + b * self.values[hi]
            + ((a * a * a - a) * self.curvature[lo] + (b * b * b - b) * self.curvature[hi])
                * h
                * h
                / 6.0
    }
}
