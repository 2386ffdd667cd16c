//! Interpolation strategies for resampling tabulated curves.
//!
//! The strategy set is a closed enumeration: each [`InterpolationKind`] fits
//! an [`Interpolant`] over the measured $(x, y)$ pairs, which is then
//! evaluated at every point of the uniform resampling grid. Configuration
//! surfaces select a kind by name via [`FromStr`]; unknown names fail with
//! [`MaterialError::UnsupportedInterpolation`].

use std::str::FromStr;

use crate::provider::MaterialError;
use crate::spline::CubicSpline;

/// Recognized interpolation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InterpolationKind {
    /// Straight-line interpolation between adjacent samples.
    Linear,
    /// Natural cubic spline through all samples.
    Cubic,
}

impl FromStr for InterpolationKind {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "cubic" => Ok(Self::Cubic),
            other => Err(MaterialError::UnsupportedInterpolation(other.to_string())),
        }
    }
}

/// A curve fitted over tabulated samples, ready for evaluation.
#[derive(Debug, Clone)]
pub enum Interpolant {
    /// Piecewise-linear fit; keeps the samples themselves.
    Linear { xs: Vec<f64>, ys: Vec<f64> },
    /// Cubic-spline fit.
    Cubic(CubicSpline),
}

impl Interpolant {
    /// Fit an interpolant of the given kind.
    ///
    /// `xs` is assumed strictly increasing with at least two entries
    /// (the dataset contract; validated by the model constructors).
    pub fn fit(kind: InterpolationKind, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        match kind {
            InterpolationKind::Linear => Self::Linear { xs, ys },
            InterpolationKind::Cubic => Self::Cubic(CubicSpline::fit(xs, ys)),
        }
    }

    /// Evaluate the fitted curve at `x`.
    ///
    /// Linear fits clamp to the boundary values outside the sample range;
    /// resampling only ever evaluates inside it.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Linear { xs, ys } => {
                let n = xs.len();
                if x <= xs[0] {
                    return ys[0];
                }
                if x >= xs[n - 1] {
                    return ys[n - 1];
                }
                let hi = xs.partition_point(|&t| t < x);
                let lo = hi - 1;
                let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
                ys[lo] + t * (ys[hi] - ys[lo])
            }
            Self::Cubic(spline) => spline.eval(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn kind_parses_recognized_names() {
        assert_eq!("linear".parse::<InterpolationKind>().unwrap(), InterpolationKind::Linear);
        assert_eq!("cubic".parse::<InterpolationKind>().unwrap(), InterpolationKind::Cubic);
    }

    #[test]
    fn kind_rejects_unknown_names() {
        let err = "quintic".parse::<InterpolationKind>().unwrap_err();
        assert!(matches!(
            err,
            MaterialError::UnsupportedInterpolation(ref name) if name == "quintic"
        ));
    }

    #[test]
    fn linear_fit_brackets_correctly() {
        let fit = Interpolant::fit(
            InterpolationKind::Linear,
            vec![0.0, 1.0, 3.0],
            vec![0.0, 10.0, 30.0],
        );
        assert_relative_eq!(fit.eval(0.5), 5.0, epsilon = 1e-12);
        assert_relative_eq!(fit.eval(2.0), 20.0, epsilon = 1e-12);
        // Exact hits on the samples.
        assert_relative_eq!(fit.eval(1.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(fit.eval(3.0), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn both_kinds_agree_on_samples() {
        let xs = vec![1.0, 2.0, 4.0, 7.0];
        let ys = vec![0.3, -1.2, 2.5, 0.9];
        let linear = Interpolant::fit(InterpolationKind::Linear, xs.clone(), ys.clone());
        let cubic = Interpolant::fit(InterpolationKind::Cubic, xs.clone(), ys.clone());

        for (x, y) in xs.iter().zip(&ys) {
            assert_relative_eq!(linear.eval(*x), *y, epsilon = 1e-12);
            assert_relative_eq!(cubic.eval(*x), *y, epsilon = 1e-12);
        }
    }
}
