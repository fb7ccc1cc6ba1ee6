//! Interpolation methods for yield curve construction.
//!
//! # Available Methods
//!
//! - [`CubicSpline`]: C2 piecewise cubic, with [`SplineBoundary::NotAKnot`] or
//!   [`SplineBoundary::Natural`] end conditions
//! - [`LinearInterpolator`]: C0 piecewise linear, used when there are too few
//!   knots for a meaningful cubic
//!
//! # Extrapolation
//!
//! Both interpolators refuse to evaluate outside their knot range unless an
//! [`Extrapolation`] rule is set. [`Extrapolation::Extend`] continues the
//! boundary segment's polynomial (cubic for splines, straight line for linear),
//! [`Extrapolation::Flat`] holds the boundary value.

mod cubic_spline;
mod linear;

pub use cubic_spline::{CubicSpline, SplineBoundary};
pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// What an interpolator does with a query outside `[min_x, max_x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extrapolation {
    /// Out-of-range queries are an error.
    #[default]
    Forbidden,
    /// Hold the value of the nearest boundary knot.
    Flat,
    /// Evaluate the polynomial of the nearest boundary segment.
    Extend,
}

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns the extrapolation rule in effect.
    fn extrapolation(&self) -> Extrapolation {
        Extrapolation::Forbidden
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the first and
/// last segment for queries outside the knot range.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    match xs.binary_search_by(|knot| knot.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(last),
        Err(i) => i.saturating_sub(1).min(last),
    }
}
