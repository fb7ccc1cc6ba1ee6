//! Linear fallback and method selection.
//!
//! A cubic spline needs three distinct maturities. Sparse snapshots (a feed
//! that returned one or two usable rows) still deserve a curve, so
//! [`CurveSampler`] drops down to straight lines between the quotes when the
//! spline cannot be fitted.

use sovcurve_math::interpolation::{Extrapolation, Interpolator, LinearInterpolator};
use tracing::debug;

use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};
use crate::interpolant::{checked_grid, Interpolant, SampledCurve, MIN_SPLINE_POINTS};
use crate::interpolation::InterpolationMethod;

#[derive(Debug, Clone)]
enum Shape {
    Constant { years: f64, rate_pct: f64 },
    Line(LinearInterpolator),
}

/// Piecewise linear curve through the quoted points.
///
/// Beyond the shortest and longest maturity the end rates are held flat. A
/// curve with a single maturity is a constant.
#[derive(Debug, Clone)]
pub struct LinearFallback {
    shape: Shape,
}

impl LinearFallback {
    /// Builds the fallback from any non-empty curve.
    ///
    /// Points sharing a maturity are merged at their mean rate, as for the
    /// spline.
    ///
    /// # Errors
    ///
    /// [`CurveError::InsufficientPoints`] if the curve is empty.
    pub fn new(curve: &Curve) -> CurveResult<Self> {
        let (xs, ys) = curve.unique_knots();
        let shape = match xs.len() {
            0 => return Err(CurveError::insufficient_points(1, 0)),
            1 => Shape::Constant {
                years: xs[0],
                rate_pct: ys[0],
            },
            _ => Shape::Line(LinearInterpolator::new(xs, ys)?.with_extrapolation(Extrapolation::Flat)),
        };
        Ok(Self { shape })
    }

    /// Yield in percent at maturity `x` (years).
    pub fn sample(&self, x: f64) -> f64 {
        match &self.shape {
            Shape::Constant { rate_pct, .. } => *rate_pct,
            // Flat extrapolation never rejects a query.
            Shape::Line(line) => line.interpolate(x).unwrap_or(f64::NAN),
        }
    }

    /// Slope in percent per year; zero on the flat extensions.
    pub fn derivative(&self, x: f64) -> f64 {
        match &self.shape {
            Shape::Constant { .. } => 0.0,
            Shape::Line(line) => line.derivative(x).unwrap_or(f64::NAN),
        }
    }

    /// Evaluates the fallback at each maturity in `maturities`.
    pub fn sample_at(&self, maturities: &[f64]) -> SampledCurve {
        SampledCurve::evaluate(InterpolationMethod::Linear, maturities, |x| self.sample(x))
    }

    /// Evaluates at `n` evenly spaced maturities over the knot range.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidValue`] if `n < 2`.
    pub fn sample_grid(&self, n: usize) -> CurveResult<SampledCurve> {
        let grid = checked_grid(self.min_years(), self.max_years(), n)?;
        Ok(self.sample_at(&grid))
    }

    /// Shortest knot maturity.
    pub fn min_years(&self) -> f64 {
        match &self.shape {
            Shape::Constant { years, .. } => *years,
            Shape::Line(line) => line.min_x(),
        }
    }

    /// Longest knot maturity.
    pub fn max_years(&self) -> f64 {
        match &self.shape {
            Shape::Constant { years, .. } => *years,
            Shape::Line(line) => line.max_x(),
        }
    }
}

/// The interpolant a curve actually supports.
#[derive(Debug, Clone)]
pub enum CurveSampler {
    /// Cubic spline, for three or more distinct maturities.
    Spline(Interpolant),
    /// Straight lines, for sparse curves or when linear was requested.
    Linear(LinearFallback),
}

impl CurveSampler {
    /// Picks the spline when `method` is a spline method and the curve has at
    /// least three distinct maturities, otherwise the linear fallback.
    ///
    /// # Errors
    ///
    /// [`CurveError::InsufficientPoints`] if the curve is empty, or any error
    /// from fitting the spline.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sovcurve_curves::prelude::*;
    ///
    /// let curve = Curve::from_points(vec![
    ///     CurvePoint::new("1Y", 1.0, 5.0),
    ///     CurvePoint::new("5Y", 5.0, 4.6),
    /// ]);
    /// let sampler = CurveSampler::for_curve(&curve, InterpolationMethod::CubicSpline).unwrap();
    /// assert_eq!(sampler.method(), InterpolationMethod::Linear);
    /// assert!((sampler.sample(3.0) - 4.8).abs() < 1e-12);
    /// ```
    pub fn for_curve(curve: &Curve, method: InterpolationMethod) -> CurveResult<Self> {
        let distinct = curve.distinct_years();
        match method.boundary() {
            Some(boundary) if distinct >= MIN_SPLINE_POINTS => {
                Ok(Self::Spline(Interpolant::fit(curve, boundary)?))
            }
            Some(_) => {
                debug!(
                    distinct,
                    requested = %method,
                    "too few maturities for a spline, using linear fallback"
                );
                Ok(Self::Linear(LinearFallback::new(curve)?))
            }
            None => Ok(Self::Linear(LinearFallback::new(curve)?)),
        }
    }

    /// The method actually used.
    pub fn method(&self) -> InterpolationMethod {
        match self {
            Self::Spline(spline) => spline.method(),
            Self::Linear(_) => InterpolationMethod::Linear,
        }
    }

    /// Yield in percent at maturity `x` (years).
    pub fn sample(&self, x: f64) -> f64 {
        match self {
            Self::Spline(spline) => spline.sample(x),
            Self::Linear(line) => line.sample(x),
        }
    }

    /// Slope of the curve at `x`, in percent per year.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Self::Spline(spline) => spline.derivative(x),
            Self::Linear(line) => line.derivative(x),
        }
    }

    /// Evaluates at each maturity in `maturities`.
    pub fn sample_at(&self, maturities: &[f64]) -> SampledCurve {
        match self {
            Self::Spline(spline) => spline.sample_at(maturities),
            Self::Linear(line) => line.sample_at(maturities),
        }
    }

    /// Evaluates at `n` evenly spaced maturities over the knot range.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidValue`] if `n < 2`.
    pub fn sample_grid(&self, n: usize) -> CurveResult<SampledCurve> {
        match self {
            Self::Spline(spline) => spline.sample_grid(n),
            Self::Linear(line) => line.sample_grid(n),
        }
    }

    /// Shortest knot maturity.
    pub fn min_years(&self) -> f64 {
        match self {
            Self::Spline(spline) => spline.min_years(),
            Self::Linear(line) => line.min_years(),
        }
    }

    /// Longest knot maturity.
    pub fn max_years(&self) -> f64 {
        match self {
            Self::Spline(spline) => spline.max_years(),
            Self::Linear(line) => line.max_years(),
        }
    }

    /// True when `x` lies outside the knot range.
    pub fn is_extrapolating(&self, x: f64) -> bool {
        x < self.min_years() || x > self.max_years()
    }
}
