//! Cubic spline interpolant over a built curve.
//!
//! The spline needs at least [`MIN_SPLINE_POINTS`] distinct maturities. Below
//! that, [`build_interpolant`] returns [`CurveError::InsufficientPoints`] and
//! callers are expected to use [`LinearFallback`](crate::fallback::LinearFallback)
//! (or [`CurveSampler`](crate::fallback::CurveSampler), which chooses for them).
//!
//! Points sharing a maturity are merged into one knot at their mean rate.
//!
//! Queries outside `[min_years, max_years]` evaluate the cubic of the first or
//! last segment, continued past the end knot.

use serde::{Deserialize, Serialize};
use sovcurve_math::grid::linspace;
use sovcurve_math::interpolation::{CubicSpline, Extrapolation, Interpolator, SplineBoundary};
use tracing::debug;

use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;

/// Fewest distinct maturities a cubic spline is fitted through.
pub const MIN_SPLINE_POINTS: usize = 3;

/// One evaluated maturity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Maturity in years.
    pub years: f64,
    /// Interpolated yield in percent.
    pub rate_pct: f64,
}

/// Yields evaluated at caller-chosen maturities, in the order requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    /// Method that produced the values.
    pub method: InterpolationMethod,
    /// The evaluated points.
    pub points: Vec<SamplePoint>,
}

impl SampledCurve {
    /// Creates a sampled curve by evaluating `f` at each maturity.
    pub(crate) fn evaluate(
        method: InterpolationMethod,
        maturities: &[f64],
        f: impl Fn(f64) -> f64,
    ) -> Self {
        Self {
            method,
            points: maturities
                .iter()
                .map(|&years| SamplePoint {
                    years,
                    rate_pct: f(years),
                })
                .collect(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The maturities, in order.
    pub fn years(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.years).collect()
    }

    /// The interpolated yields, in order.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate_pct).collect()
    }

    /// `(years, rate_pct)` pairs.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.years, p.rate_pct)).collect()
    }
}

/// A cubic spline fitted through a curve's `(years, rate_pct)` points.
#[derive(Debug, Clone)]
pub struct Interpolant {
    spline: CubicSpline,
}

impl Interpolant {
    /// Fits a spline with the given end conditions.
    ///
    /// # Errors
    ///
    /// [`CurveError::InsufficientPoints`] with fewer than three distinct
    /// maturities; [`CurveError::InterpolationError`] if the fit itself fails.
    pub fn fit(curve: &Curve, boundary: SplineBoundary) -> CurveResult<Self> {
        let distinct = curve.distinct_years();
        if distinct < MIN_SPLINE_POINTS {
            return Err(CurveError::insufficient_points(MIN_SPLINE_POINTS, distinct));
        }

        let (xs, ys) = curve.unique_knots();
        let spline = CubicSpline::with_boundary(xs, ys, boundary)?
            .with_extrapolation(Extrapolation::Extend);
        debug!(knots = distinct, ?boundary, "fitted cubic spline");

        Ok(Self { spline })
    }

    /// Yield in percent at maturity `x` (years).
    ///
    /// Evaluation goes through the spline's extrapolation rule, which `fit`
    /// sets to [`Extrapolation::Extend`]; that rule never rejects a query.
    pub fn sample(&self, x: f64) -> f64 {
        self.spline.interpolate(x).unwrap_or(f64::NAN)
    }

    /// Slope of the curve at `x`, in percent per year.
    pub fn derivative(&self, x: f64) -> f64 {
        self.spline.derivative(x).unwrap_or(f64::NAN)
    }

    /// Extrapolation rule applied outside the knot range.
    pub fn extrapolation(&self) -> Extrapolation {
        self.spline.extrapolation()
    }

    /// Evaluates the spline at each maturity in `maturities`.
    pub fn sample_at(&self, maturities: &[f64]) -> SampledCurve {
        SampledCurve::evaluate(self.method(), maturities, |x| self.sample(x))
    }

    /// Evaluates the spline at `n` evenly spaced maturities from the shortest
    /// to the longest knot, both included.
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
        self.spline.xs()[0]
    }

    /// Longest knot maturity.
    pub fn max_years(&self) -> f64 {
        let xs = self.spline.xs();
        xs[xs.len() - 1]
    }

    /// True when `x` lies outside the knot range.
    pub fn is_extrapolating(&self, x: f64) -> bool {
        x < self.min_years() || x > self.max_years()
    }

    /// Number of knots after duplicate maturities were merged.
    pub fn knot_count(&self) -> usize {
        self.spline.xs().len()
    }

    /// End conditions used for the fit.
    pub fn boundary(&self) -> SplineBoundary {
        self.spline.boundary()
    }

    /// The interpolation method this spline implements.
    pub fn method(&self) -> InterpolationMethod {
        self.boundary().into()
    }
}

/// Fits a not-a-knot cubic spline through the curve.
///
/// # Example
///
/// ```rust
/// use sovcurve_curves::curve::{Curve, CurvePoint};
/// use sovcurve_curves::interpolant::build_interpolant;
///
/// let curve = Curve::from_points(vec![
///     CurvePoint::new("1Y", 1.0, 5.0),
///     CurvePoint::new("2Y", 2.0, 4.8),
///     CurvePoint::new("5Y", 5.0, 4.5),
/// ]);
/// let spline = build_interpolant(&curve).unwrap();
/// assert!((spline.sample(2.0) - 4.8).abs() < 1e-9);
/// ```
pub fn build_interpolant(curve: &Curve) -> CurveResult<Interpolant> {
    Interpolant::fit(curve, SplineBoundary::NotAKnot)
}

/// Evenly spaced grid with the `n >= 2` precondition reported as a curve error.
pub(crate) fn checked_grid(min: f64, max: f64, n: usize) -> CurveResult<Vec<f64>> {
    if n < 2 {
        return Err(CurveError::invalid_value(format!(
            "sample grid needs at least 2 points, got {n}"
        )));
    }
    Ok(linspace(min, max, n)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurvePoint;
    use approx::assert_relative_eq;

    fn curve(points: &[(f64, f64)]) -> Curve {
        Curve::from_points(
            points
                .iter()
                .map(|(y, r)| CurvePoint::new(format!("{y}Y"), *y, *r))
                .collect(),
        )
    }

    #[test]
    fn test_passes_through_knots() {
        let spline = build_interpolant(&curve(&[(1.0, 5.0), (2.0, 4.8), (5.0, 4.5)])).unwrap();
        assert_relative_eq!(spline.sample(1.0), 5.0, epsilon = 1e-9);
        assert_relative_eq!(spline.sample(2.0), 4.8, epsilon = 1e-9);
        assert_relative_eq!(spline.sample(5.0), 4.5, epsilon = 1e-9);
        assert_eq!(spline.method(), InterpolationMethod::CubicSpline);
    }

    #[test]
    fn test_three_knots_not_a_knot_is_parabola() {
        // Quadratic through (1, 5.0), (2, 4.8), (5, 4.5): 0.025 x^2 - 0.275 x + 5.25
        let spline = build_interpolant(&curve(&[(1.0, 5.0), (2.0, 4.8), (5.0, 4.5)])).unwrap();
        let q = |x: f64| 0.025 * x * x - 0.275 * x + 5.25;
        for x in [1.5, 3.0, 4.0, 7.0, 0.25] {
            assert_relative_eq!(spline.sample(x), q(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_insufficient_points() {
        assert_eq!(
            build_interpolant(&curve(&[(1.0, 5.0), (2.0, 4.8)])).unwrap_err(),
            CurveError::insufficient_points(3, 2)
        );
        assert_eq!(
            build_interpolant(&Curve::default()).unwrap_err(),
            CurveError::insufficient_points(3, 0)
        );
    }

    #[test]
    fn test_duplicates_do_not_count_as_distinct() {
        let c = curve(&[(1.0, 5.0), (1.0, 5.2), (2.0, 4.8), (2.0, 4.7)]);
        assert_eq!(c.len(), 4);
        assert_eq!(
            build_interpolant(&c).unwrap_err(),
            CurveError::insufficient_points(3, 2)
        );
    }

    #[test]
    fn test_duplicates_merged_to_mean() {
        let c = curve(&[(1.0, 5.0), (2.0, 4.7), (2.0, 4.9), (5.0, 4.5)]);
        let spline = build_interpolant(&c).unwrap();
        assert_eq!(spline.knot_count(), 3);
        assert_relative_eq!(spline.sample(2.0), 4.8, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_grid() {
        let spline = build_interpolant(&curve(&[
            (0.25, 3.9),
            (1.0, 3.7),
            (2.0, 3.6),
            (5.0, 3.8),
            (10.0, 4.1),
        ]))
        .unwrap();
        let grid = spline.sample_grid(100).unwrap();

        assert_eq!(grid.len(), 100);
        assert_eq!(grid.points[0].years, 0.25);
        assert_eq!(grid.points[99].years, 10.0);
        let step = (10.0 - 0.25) / 99.0;
        for pair in grid.points.windows(2) {
            assert_relative_eq!(pair[1].years - pair[0].years, step, epsilon = 1e-9);
        }
        assert_relative_eq!(grid.points[0].rate_pct, 3.9, epsilon = 1e-9);
        assert_relative_eq!(grid.points[99].rate_pct, 4.1, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_grid_rejects_small_n() {
        let spline = build_interpolant(&curve(&[(1.0, 5.0), (2.0, 4.8), (5.0, 4.5)])).unwrap();
        assert!(matches!(spline.sample_grid(1), Err(CurveError::InvalidValue { .. })));
        assert!(spline.sample_grid(0).is_err());
        assert_eq!(spline.sample_grid(2).unwrap().years(), vec![1.0, 5.0]);
    }

    #[test]
    fn test_extrapolation_follows_boundary_cubic() {
        let c = curve(&[(1.0, 5.0), (2.0, 4.8), (3.0, 4.7), (5.0, 4.5), (10.0, 4.4)]);
        let spline = build_interpolant(&c).unwrap();
        assert!(spline.is_extrapolating(12.0));
        assert!(!spline.is_extrapolating(10.0));

        // Value and slope are continuous through the last knot.
        let eps = 1e-6;
        assert_relative_eq!(spline.sample(10.0 + eps), spline.sample(10.0 - eps), epsilon = 1e-5);
        assert_relative_eq!(
            spline.derivative(10.0 + eps),
            spline.derivative(10.0 - eps),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_sample_uses_extend_rule() {
        let c = curve(&[(1.0, 5.0), (2.0, 4.8), (3.0, 4.7), (5.0, 4.5), (10.0, 4.4)]);
        let spline = build_interpolant(&c).unwrap();
        assert_eq!(spline.extrapolation(), Extrapolation::Extend);

        let (xs, ys) = c.unique_knots();
        let flat = CubicSpline::with_boundary(xs, ys, SplineBoundary::NotAKnot)
            .unwrap()
            .with_extrapolation(Extrapolation::Flat);

        // Past the last knot the boundary cubic keeps going rather than clamping.
        for x in [0.25, 12.0, 30.0] {
            let extended = spline.sample(x);
            assert!(extended.is_finite());
            assert_ne!(extended, flat.interpolate(x).unwrap());
        }
        assert_relative_eq!(spline.sample(7.0), flat.interpolate(7.0).unwrap(), epsilon = 1e-12);
        assert!(spline.derivative(30.0).abs() > 0.0);
        assert_eq!(flat.derivative(30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_natural_boundary() {
        let c = curve(&[(1.0, 5.0), (2.0, 4.8), (3.0, 4.7), (5.0, 4.5)]);
        let spline = Interpolant::fit(&c, SplineBoundary::Natural).unwrap();
        assert_eq!(spline.method(), InterpolationMethod::NaturalCubicSpline);
        for (x, y) in c.knots() {
            assert_relative_eq!(spline.sample(x), y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_referential_transparency() {
        let c = curve(&[(0.5, 4.0), (1.0, 4.2), (3.0, 4.1), (7.0, 4.6)]);
        let a = build_interpolant(&c).unwrap().sample_grid(25).unwrap();
        let b = build_interpolant(&c).unwrap().sample_grid(25).unwrap();
        assert_eq!(a, b);
    }
}
