//! Cubic spline interpolation.

use nalgebra::{DMatrix, DVector};

use crate::error::{validate_knots, MathError, MathResult};
use crate::interpolation::{find_segment, Extrapolation, Interpolator};

/// End conditions closing the spline's linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplineBoundary {
    /// Third derivative is continuous across the second and the
    /// second-to-last knots, so the first two and last two segments are each
    /// a single cubic. With exactly three knots the spline is the parabola
    /// through them.
    #[default]
    NotAKnot,
    /// Second derivative is zero at both end knots.
    Natural,
}

/// Cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives. The end
/// conditions are chosen with [`SplineBoundary`].
///
/// # Example
///
/// ```rust
/// use sovcurve_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![1.0, 2.0, 5.0];
/// let ys = vec![5.0, 4.8, 4.5];
///
/// let spline = CubicSpline::not_a_knot(xs, ys).unwrap();
/// let y = spline.interpolate(3.0).unwrap();
/// assert!(y < 4.8 && y > 4.5);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    boundary: SplineBoundary,
    extrapolation: Extrapolation,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, if lengths differ, or
    /// if any value is not finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::with_boundary(xs, ys, SplineBoundary::Natural)
    }

    /// Creates a not-a-knot cubic spline interpolator.
    pub fn not_a_knot(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::with_boundary(xs, ys, SplineBoundary::NotAKnot)
    }

    /// Creates a cubic spline with the given end conditions.
    pub fn with_boundary(xs: Vec<f64>, ys: Vec<f64>, boundary: SplineBoundary) -> MathResult<Self> {
        validate_knots(&xs, &ys, 3)?;
        let y2s = second_derivatives(&xs, &ys, boundary)?;

        Ok(Self {
            xs,
            ys,
            y2s,
            boundary,
            extrapolation: Extrapolation::Forbidden,
        })
    }

    /// Sets the rule for queries outside the knot range.
    #[must_use]
    pub fn with_extrapolation(mut self, rule: Extrapolation) -> Self {
        self.extrapolation = rule;
        self
    }

    /// Returns the end conditions the spline was fitted with.
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Returns the knot abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the knot ordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Evaluates the spline at `x` without any range check.
    ///
    /// Outside the knot range this continues the cubic of the first or last
    /// segment, regardless of the configured [`Extrapolation`].
    pub fn evaluate(&self, x: f64) -> f64 {
        let (i, a, b, h) = self.locate(x);
        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0
    }

    /// First derivative at `x` without any range check.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        let (i, a, b, h) = self.locate(x);
        (self.ys[i + 1] - self.ys[i]) / h - (3.0 * a * a - 1.0) / 6.0 * h * self.y2s[i]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.y2s[i + 1]
    }

    /// Segment index plus the Lagrange weights of its end knots at `x`.
    fn locate(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (i, a, b, h)
    }

    /// Maps `x` according to the extrapolation rule.
    fn resolve(&self, x: f64) -> MathResult<f64> {
        let (min, max) = (self.min_x(), self.max_x());
        if x >= min && x <= max {
            return Ok(x);
        }
        match self.extrapolation {
            Extrapolation::Forbidden => Err(MathError::ExtrapolationNotAllowed { x, min, max }),
            Extrapolation::Flat => Ok(x.clamp(min, max)),
            Extrapolation::Extend => Ok(x),
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let x = self.resolve(x)?;
        Ok(self.evaluate(x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if !self.in_range(x) && self.extrapolation == Extrapolation::Flat {
            return Ok(0.0);
        }
        let x = self.resolve(x)?;
        Ok(self.evaluate_derivative(x))
    }

    fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Solves for the second derivative at each knot.
///
/// Interior rows enforce C2 continuity:
/// `h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1] = 6 (s[i] - s[i-1])`
/// where `h` are knot spacings and `s` segment slopes. The first and last rows
/// carry the end conditions. The not-a-knot rows break the tridiagonal
/// structure, so the system is solved densely with partial pivoting; curves
/// carry tens of knots at most.
fn second_derivatives(xs: &[f64], ys: &[f64], boundary: SplineBoundary) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let s: Vec<f64> = ys.windows(2).zip(&h).map(|(w, hi)| (w[1] - w[0]) / hi).collect();

    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    for i in 1..n - 1 {
        a[(i, i - 1)] = h[i - 1];
        a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * (s[i] - s[i - 1]);
    }

    match boundary {
        SplineBoundary::Natural => {
            a[(0, 0)] = 1.0;
            a[(n - 1, n - 1)] = 1.0;
        }
        // Both not-a-knot conditions land on the single interior knot; the
        // spline collapses to one parabola, i.e. a constant second derivative.
        SplineBoundary::NotAKnot if n == 3 => {
            a[(0, 0)] = 1.0;
            a[(0, 1)] = -1.0;
            a[(2, 1)] = 1.0;
            a[(2, 2)] = -1.0;
        }
        SplineBoundary::NotAKnot => {
            a[(0, 0)] = h[1];
            a[(0, 1)] = -(h[0] + h[1]);
            a[(0, 2)] = h[0];
            a[(n - 1, n - 3)] = h[n - 2];
            a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
            a[(n - 1, n - 1)] = h[n - 3];
        }
    }

    let m = a.lu().solve(&rhs).ok_or(MathError::SingularMatrix)?;
    if m.iter().any(|v| !v.is_finite()) {
        return Err(MathError::SingularMatrix);
    }
    Ok(m.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_cubic_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        for boundary in [SplineBoundary::Natural, SplineBoundary::NotAKnot] {
            let spline = CubicSpline::with_boundary(xs.clone(), ys.clone(), boundary).unwrap();
            for (x, y) in xs.iter().zip(ys.iter()) {
                assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_natural_end_curvature_is_zero() {
        let spline = CubicSpline::new(vec![0.5, 1.0, 2.0, 5.0], vec![4.1, 4.0, 3.7, 3.9]).unwrap();
        assert_relative_eq!(spline.y2s[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(spline.y2s[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_not_a_knot_three_points_is_parabola() {
        // y = 2x^2 - 3x + 1
        let f = |x: f64| 2.0 * x * x - 3.0 * x + 1.0;
        let xs = vec![0.0, 1.5, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| f(*x)).collect();

        let spline = CubicSpline::not_a_knot(xs, ys).unwrap();
        for x in [0.3, 1.0, 2.2, 3.9] {
            assert_relative_eq!(spline.evaluate(x), f(x), epsilon = 1e-10);
        }
        for m in &spline.y2s {
            assert_relative_eq!(*m, 4.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_not_a_knot_reproduces_cubic() {
        // A single cubic satisfies every not-a-knot condition, so the spline
        // must reproduce it exactly, including outside the knots.
        let f = |x: f64| 0.5 * x * x * x - x * x + 2.0 * x - 1.0;
        let xs = vec![0.0, 0.7, 1.5, 3.0, 4.2, 6.0];
        let ys: Vec<f64> = xs.iter().map(|x| f(*x)).collect();

        let spline = CubicSpline::not_a_knot(xs, ys)
            .unwrap()
            .with_extrapolation(Extrapolation::Extend);
        for x in [-1.0, 0.35, 1.1, 2.0, 3.5, 5.9, 7.5] {
            assert_relative_eq!(spline.interpolate(x).unwrap(), f(x), epsilon = 1e-8);
        }
    }

    #[test]
    fn test_natural_differs_from_not_a_knot() {
        let xs = vec![1.0, 2.0, 3.0, 5.0, 10.0];
        let ys = vec![4.2, 4.0, 3.9, 3.95, 4.3];

        let natural = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        let nak = CubicSpline::not_a_knot(xs, ys).unwrap();
        assert!((natural.evaluate(7.0) - nak.evaluate(7.0)).abs() > 1e-6);
        assert_eq!(natural.boundary(), SplineBoundary::Natural);
        assert_eq!(nak.boundary(), SplineBoundary::NotAKnot);
    }

    #[test]
    fn test_cubic_spline_extrapolation_error() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();

        assert!(matches!(
            spline.interpolate(-0.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(spline.interpolate(3.5).is_err());
        assert!(spline.derivative(3.5).is_err());
    }

    #[test]
    fn test_cubic_spline_extend_uses_boundary_segment() {
        let xs = vec![1.0, 2.0, 5.0, 10.0];
        let ys = vec![5.0, 4.8, 4.5, 4.9];
        let spline = CubicSpline::not_a_knot(xs, ys)
            .unwrap()
            .with_extrapolation(Extrapolation::Extend);

        // Continuity of value and slope across the boundary knot.
        let eps = 1e-7;
        assert_relative_eq!(
            spline.interpolate(10.0 + eps).unwrap(),
            spline.interpolate(10.0 - eps).unwrap(),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            spline.derivative(1.0 - eps).unwrap(),
            spline.derivative(1.0 + eps).unwrap(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_cubic_spline_flat_extrapolation() {
        let spline = CubicSpline::new(vec![1.0, 2.0, 5.0], vec![5.0, 4.8, 4.5])
            .unwrap()
            .with_extrapolation(Extrapolation::Flat);

        assert_relative_eq!(spline.interpolate(0.0).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(30.0).unwrap(), 4.5, epsilon = 1e-12);
        assert_eq!(spline.derivative(30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_insufficient_points() {
        // Cubic spline needs at least 3 points
        assert_eq!(
            CubicSpline::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap_err(),
            MathError::insufficient_data(3, 2)
        );
    }

    #[test]
    fn test_duplicate_knots_rejected() {
        assert!(CubicSpline::not_a_knot(vec![1.0, 2.0, 2.0, 3.0], vec![1.0, 2.0, 2.5, 3.0]).is_err());
    }

    proptest! {
        #[test]
        fn prop_spline_passes_through_knots(
            gaps in proptest::collection::vec(0.05f64..5.0, 3..12),
            seed in proptest::collection::vec(-2.0f64..8.0, 12),
            natural in any::<bool>(),
        ) {
            let mut xs = Vec::with_capacity(gaps.len());
            let mut acc = 0.0;
            for g in &gaps {
                acc += g;
                xs.push(acc);
            }
            let ys: Vec<f64> = seed.into_iter().take(xs.len()).collect();
            let boundary = if natural { SplineBoundary::Natural } else { SplineBoundary::NotAKnot };

            let spline = CubicSpline::with_boundary(xs.clone(), ys.clone(), boundary).unwrap();
            for (x, y) in xs.iter().zip(ys.iter()) {
                prop_assert!((spline.evaluate(*x) - y).abs() < 1e-7);
            }
        }
    }
}
