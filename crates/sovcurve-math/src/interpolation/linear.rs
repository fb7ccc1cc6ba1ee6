//! Linear interpolation.

use crate::error::{validate_knots, MathError, MathResult};
use crate::interpolation::{find_segment, Extrapolation, Interpolator};

/// Linear interpolation between data points.
///
/// The simplest form of interpolation, connecting consecutive points
/// with straight lines.
///
/// # Example
///
/// ```rust
/// use sovcurve_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extrapolation: Extrapolation,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ, or
    /// if any value is not finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;
        Ok(Self {
            xs,
            ys,
            extrapolation: Extrapolation::Forbidden,
        })
    }

    /// Sets the rule for queries outside the knot range.
    #[must_use]
    pub fn with_extrapolation(mut self, rule: Extrapolation) -> Self {
        self.extrapolation = rule;
        self
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if self.extrapolation == Extrapolation::Forbidden && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if self.extrapolation == Extrapolation::Flat {
            if x < self.min_x() {
                return Ok(self.ys[0]);
            }
            if x > self.max_x() {
                return Ok(self.ys[self.ys.len() - 1]);
            }
        }

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if self.extrapolation == Extrapolation::Flat && !self.in_range(x) {
            return Ok(0.0);
        }

        let i = find_segment(&self.xs, x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 2.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_two_points_is_enough() {
        let interp = LinearInterpolator::new(vec![1.0, 10.0], vec![5.0, 4.1]).unwrap();
        assert_relative_eq!(interp.interpolate(5.5).unwrap(), 4.55, epsilon = 1e-12);
        assert_relative_eq!(interp.derivative(3.0).unwrap(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_forbidden() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();

        assert!(interp.interpolate(-0.5).is_err());
        assert!(interp.interpolate(2.5).is_err());
        assert!(interp.derivative(2.5).is_err());
    }

    #[test]
    fn test_extrapolation_extend() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0])
            .unwrap()
            .with_extrapolation(Extrapolation::Extend);

        assert_relative_eq!(interp.interpolate(-1.0).unwrap(), -1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_extrapolation_flat() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![5.0, 4.8])
            .unwrap()
            .with_extrapolation(Extrapolation::Flat);

        assert_eq!(interp.interpolate(0.25).unwrap(), 5.0);
        assert_eq!(interp.interpolate(30.0).unwrap(), 4.8);
        assert_eq!(interp.derivative(30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(LinearInterpolator::new(vec![0.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_unsorted_error() {
        assert!(LinearInterpolator::new(vec![1.0, 0.0, 2.0], vec![1.0, 0.0, 2.0]).is_err());
    }
}
