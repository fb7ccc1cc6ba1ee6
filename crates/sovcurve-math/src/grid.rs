//! Sampling grids.

use crate::error::{MathError, MathResult};

/// Returns `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// The first value is exactly `start` and the last is exactly `end`; interior
/// values are `start + i * (end - start) / (n - 1)`. A degenerate range
/// (`start == end`) yields `n` copies of `start`.
///
/// # Errors
///
/// Returns an error if `n < 2` or either bound is not finite.
///
/// # Example
///
/// ```rust
/// use sovcurve_math::grid::linspace;
///
/// let xs = linspace(1.0, 2.0, 5).unwrap();
/// assert_eq!(xs, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> MathResult<Vec<f64>> {
    if n < 2 {
        return Err(MathError::insufficient_data(2, n));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(MathError::invalid_input(format!(
            "grid bounds must be finite, got [{start}, {end}]"
        )));
    }

    let step = (end - start) / (n - 1) as f64;
    let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    out[n - 1] = end;
    Ok(out)
}
