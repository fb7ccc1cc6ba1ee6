//! Error types for curve operations.
//!
//! Only curve-level failures live here. Row-level problems (an unparseable
//! yield, a tenor without digits) never abort a build; they are reported as
//! [`RowDiagnostic`](crate::builder::RowDiagnostic)s instead.

use sovcurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Not enough distinct maturities for the requested interpolation.
    #[error("Insufficient points: need at least {required} distinct maturities, got {got}")]
    InsufficientPoints {
        /// Minimum required distinct maturities.
        required: usize,
        /// Distinct maturities actually available.
        got: usize,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Fitting or evaluating the interpolant failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation_error(reason: impl Into<String>) -> Self {
        Self::InterpolationError {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_points(required, actual)
            }
            other => Self::interpolation_error(other.to_string()),
        }
    }
}
