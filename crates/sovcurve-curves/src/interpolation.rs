//! Interpolation methods for yield curves.

use serde::{Deserialize, Serialize};
use sovcurve_math::interpolation::SplineBoundary;

/// Interpolation methods for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Cubic spline on yields with not-a-knot end conditions.
    #[default]
    #[serde(alias = "Cubic Spline")]
    CubicSpline,

    /// Cubic spline on yields with zero curvature at both ends.
    #[serde(alias = "Natural Cubic Spline")]
    NaturalCubicSpline,

    /// Straight lines between quoted points.
    Linear,
}

impl InterpolationMethod {
    /// Returns true if this method fits a cubic spline.
    #[must_use]
    pub fn is_spline(&self) -> bool {
        self.boundary().is_some()
    }

    /// Spline end conditions for spline methods, `None` for linear.
    #[must_use]
    pub fn boundary(&self) -> Option<SplineBoundary> {
        match self {
            Self::CubicSpline => Some(SplineBoundary::NotAKnot),
            Self::NaturalCubicSpline => Some(SplineBoundary::Natural),
            Self::Linear => None,
        }
    }
}

impl From<SplineBoundary> for InterpolationMethod {
    fn from(boundary: SplineBoundary) -> Self {
        match boundary {
            SplineBoundary::NotAKnot => Self::CubicSpline,
            SplineBoundary::Natural => Self::NaturalCubicSpline,
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CubicSpline => "Cubic Spline",
            Self::NaturalCubicSpline => "Natural Cubic Spline",
            Self::Linear => "Linear",
        };
        write!(f, "{name}")
    }
}
