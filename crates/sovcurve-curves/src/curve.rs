//! Curve points and the sorted curve built from them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conventions::DayCountConvention;

/// One quoted maturity on a built curve.
///
/// `days` and `discount_factor` are derived from `years` and `rate_pct` when
/// the point is created and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// The tenor label exactly as quoted.
    pub tenor: String,
    /// Time to maturity in years.
    pub years: f64,
    /// Yield in percent.
    pub rate_pct: f64,
    /// `floor(years * 360)`, an ACT/360-scaled year fraction.
    pub days: i64,
    /// `exp(-(rate_pct / 100) * years)`, continuously compounded.
    pub discount_factor: f64,
}

impl CurvePoint {
    /// Creates a point, deriving days (ACT/360) and the discount factor.
    pub fn new(tenor: impl Into<String>, years: f64, rate_pct: f64) -> Self {
        Self::with_convention(tenor, years, rate_pct, DayCountConvention::Act360)
    }

    /// Creates a point under an explicit day count convention.
    ///
    /// `days` saturates at the `i64` bounds for maturities too long to scale.
    /// Use [`CurvePoint::try_with_convention`] for untrusted input.
    pub fn with_convention(
        tenor: impl Into<String>,
        years: f64,
        rate_pct: f64,
        convention: DayCountConvention,
    ) -> Self {
        let days = convention.days(years).unwrap_or(if years.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        });
        Self {
            tenor: tenor.into(),
            years,
            rate_pct,
            days,
            discount_factor: discount_factor(rate_pct, years),
        }
    }

    /// Creates a point only if both derived fields are representable: `days`
    /// fits in an `i64` and the discount factor is finite.
    pub fn try_with_convention(
        tenor: impl Into<String>,
        years: f64,
        rate_pct: f64,
        convention: DayCountConvention,
    ) -> Option<Self> {
        let days = convention.days(years)?;
        let discount_factor = discount_factor(rate_pct, years);
        if !discount_factor.is_finite() {
            return None;
        }
        Some(Self {
            tenor: tenor.into(),
            years,
            rate_pct,
            days,
            discount_factor,
        })
    }

    /// True for points whose maturity parsed to zero years. These usually come
    /// from labels without digits and deserve a look before being trusted as
    /// overnight quotes.
    pub fn is_zero_tenor(&self) -> bool {
        self.years == 0.0
    }
}

/// Continuously compounded discount factor for a yield in percent.
///
/// Negative yields give factors above one; nothing is clamped.
#[must_use]
pub fn discount_factor(rate_pct: f64, years: f64) -> f64 {
    (-(rate_pct / 100.0) * years).exp()
}

/// A yield curve: points sorted ascending by maturity.
///
/// The sort is stable and keyed on `years` only, so points sharing a maturity
/// keep their input order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Creates a curve from points in any order.
    pub fn from_points(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| a.years.total_cmp(&b.years));
        Self { points }
    }

    /// Number of points, duplicates included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in maturity order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Iterates the points in maturity order.
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    /// Consumes the curve, returning its points.
    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }

    /// Shortest maturity on the curve.
    pub fn min_years(&self) -> Option<f64> {
        self.points.first().map(|p| p.years)
    }

    /// Longest maturity on the curve.
    pub fn max_years(&self) -> Option<f64> {
        self.points.last().map(|p| p.years)
    }

    /// Number of distinct maturities.
    pub fn distinct_years(&self) -> usize {
        self.points
            .windows(2)
            .filter(|w| w[0].years != w[1].years)
            .count()
            + usize::from(!self.points.is_empty())
    }

    /// `(years, rate_pct)` for every point, duplicates included.
    pub fn knots(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.years, p.rate_pct)).collect()
    }

    /// Strictly increasing maturities with one rate each: points sharing a
    /// maturity are merged into a single knot at their mean rate.
    pub fn unique_knots(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs: Vec<f64> = Vec::with_capacity(self.points.len());
        let mut ys: Vec<f64> = Vec::with_capacity(self.points.len());
        let mut i = 0;
        while i < self.points.len() {
            let years = self.points[i].years;
            let group: Vec<f64> = self.points[i..]
                .iter()
                .take_while(|p| p.years == years)
                .map(|p| p.rate_pct)
                .collect();
            if group.len() > 1 {
                debug!(years, count = group.len(), "merging duplicate maturity into one knot");
            }
            xs.push(years);
            ys.push(group.iter().sum::<f64>() / group.len() as f64);
            i += group.len();
        }
        (xs, ys)
    }

    /// Points whose maturity parsed to zero years.
    pub fn zero_tenor_points(&self) -> Vec<&CurvePoint> {
        self.points.iter().filter(|p| p.is_zero_tenor()).collect()
    }

    /// A copy of the curve without zero-year points.
    #[must_use]
    pub fn without_zero_tenors(&self) -> Self {
        Self {
            points: self
                .points
                .iter()
                .filter(|p| !p.is_zero_tenor())
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<CurvePoint>> for Curve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Self::from_points(points)
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
