//! Day count labelling for curve points.
//!
//! Curve points carry an integer `days` field next to their year fraction.
//! It is a scaled year fraction, `floor(years * basis)`, not a calendar day
//! count between two dates: the quotes carry tenors, not settlement and
//! maturity dates. The convention name travels with exported curves so
//! consumers know which basis was applied.

use serde::{Deserialize, Serialize};

/// Day count convention used to scale year fractions into days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360: 360-day year basis.
    #[default]
    #[serde(rename = "ACT/360", alias = "Act360")]
    Act360,
}

impl DayCountConvention {
    /// Returns the market name of the convention (e.g. `"ACT/360"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Act360 => "ACT/360",
        }
    }

    /// Days in the convention's year.
    #[must_use]
    pub fn days_per_year(self) -> u32 {
        match self {
            Self::Act360 => 360,
        }
    }

    /// Scales a year fraction to whole days, rounding down.
    ///
    /// Returns `None` when the scaled value is not finite or does not fit in
    /// an `i64`.
    ///
    /// ```rust
    /// use sovcurve_curves::conventions::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Act360.days(0.25), Some(90));
    /// assert_eq!(DayCountConvention::Act360.days(10.0), Some(3600));
    /// assert_eq!(DayCountConvention::Act360.days(1.0 / 12.0), Some(30));
    /// assert_eq!(DayCountConvention::Act360.days(1e20), None);
    /// ```
    #[must_use]
    pub fn days(self, years: f64) -> Option<i64> {
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
        const UPPER: f64 = i64::MAX as f64;
        const LOWER: f64 = i64::MIN as f64;

        let scaled = (years * f64::from(self.days_per_year())).floor();
        if scaled.is_finite() && (LOWER..UPPER).contains(&scaled) {
            Some(scaled as i64)
        } else {
            None
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(Self::Act360),
            other => Err(format!("unsupported day count convention: {other}")),
        }
    }
}
