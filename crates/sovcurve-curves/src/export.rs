//! Structured curve export.
//!
//! The export is a JSON document with a metadata header and one record per
//! curve point:
//!
//! ```json
//! {
//!   "curve_metadata": {
//!     "name": "CZK_GOVT_BOND_LIVE",
//!     "interpolation": "Cubic Spline",
//!     "convention": "ACT/360"
//!   },
//!   "data": [
//!     { "tenor": "1 Year", "days": 360, "rate_pct": 5.0, "df": 0.951229424500714 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::conventions::DayCountConvention;
use crate::curve::{Curve, CurvePoint};
use crate::interpolation::InterpolationMethod;

/// Default curve name in export metadata.
pub const DEFAULT_CURVE_NAME: &str = "CZK_GOVT_BOND_LIVE";

/// Header of an exported curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveMetadata {
    /// Curve identifier.
    pub name: String,
    /// Human-readable interpolation label.
    pub interpolation: String,
    /// Day count convention label.
    pub convention: String,
}

impl CurveMetadata {
    /// Creates metadata from typed method and convention.
    pub fn new(
        name: impl Into<String>,
        interpolation: InterpolationMethod,
        convention: DayCountConvention,
    ) -> Self {
        Self {
            name: name.into(),
            interpolation: interpolation.to_string(),
            convention: convention.name().to_string(),
        }
    }
}

impl Default for CurveMetadata {
    fn default() -> Self {
        Self::new(
            DEFAULT_CURVE_NAME,
            InterpolationMethod::default(),
            DayCountConvention::default(),
        )
    }
}

/// One exported curve point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    /// Tenor label as quoted.
    pub tenor: String,
    /// Scaled day count.
    pub days: i64,
    /// Yield in percent.
    pub rate_pct: f64,
    /// Discount factor.
    pub df: f64,
}

impl From<&CurvePoint> for CurveRecord {
    fn from(point: &CurvePoint) -> Self {
        Self {
            tenor: point.tenor.clone(),
            days: point.days,
            rate_pct: point.rate_pct,
            df: point.discount_factor,
        }
    }
}

/// An exported curve: metadata plus records in maturity order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveExport {
    /// Header.
    pub curve_metadata: CurveMetadata,
    /// Records, ascending by maturity.
    pub data: Vec<CurveRecord>,
}

impl CurveExport {
    /// Exports `curve` under the given metadata.
    pub fn new(curve: &Curve, curve_metadata: CurveMetadata) -> Self {
        Self {
            curve_metadata,
            data: curve.iter().map(CurveRecord::from).collect(),
        }
    }

    /// Exports `curve` under default metadata.
    pub fn from_curve(curve: &Curve) -> Self {
        Self::new(curve, CurveMetadata::default())
    }

    /// Renders the export as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the export as a JSON value.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
