//! # Sovcurve Curves
//!
//! Yield curve construction from sparse, textual bond-yield quotes.
//!
//! The pipeline has four stages, each a pure function of its input:
//!
//! 1. **Tenor parsing** ([`parse_tenor`]): `"3M"`, `"2 Year"`, `"10Y"` → years
//! 2. **Yield normalization** ([`parse_yield`]): `"+4.25 %"` → `4.25`
//! 3. **Curve building** ([`build_curve`], [`CurveBuilder`]): sorted
//!    [`CurvePoint`]s with ACT/360-scaled day counts and continuously
//!    compounded discount factors
//! 4. **Interpolation** ([`build_interpolant`], [`CurveSampler`]): a cubic
//!    spline through the curve, sampled at arbitrary maturities, with a linear
//!    fallback when there are fewer than three distinct maturities
//!
//! [`CurveExport`] wraps a built curve in the metadata record consumed by
//! downstream pricing systems.
//!
//! ## Quick Start
//!
//! ```rust
//! use sovcurve_curves::prelude::*;
//!
//! let rows = vec![
//!     RawObservation::new("1 Year", "5.00%"),
//!     RawObservation::new("2 Years", "4.80%"),
//!     RawObservation::new("5 Years", "+4.50%"),
//!     RawObservation::new("10 Years", "n/a"),
//! ];
//!
//! let curve = build_curve(&rows);
//! assert_eq!(curve.len(), 3);
//!
//! let spline = build_interpolant(&curve).unwrap();
//! let grid = spline.sample_grid(100).unwrap();
//! assert_eq!(grid.len(), 100);
//! ```
//!
//! No stage performs I/O; acquiring rows and rendering results belong to the
//! caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod builder;
pub mod conventions;
pub mod curve;
pub mod error;
pub mod export;
pub mod fallback;
pub mod interpolant;
pub mod interpolation;
pub mod quote;
pub mod tenor;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{build_curve, CurveBuild, CurveBuilder, RowDiagnostic, RowIssue};
    pub use crate::conventions::DayCountConvention;
    pub use crate::curve::{Curve, CurvePoint};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::export::{CurveExport, CurveMetadata, CurveRecord};
    pub use crate::fallback::{CurveSampler, LinearFallback};
    pub use crate::interpolant::{
        build_interpolant, Interpolant, SampledCurve, SamplePoint, MIN_SPLINE_POINTS,
    };
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::quote::{parse_yield, ParsedObservation, RawObservation};
    pub use crate::tenor::{parse_tenor, TenorUnit};
}

pub use builder::{build_curve, CurveBuild, CurveBuilder};
pub use curve::{Curve, CurvePoint};
pub use error::{CurveError, CurveResult};
pub use export::{CurveExport, CurveMetadata, CurveRecord};
pub use fallback::{CurveSampler, LinearFallback};
pub use interpolant::{build_interpolant, Interpolant, SampledCurve, SamplePoint};
pub use interpolation::InterpolationMethod;
pub use quote::{parse_yield, RawObservation};
pub use tenor::parse_tenor;
