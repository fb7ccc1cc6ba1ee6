//! # Sovcurve Math
//!
//! Numerical kernels for the sovcurve yield curve engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Cubic splines (not-a-knot and natural end conditions)
//!   and piecewise linear interpolation behind a common [`Interpolator`] trait
//! - **Grids**: Evenly spaced sampling grids ([`linspace`])
//!
//! Nothing in this crate knows about tenors, yields or day counts. It works on
//! plain `f64` abscissae and ordinates.
//!
//! [`Interpolator`]: interpolation::Interpolator
//! [`linspace`]: grid::linspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod grid;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::grid::linspace;
    pub use crate::interpolation::{
        CubicSpline, Extrapolation, Interpolator, LinearInterpolator, SplineBoundary,
    };
}

pub use error::{MathError, MathResult};
