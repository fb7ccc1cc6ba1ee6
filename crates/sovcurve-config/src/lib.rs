//! Sovcurve Configuration Layer
//!
//! Settings for building, sampling and exporting a sovereign yield curve,
//! loaded from TOML or JSON and validated before use.
//!
//! # Example
//!
//! ```rust
//! use sovcurve_config::{CurveConfig, Validate};
//! use sovcurve_curves::InterpolationMethod;
//!
//! let config = CurveConfig::from_toml_str(r#"
//!     name = "CZK_GOVT_BOND_LIVE"
//!     interpolation = "NaturalCubicSpline"
//!     grid_points = 250
//! "#).unwrap();
//!
//! assert_eq!(config.interpolation, InterpolationMethod::NaturalCubicSpline);
//! assert_eq!(config.yield_column, "Yield");
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod curve;
mod error;

pub use curve::{CurveConfig, DEFAULT_GRID_POINTS, DEFAULT_TENOR_COLUMN, DEFAULT_YIELD_COLUMN};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::CurveConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
}
