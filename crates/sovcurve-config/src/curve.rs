//! Curve build configuration.
//!
//! A [`CurveConfig`] names the curve, picks the interpolation method and the
//! sampling density, and tells the table reader which headers hold tenors and
//! yields. Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! name = "CZK_GOVT_BOND_LIVE"
//! interpolation = "NaturalCubicSpline"
//! grid_points = 250
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sovcurve_curves::conventions::DayCountConvention;
use sovcurve_curves::export::{CurveMetadata, DEFAULT_CURVE_NAME};
use sovcurve_curves::interpolation::InterpolationMethod;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Default number of samples along the curve.
pub const DEFAULT_GRID_POINTS: usize = 100;

/// Default header substring for the tenor column.
pub const DEFAULT_TENOR_COLUMN: &str = "Maturity";

/// Default header substring for the yield column.
pub const DEFAULT_YIELD_COLUMN: &str = "Yield";

/// Settings for building, sampling and exporting one curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveConfig {
    /// Curve name written to export metadata.
    pub name: String,

    /// Interpolation method.
    pub interpolation: InterpolationMethod,

    /// Samples taken by a grid sample, endpoints included.
    pub grid_points: usize,

    /// Substring identifying the tenor column header (case-sensitive).
    pub tenor_column: String,

    /// Substring identifying the yield column header (case-sensitive).
    pub yield_column: String,

    /// Leave zero-year points out of the interpolant. They still appear in
    /// tables and exports.
    pub exclude_zero_tenors: bool,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CURVE_NAME)
    }
}

impl CurveConfig {
    /// Creates a configuration with default settings and the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interpolation: InterpolationMethod::default(),
            grid_points: DEFAULT_GRID_POINTS,
            tenor_column: DEFAULT_TENOR_COLUMN.to_string(),
            yield_column: DEFAULT_YIELD_COLUMN.to_string(),
            exclude_zero_tenors: false,
        }
    }

    /// Builder method to set interpolation.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.interpolation = method;
        self
    }

    /// Builder method to set the number of grid samples.
    #[must_use]
    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    /// Builder method to set the column header hints.
    #[must_use]
    pub fn with_columns(mut self, tenor: impl Into<String>, yields: impl Into<String>) -> Self {
        self.tenor_column = tenor.into();
        self.yield_column = yields.into();
        self
    }

    /// Builder method to leave zero-year points out of interpolation.
    #[must_use]
    pub fn with_exclude_zero_tenors(mut self, exclude: bool) -> Self {
        self.exclude_zero_tenors = exclude;
        self
    }

    /// Export metadata for this configuration.
    pub fn metadata(&self) -> CurveMetadata {
        CurveMetadata::new(self.name.clone(), self.interpolation, DayCountConvention::Act360)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format by extension
    /// (`.toml` or `.json`, case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_str() {
            "toml" => Self::from_toml_str(&read()?),
            "json" => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.grid_points < 2 {
            errors.push(ValidationError::with_rule(
                "grid_points",
                "Grid must have at least 2 points",
                "min_grid_points",
            ));
        }

        if self.tenor_column.is_empty() {
            errors.push(ValidationError::new("tenor_column", "Column hint cannot be empty"));
        }

        if self.yield_column.is_empty() {
            errors.push(ValidationError::new("yield_column", "Column hint cannot be empty"));
        }

        errors
    }
}
