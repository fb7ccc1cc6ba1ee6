//! CLI command implementations.

pub mod export;
pub mod query;
pub mod sample;
pub mod table;

pub use export::ExportArgs;
pub use query::QueryArgs;
pub use sample::SampleArgs;
pub use table::TableArgs;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use sovcurve_config::{CurveConfig, Validate};
use sovcurve_curves::{Curve, CurveBuild, CurveBuilder, InterpolationMethod};

use crate::output::{print_note, print_warning};
use crate::source::read_observations;

/// Where the quotes come from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Quote table (CSV with a header row), or - for stdin
    pub input: PathBuf,

    /// Header substring identifying the tenor column
    #[arg(long)]
    pub tenor_column: Option<String>,

    /// Header substring identifying the yield column
    #[arg(long)]
    pub yield_column: Option<String>,
}

impl InputArgs {
    /// Overrides the config's column hints with any given on the command line.
    pub fn apply(&self, config: &mut CurveConfig) {
        if let Some(ref hint) = self.tenor_column {
            config.tenor_column.clone_from(hint);
        }
        if let Some(ref hint) = self.yield_column {
            config.yield_column.clone_from(hint);
        }
    }
}

/// Interpolation method choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InterpolationChoice {
    /// Cubic spline, not-a-knot end conditions
    #[value(name = "cubic")]
    Cubic,
    /// Cubic spline, natural end conditions
    #[value(name = "natural")]
    Natural,
    /// Straight lines between quotes
    #[value(name = "linear")]
    Linear,
}

impl From<InterpolationChoice> for InterpolationMethod {
    fn from(choice: InterpolationChoice) -> Self {
        match choice {
            InterpolationChoice::Cubic => InterpolationMethod::CubicSpline,
            InterpolationChoice::Natural => InterpolationMethod::NaturalCubicSpline,
            InterpolationChoice::Linear => InterpolationMethod::Linear,
        }
    }
}

/// Validates the effective configuration, reads the quote table and builds
/// the curve, reporting row diagnostics on stderr.
pub fn load_curve(input: &InputArgs, config: &CurveConfig) -> Result<CurveBuild> {
    config.validate_or_error()?;
    let rows = read_observations(&input.input, &config.tenor_column, &config.yield_column)?;
    let build = CurveBuilder::new().build(&rows);

    for diagnostic in build.flagged() {
        print_warning(&diagnostic.to_string());
    }
    let dropped = build.rows_dropped();
    if dropped > 0 {
        print_note(&format!(
            "{dropped} of {} rows dropped (no usable yield)",
            build.rows_read
        ));
    }

    Ok(build)
}

/// The points the interpolant is fitted through.
pub fn interpolation_input(curve: &Curve, config: &CurveConfig) -> Curve {
    if config.exclude_zero_tenors {
        curve.without_zero_tenors()
    } else {
        curve.clone()
    }
}
