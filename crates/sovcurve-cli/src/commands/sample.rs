//! Sample command implementation.
//!
//! Evaluates the interpolated curve on an evenly spaced grid from the
//! shortest to the longest maturity.

use anyhow::Result;
use clap::Args;
use sovcurve_config::CurveConfig;
use sovcurve_curves::{CurveSampler, SamplePoint};
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{interpolation_input, load_curve, InputArgs, InterpolationChoice};
use crate::output::{format_rate, format_years, print_header, print_note, print_rows};

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of grid points, endpoints included
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Interpolation method
    #[arg(short, long, value_enum)]
    pub interpolation: Option<InterpolationChoice>,

    /// Leave zero-year points out of the fit
    #[arg(long)]
    pub exclude_zero_tenors: bool,
}

#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "Maturity")]
    years: String,
    #[tabled(rename = "Yield")]
    rate: String,
}

impl From<&SamplePoint> for SampleRow {
    fn from(point: &SamplePoint) -> Self {
        Self {
            years: format_years(point.years),
            rate: format_rate(point.rate_pct),
        }
    }
}

/// Execute the sample command.
pub fn execute(args: SampleArgs, format: OutputFormat, mut config: CurveConfig) -> Result<()> {
    args.input.apply(&mut config);
    if let Some(points) = args.points {
        config.grid_points = points;
    }
    if let Some(choice) = args.interpolation {
        config.interpolation = choice.into();
    }
    if args.exclude_zero_tenors {
        config.exclude_zero_tenors = true;
    }

    let build = load_curve(&args.input, &config)?;
    let curve = interpolation_input(&build.curve, &config);
    let sampler = CurveSampler::for_curve(&curve, config.interpolation)?;
    if sampler.method() != config.interpolation {
        print_note(&format!(
            "{} distinct maturities, using {} instead of {}",
            curve.distinct_years(),
            sampler.method(),
            config.interpolation
        ));
    }

    let sampled = sampler.sample_grid(config.grid_points)?;
    let rows: Vec<SampleRow> = sampled.points.iter().map(SampleRow::from).collect();

    if format == OutputFormat::Table {
        print_header(&format!(
            "{}: {} ({} points)",
            config.name,
            sampled.method,
            sampled.len()
        ));
    }
    print_rows(&rows, &sampled.points, format)
}
