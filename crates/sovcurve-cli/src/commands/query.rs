//! Query command implementation.
//!
//! Evaluates the interpolated curve at specific maturities.

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use sovcurve_config::CurveConfig;
use sovcurve_curves::curve::discount_factor;
use sovcurve_curves::CurveSampler;
use tabled::Tabled;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::{interpolation_input, load_curve, InputArgs, InterpolationChoice};
use crate::output::{format_rate, format_years, print_header, print_rows, print_warning};

/// Arguments for the query command.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maturities to evaluate, in years
    #[arg(short = 'a', long = "at", required = true, num_args = 1..)]
    pub at: Vec<f64>,

    /// Interpolation method
    #[arg(short, long, value_enum)]
    pub interpolation: Option<InterpolationChoice>,

    /// Leave zero-year points out of the fit
    #[arg(long)]
    pub exclude_zero_tenors: bool,
}

#[derive(Debug, Serialize)]
struct QueryRecord {
    years: f64,
    rate_pct: f64,
    df: f64,
    slope: f64,
    extrapolated: bool,
}

#[derive(Tabled)]
struct QueryRow {
    #[tabled(rename = "Maturity")]
    years: String,
    #[tabled(rename = "Yield")]
    rate: String,
    #[tabled(rename = "Discount Factor")]
    df: String,
    #[tabled(rename = "Slope (%/Y)")]
    slope: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl From<&QueryRecord> for QueryRow {
    fn from(record: &QueryRecord) -> Self {
        Self {
            years: format_years(record.years),
            rate: format_rate(record.rate_pct),
            df: format!("{:.6}", record.df),
            slope: format!("{:.4}", record.slope),
            note: if record.extrapolated {
                "extrapolated".to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Execute the query command.
pub fn execute(args: QueryArgs, format: OutputFormat, mut config: CurveConfig) -> Result<()> {
    if let Some(bad) = args.at.iter().find(|x| !x.is_finite()) {
        bail!("Invalid maturity: {bad}");
    }

    args.input.apply(&mut config);
    if let Some(choice) = args.interpolation {
        config.interpolation = choice.into();
    }
    if args.exclude_zero_tenors {
        config.exclude_zero_tenors = true;
    }

    let build = load_curve(&args.input, &config)?;
    let curve = interpolation_input(&build.curve, &config);
    let sampler = CurveSampler::for_curve(&curve, config.interpolation)?;

    let records: Vec<QueryRecord> = args
        .at
        .iter()
        .map(|&years| {
            let rate_pct = sampler.sample(years);
            let extrapolated = sampler.is_extrapolating(years);
            if extrapolated {
                warn!(years, min = sampler.min_years(), max = sampler.max_years(), "extrapolating");
                print_warning(&format!(
                    "{years}Y is outside the quoted range [{}, {}], value is extrapolated",
                    sampler.min_years(),
                    sampler.max_years()
                ));
            }
            QueryRecord {
                years,
                rate_pct,
                df: discount_factor(rate_pct, years),
                slope: sampler.derivative(years),
                extrapolated,
            }
        })
        .collect();
    let rows: Vec<QueryRow> = records.iter().map(QueryRow::from).collect();

    if format == OutputFormat::Table {
        print_header(&format!("{}: {}", config.name, sampler.method()));
    }
    print_rows(&rows, &records, format)
}
