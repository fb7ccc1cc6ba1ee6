//! Table command implementation.
//!
//! Shows the built curve point by point.

use anyhow::Result;
use clap::Args;
use sovcurve_config::CurveConfig;
use sovcurve_curves::{CurvePoint, CurveRecord};
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, InputArgs};
use crate::output::{format_rate, print_header, print_rows};

/// Arguments for the table command.
#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Tabled)]
struct BenchmarkRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Yield")]
    rate: String,
    #[tabled(rename = "Years")]
    years: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
}

impl From<&CurvePoint> for BenchmarkRow {
    fn from(point: &CurvePoint) -> Self {
        Self {
            tenor: point.tenor.clone(),
            rate: format_rate(point.rate_pct),
            years: format!("{:.4}", point.years),
            days: point.days,
            discount_factor: format!("{:.6}", point.discount_factor),
        }
    }
}

/// Execute the table command.
pub fn execute(args: TableArgs, format: OutputFormat, mut config: CurveConfig) -> Result<()> {
    args.input.apply(&mut config);
    let build = load_curve(&args.input, &config)?;

    let rows: Vec<BenchmarkRow> = build.curve.iter().map(BenchmarkRow::from).collect();
    let records: Vec<CurveRecord> = build.curve.iter().map(CurveRecord::from).collect();

    if format == OutputFormat::Table {
        print_header(&format!("{} (ACT/360)", config.name));
    }
    print_rows(&rows, &records, format)
}
