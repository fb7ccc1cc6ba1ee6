//! CZK Government Curve Example
//!
//! Builds a curve from a hard-coded benchmark snapshot, prints the point
//! table, samples the spline and prints the structured export.
//!
//! Run with: cargo run --example czk_curve

use sovcurve_curves::prelude::*;

fn main() {
    let rows: Vec<RawObservation> = [
        ("3 Months", "3.52%"),
        ("6M", "3.48%"),
        ("1 Year", "3.41%"),
        ("2 Years", "+3.37 %"),
        ("5 Years", "3.55%"),
        ("10 Years", "3.98%"),
        ("15 Years", "4.12%"),
        ("20 Years", "-"),
        ("30 Years", "4.30%"),
    ]
    .into_iter()
    .map(RawObservation::from)
    .collect();

    let build = CurveBuilder::new().build(&rows);
    for diagnostic in &build.diagnostics {
        println!("skipped: {diagnostic}");
    }

    println!("\n{:<10} {:>8} {:>6} {:>10}", "Tenor", "Yield", "Days", "DF");
    println!("{}", "-".repeat(37));
    for point in &build.curve {
        println!(
            "{:<10} {:>7.3}% {:>6} {:>10.6}",
            point.tenor, point.rate_pct, point.days, point.discount_factor
        );
    }

    match CurveSampler::for_curve(&build.curve, InterpolationMethod::CubicSpline) {
        Ok(sampler) => {
            println!("\n{} samples:", sampler.method());
            for years in [0.75, 3.0, 7.0, 12.0, 20.0, 25.0] {
                println!("  {years:>5.2}Y  {:.4}%", sampler.sample(years));
            }
        }
        Err(e) => println!("no interpolant: {e}"),
    }

    match CurveExport::from_curve(&build.curve).to_json_pretty() {
        Ok(json) => println!("\n{json}"),
        Err(e) => println!("export failed: {e}"),
    }
}
