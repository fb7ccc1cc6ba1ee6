//! Sovcurve CLI - sovereign yield curves from benchmark quote tables.
//!
//! # Usage
//!
//! ```bash
//! # Show the benchmark table
//! sovcurve table quotes.csv
//!
//! # Export the curve as JSON
//! sovcurve export quotes.csv --name CZK_GOVT_BOND_LIVE -o curve.json
//!
//! # Sample the spline on 250 points
//! sovcurve sample quotes.csv --points 250 --format csv
//!
//! # Query the curve at 7 and 12 years, reading quotes from stdin
//! cat quotes.csv | sovcurve query - --at 7 12
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sovcurve_config::CurveConfig;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod source;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or_default();

    // Execute command
    match cli.command {
        Commands::Table(args) => commands::table::execute(args, format, config)?,
        Commands::Export(args) => commands::export::execute(args, cli.format, config)?,
        Commands::Sample(args) => commands::sample::execute(args, format, config)?,
        Commands::Query(args) => commands::query::execute(args, format, config)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<CurveConfig> {
    match path {
        Some(path) => {
            let config = CurveConfig::from_path(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            debug!(path = %path.display(), ?config, "loaded configuration");
            Ok(config)
        }
        None => Ok(CurveConfig::default()),
    }
}
