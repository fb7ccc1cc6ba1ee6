//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ExportArgs, QueryArgs, SampleArgs, TableArgs};

/// Sovcurve - sovereign yield curves from benchmark quote tables
#[derive(Parser)]
#[command(name = "sovcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Curve configuration file (.toml or .json)
    #[arg(short, long, global = true, env = "SOVCURVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the benchmark table: tenor, yield, days and discount factor
    Table(TableArgs),

    /// Write the curve as a structured JSON document
    Export(ExportArgs),

    /// Sample the interpolated curve on an even grid
    Sample(SampleArgs),

    /// Evaluate the interpolated curve at given maturities
    Query(QueryArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
