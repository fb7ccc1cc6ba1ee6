//! Export command implementation.
//!
//! Writes the curve with its metadata header as pretty-printed JSON. The
//! export is always JSON; an explicit `--format` other than `json` is
//! reported on stderr and otherwise ignored.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use sovcurve_config::CurveConfig;
use sovcurve_curves::CurveExport;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::commands::{load_curve, InputArgs};
use crate::error::CliResult;
use crate::output::print_note;

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Curve name in the metadata header
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the export command.
pub fn execute(
    args: ExportArgs,
    format: Option<OutputFormat>,
    mut config: CurveConfig,
) -> Result<()> {
    if let Some(ignored) = format.filter(|f| *f != OutputFormat::Json) {
        let name = ignored
            .to_possible_value()
            .map_or_else(|| format!("{ignored:?}"), |v| v.get_name().to_string());
        warn!(format = %name, "export output is always JSON");
        print_note(&format!("export is always JSON, ignoring --format {name}"));
    }

    args.input.apply(&mut config);
    if let Some(name) = args.name {
        config.name = name;
    }

    let build = load_curve(&args.input, &config)?;
    let export = CurveExport::new(&build.curve, config.metadata());
    let json = export.to_json_pretty()?;

    match args.output {
        Some(path) => {
            write_file(&path, &json)?;
            info!(path = %path.display(), records = export.data.len(), "wrote curve export");
            print_note(&format!("wrote {} records to {}", export.data.len(), path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn write_file(path: &std::path::Path, json: &str) -> CliResult<()> {
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
