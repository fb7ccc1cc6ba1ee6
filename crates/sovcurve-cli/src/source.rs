//! Quote table acquisition.
//!
//! Reads a CSV table of benchmark quotes and picks out the tenor and yield
//! columns by header substring. Everything else in the table is ignored.

use std::io::Read;
use std::path::Path;

use sovcurve_curves::RawObservation;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Index of the first header containing `hint` (case-sensitive).
pub fn find_column(headers: &csv::StringRecord, hint: &str) -> Option<usize> {
    headers.iter().position(|h| h.contains(hint))
}

/// Reads observations from a file, or from stdin when `path` is `-`.
pub fn read_observations(
    path: &Path,
    tenor_hint: &str,
    yield_hint: &str,
) -> CliResult<Vec<RawObservation>> {
    if path.as_os_str() == STDIN_PATH {
        return read_observations_from(std::io::stdin().lock(), "<stdin>", tenor_hint, yield_hint);
    }

    let file = std::fs::File::open(path).map_err(|e| CliError::Acquisition {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })?;
    read_observations_from(file, &path.display().to_string(), tenor_hint, yield_hint)
}

/// Reads observations from any CSV reader.
///
/// Short rows are padded with empty cells, so a row missing its yield comes
/// through with an empty yield label and is dropped at curve build time.
pub fn read_observations_from<R: Read>(
    reader: R,
    source_name: &str,
    tenor_hint: &str,
    yield_hint: &str,
) -> CliResult<Vec<RawObservation>> {
    let acquisition = |e: csv::Error| CliError::Acquisition {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers().map_err(acquisition)?.clone();

    let column = |hint: &str| {
        find_column(&headers, hint).ok_or_else(|| CliError::MissingColumn {
            hint: hint.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })
    };
    let tenor_idx = column(tenor_hint)?;
    let yield_idx = column(yield_hint)?;
    debug!(
        tenor = &headers[tenor_idx],
        yields = &headers[yield_idx],
        "selected quote columns"
    );

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(acquisition)?;
        rows.push(RawObservation::new(
            record.get(tenor_idx).unwrap_or_default(),
            record.get(yield_idx).unwrap_or_default(),
        ));
    }
    debug!(rows = rows.len(), source = source_name, "read quote table");

    Ok(rows)
}
