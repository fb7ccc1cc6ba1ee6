//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows in the requested format.
///
/// `Table` renders the display rows; `Json` and `Csv` serialize the numeric
/// records so downstream tools get full precision.
pub fn print_rows<D: Tabled, S: Serialize>(
    display: &[D],
    records: &[S],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(display),
        OutputFormat::Json => print_json(records),
        OutputFormat::Csv => print_csv(records),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message to stderr.
pub fn print_note(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.dimmed());
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Formats a yield in percent.
pub fn format_rate(rate_pct: f64) -> String {
    format!("{rate_pct:.4}%")
}

/// Formats a maturity in years.
pub fn format_years(years: f64) -> String {
    format!("{years:.4}Y")
}
