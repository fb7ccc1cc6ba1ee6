//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No header contains the configured column hint.
    #[error("No column header contains '{hint}' (found: {})", .available.join(", "))]
    MissingColumn {
        /// Substring that was searched for.
        hint: String,
        /// Headers present in the table.
        available: Vec<String>,
    },

    /// The quote table could not be read.
    #[error("Failed to read quotes from {source_name}: {reason}")]
    Acquisition {
        /// File name, or `<stdin>`.
        source_name: String,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
