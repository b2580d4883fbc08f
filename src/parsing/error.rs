//! Load-time error taxonomy.

use thiserror::Error;

/// Errors raised while loading and normalizing the source table.
///
/// All of these abort startup: the loader never coerces an unparsable
/// date to null or serves a table with missing required columns.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV source: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("unparsable time_start {value:?} at row {row}")]
    UnparsableDate { row: usize, value: String },

    #[error("missing time_start at row {row}")]
    MissingDate { row: usize },

    #[error("invalid coordinate override table: {0}")]
    Overrides(String),
}
