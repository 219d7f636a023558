use std::path::PathBuf;

use thiserror::Error;

use crate::types::Column;

/// Convenience result type for ingestion and reporting operations.
pub type SalesResult<T> = Result<T, SalesError>;

/// Error type returned when a run cannot proceed.
///
/// Row-level problems never surface here; they are collected as [`RowError`]s and the row is
/// skipped.
#[derive(Debug, Error)]
pub enum SalesError {
    /// The input could not be opened or read.
    #[error("cannot read sales data from '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited reader failed in a way that is not tied to a single row.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has a header (or nothing at all) but no data rows.
    #[error("input contains no data rows")]
    EmptyInput,

    /// Every data row was rejected, so there is nothing to aggregate.
    #[error("input contains no usable rows ({skipped} malformed row(s) skipped)")]
    NoUsableRows { skipped: usize },
}

/// A data row that was rejected during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct RowError {
    /// 1-based line number in the input (the header is line 1).
    pub line: usize,
    /// Why the row was rejected.
    pub kind: RowErrorKind,
}

/// Reasons a row can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    #[error("expected {expected} fields, found {found}", expected = Column::COUNT)]
    FieldCount { found: usize },

    #[error("invalid {column} '{raw}': {message}", column = Column::Quantity.name())]
    InvalidQuantity { raw: String, message: String },

    #[error("invalid {column} '{raw}': {message}", column = Column::Amount.name())]
    InvalidAmount { raw: String, message: String },

    /// `field` is the zero-based position of the first field that is not valid UTF-8.
    #[error("field {field} is not valid UTF-8")]
    InvalidUtf8 { field: usize },
}

/// Errors raised while deriving metrics from aggregated buckets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The previous period had a zero amount, or the change overflowed, so a relative change
    /// cannot be computed.
    #[error("growth rate undefined: previous period amount is zero or the change is not finite")]
    UndefinedGrowth,
}
