//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - picks the delimiter from the file extension (or you can override via [`IngestionOptions`])
//! - parses every data row into a [`crate::types::SalesRecord`], skipping malformed rows
//! - optionally reports rejected rows, success, failure and alerts to an [`IngestionObserver`]
//!
//! Lower-level entry points:
//! - [`rows::ingest_rows`] for rows that are already split into fields
//! - [`csv`] for an existing delimited reader or a path with a known delimiter

pub mod csv;
pub mod observability;
pub mod rows;
pub mod unified;

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver,
};
pub use rows::{ingest_rows, IngestionOutcome};
pub use unified::{ingest_from_path, IngestionOptions, SourceFormat};
