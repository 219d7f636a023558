//! `sales-analytics` ingests delimited sales transactions into validated
//! [`types::SalesRecord`]s and aggregates them by product, region and date.
//!
//! The primary entrypoints are [`ingestion::ingest_from_path`], which reads a CSV/TSV file and
//! skips malformed rows, and [`report::SalesReport::from_outcome`], which runs every aggregation
//! and returns ranked summaries.
//!
//! ## Input
//!
//! A header row followed by data rows with exactly five columns in this order:
//!
//! | column   | type                         |
//! |----------|------------------------------|
//! | date     | opaque token, sorted as text |
//! | product  | text                         |
//! | quantity | non-negative integer         |
//! | amount   | non-negative decimal         |
//! | region   | text                         |
//!
//! Rows with the wrong field count, or a quantity/amount that does not parse, are skipped and
//! reported as [`error::RowError`]s. Input without any data rows fails with
//! [`SalesError::EmptyInput`].
//!
//! ## Quick example
//!
//! ```no_run
//! use sales_analytics::ingestion::{ingest_from_path, IngestionOptions};
//! use sales_analytics::report::SalesReport;
//!
//! # fn main() -> Result<(), sales_analytics::SalesError> {
//! let outcome = ingest_from_path("sales_data.csv", &IngestionOptions::default())?;
//! let report = SalesReport::from_outcome(&outcome);
//! if let Some(top) = report.top_product() {
//!     println!("best product: {} ({:.2})", top.key, top.total_amount);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: unified ingestion entrypoint, delimited reader, observers
//! - [`types`]: records, buckets and summary types
//! - [`processing`]: aggregation, metrics and ranking
//! - [`report`]: a full run bundled for rendering or JSON export
//! - [`error`]: error types
//!
//! ## Ordering
//!
//! Product and region summaries are ordered by amount descending, ties broken by key ascending.
//! Date summaries are ordered by their token as a plain string, so only formats such as ISO
//! `YYYY-MM-DD` sort chronologically.

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{MetricsError, RowError, SalesError, SalesResult};
