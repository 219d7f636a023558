//! Delimited (CSV/TSV) ingestion implementation.

use std::fs::File;
use std::path::Path;

use crate::error::{RowError, RowErrorKind, SalesError, SalesResult};

use super::rows::IngestionOutcome;

/// Ingest a delimited file into validated records.
///
/// Rules:
///
/// - The first line is a header and is skipped without being checked.
/// - Data rows must have exactly five fields: date, product, quantity, amount, region.
/// - Rows that are not valid UTF-8 are rejected like any other malformed row.
/// - Malformed rows are collected in [`IngestionOutcome::rejected`] and skipped.
/// - A file without data rows fails with [`SalesError::EmptyInput`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>, delimiter: u8) -> SalesResult<IngestionOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SalesError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest delimited data from an existing reader.
///
/// The reader should be built with `has_headers(true)` and `flexible(true)`. Row width is then
/// checked against the five fixed columns, whatever the header looks like.
///
/// A reader that is not `flexible` compares every row against the width of the header instead.
/// Rows it reports as too short or too long become [`RowErrorKind::FieldCount`] rejections, but
/// with a header that is not five columns wide such a reader also rejects well-formed rows.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> SalesResult<IngestionOutcome> {
    let mut out = IngestionOutcome::default();

    for (row_idx0, result) in rdr.records().enumerate() {
        // Fallback when the reader has no position: header is line 1, rows follow.
        let fallback_line = row_idx0 + 2;
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                let fields: Vec<&str> = record.iter().collect();
                out.push(line, &fields);
            }
            Err(err) => {
                // Width and encoding problems are confined to one row; anything else is fatal.
                let rejected = match err.kind() {
                    csv::ErrorKind::UnequalLengths { pos, len, .. } => {
                        Some((pos.clone(), RowErrorKind::FieldCount { found: *len as usize }))
                    }
                    csv::ErrorKind::Utf8 { pos, err: utf8 } => {
                        Some((pos.clone(), RowErrorKind::InvalidUtf8 { field: utf8.field() }))
                    }
                    _ => None,
                };
                let Some((pos, kind)) = rejected else {
                    return Err(err.into());
                };
                let line = pos.map(|p| p.line() as usize).unwrap_or(fallback_line);
                out.reject(RowError { line, kind });
            }
        }
    }

    out.require_rows()
}
