//! Row validation shared by every ingestion path.

use crate::error::{RowError, RowErrorKind, SalesError, SalesResult};
use crate::types::{Column, SalesRecord};

/// Result of ingesting one input: the valid records plus every rejected row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestionOutcome {
    /// Valid records in input order.
    pub records: Vec<SalesRecord>,
    /// Rejected rows in input order.
    pub rejected: Vec<RowError>,
}

impl IngestionOutcome {
    /// Number of skipped (malformed) rows.
    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }

    /// Number of data rows seen, excluding the header.
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    pub(crate) fn push(&mut self, line: usize, fields: &[&str]) {
        match parse_row(line, fields) {
            Ok(record) => self.records.push(record),
            Err(err) => self.rejected.push(err),
        }
    }

    pub(crate) fn reject(&mut self, err: RowError) {
        self.rejected.push(err);
    }

    /// Fails with [`SalesError::EmptyInput`] if no data rows were seen at all.
    pub(crate) fn require_rows(self) -> SalesResult<Self> {
        if self.total_rows() == 0 {
            return Err(SalesError::EmptyInput);
        }
        Ok(self)
    }
}

/// Validate data rows that are already split into fields.
///
/// `rows` must not include the header. Line numbers in rejections start at 2, as if a header
/// occupied line 1.
///
/// ```rust
/// use sales_analytics::ingestion::ingest_rows;
///
/// let out = ingest_rows(vec![
///     vec!["2024-01-01", "Widget", "10", "100.00", "North"],
///     vec!["2024-01-01", "Gadget", "5", "50.00"],
/// ])
/// .unwrap();
/// assert_eq!(out.records.len(), 1);
/// assert_eq!(out.skipped(), 1);
/// assert_eq!(out.rejected[0].line, 3);
/// ```
pub fn ingest_rows<I, R, S>(rows: I) -> SalesResult<IngestionOutcome>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = IngestionOutcome::default();
    for (row_idx0, row) in rows.into_iter().enumerate() {
        let fields: Vec<&str> = row.as_ref().iter().map(|f| f.as_ref()).collect();
        out.push(row_idx0 + 2, &fields);
    }
    out.require_rows()
}

/// Parse one data row into a [`SalesRecord`].
///
/// Date, product and region are kept as opaque (trimmed) tokens.
pub fn parse_row(line: usize, fields: &[&str]) -> Result<SalesRecord, RowError> {
    if fields.len() != Column::COUNT {
        return Err(RowError {
            line,
            kind: RowErrorKind::FieldCount { found: fields.len() },
        });
    }

    let field = |col: Column| fields[col.index()].trim();

    let quantity = parse_quantity(field(Column::Quantity)).map_err(|kind| RowError { line, kind })?;
    let amount = parse_amount(field(Column::Amount)).map_err(|kind| RowError { line, kind })?;

    Ok(SalesRecord {
        date: field(Column::Date).to_owned(),
        product: field(Column::Product).to_owned(),
        quantity,
        amount,
        region: field(Column::Region).to_owned(),
    })
}

fn parse_quantity(raw: &str) -> Result<u64, RowErrorKind> {
    raw.parse::<u64>().map_err(|e| RowErrorKind::InvalidQuantity {
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

fn parse_amount(raw: &str) -> Result<f64, RowErrorKind> {
    let invalid = |message: String| RowErrorKind::InvalidAmount {
        raw: raw.to_owned(),
        message,
    };
    let v = raw.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !v.is_finite() || v < 0.0 {
        return Err(invalid("expected a finite non-negative number".to_string()));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_trims_and_keeps_opaque_keys() {
        let r = parse_row(2, &[" 01/02/2024 ", "Widget ", " 10", "99.995 ", " north-east"]).unwrap();
        assert_eq!(r, SalesRecord::new("01/02/2024", "Widget", 10, 99.995, "north-east"));
    }

    #[test]
    fn parse_row_rejects_wrong_field_count() {
        let err = parse_row(4, &["2024-01-01", "Widget", "1", "1.0", "North", "extra"]).unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.kind, RowErrorKind::FieldCount { found: 6 });
        assert_eq!(err.to_string(), "line 4: expected 5 fields, found 6");
    }

    #[test]
    fn parse_row_rejects_negative_or_fractional_quantity() {
        for raw in ["-1", "1.5", "ten", ""] {
            let err = parse_row(2, &["d", "p", raw, "1.0", "r"]).unwrap_err();
            assert!(
                matches!(err.kind, RowErrorKind::InvalidQuantity { .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn parse_row_rejects_negative_and_non_finite_amounts() {
        for raw in ["-0.01", "NaN", "inf", "abc", ""] {
            let err = parse_row(2, &["d", "p", "1", raw, "r"]).unwrap_err();
            assert!(
                matches!(err.kind, RowErrorKind::InvalidAmount { .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn ingest_rows_counts_every_row_once() {
        let out = ingest_rows(vec![
            vec!["2024-01-01", "Widget", "10", "100.00", "North"],
            vec!["2024-01-01", "Gadget", "x", "50.00", "South"],
            vec!["2024-01-02", "Widget", "20", "200.00", "North"],
        ])
        .unwrap();
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.skipped(), 1);
        assert_eq!(out.total_rows(), 3);
        assert_eq!(out.rejected[0].line, 3);
    }

    #[test]
    fn ingest_rows_fails_on_empty_input() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert!(matches!(ingest_rows(rows), Err(SalesError::EmptyInput)));
    }
}
