//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which reads a delimited sales file into an
//! [`IngestionOutcome`].
//!
//! - If [`IngestionOptions::delimiter`] is `None`, the delimiter is chosen from
//!   [`IngestionOptions::format`], which in turn is inferred from the file extension when unset.
//! - If an [`super::observability::IngestionObserver`] is provided, rejected rows,
//!   success/failure and alerts are reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{SalesError, SalesResult};

use super::csv;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::rows::IngestionOutcome;

/// Supported delimited formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl SourceFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            _ => None,
        }
    }

    /// Field delimiter byte for this format.
    pub fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, infer from the file extension, falling back to CSV.
    pub format: Option<SourceFormat>,
    /// Explicit delimiter; takes precedence over `format`.
    pub delimiter: Option<u8>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("delimiter", &self.delimiter.map(char::from))
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

impl IngestionOptions {
    /// Delimiter that will be used for `path`.
    pub fn resolve_delimiter(&self, path: &Path) -> u8 {
        if let Some(d) = self.delimiter {
            return d;
        }
        self.format
            .or_else(|| {
                path.extension()
                    .and_then(|s| s.to_str())
                    .and_then(SourceFormat::from_extension)
            })
            .unwrap_or_default()
            .delimiter()
    }
}

/// Unified ingestion entry point for path-based sources.
///
/// When an observer is configured, this function reports:
///
/// - `on_row_rejected` for each malformed row
/// - `on_success` on success, with record and skip counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use sales_analytics::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
///
/// # fn main() -> Result<(), sales_analytics::SalesError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let out = ingest_from_path("sales_data.csv", &opts)?;
/// println!("records={} skipped={}", out.records.len(), out.skipped());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> SalesResult<IngestionOutcome> {
    let path = path.as_ref();
    let delimiter = options.resolve_delimiter(path);

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        delimiter,
    };

    let result = csv::ingest_csv_from_path(path, delimiter);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(out) => {
                for rejected in &out.rejected {
                    obs.on_row_rejected(&ctx, rejected);
                }
                obs.on_success(
                    &ctx,
                    IngestionStats {
                        rows: out.records.len(),
                        skipped: out.skipped(),
                    },
                );
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Classify a run-level error.
pub fn severity_for_error(e: &SalesError) -> IngestionSeverity {
    match e {
        SalesError::SourceUnavailable { .. } => IngestionSeverity::Critical,
        SalesError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        SalesError::EmptyInput | SalesError::NoUsableRows { .. } => IngestionSeverity::Error,
    }
}
