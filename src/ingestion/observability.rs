use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{RowError, SalesError};

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (a row was skipped).
    Warning,
    /// Error-level event (the run failed).
    Error,
    /// Critical error (the source could not be read).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
    /// Field delimiter used for ingestion.
    pub delimiter: u8,
}

/// Stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of valid records.
    pub rows: usize,
    /// Number of malformed rows that were skipped.
    pub skipped: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called once per malformed row, in input order.
    fn on_row_rejected(&self, _ctx: &IngestionContext, _error: &RowError) {}

    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &SalesError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SalesError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_row_rejected(&self, ctx: &IngestionContext, error: &RowError) {
        for o in &self.observers {
            o.on_row_rejected(ctx, error);
        }
    }

    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SalesError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SalesError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards ingestion events to the [`log`] facade.
///
/// Rejected rows are logged at `warn`, success at `info`, failures and alerts at `error`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_row_rejected(&self, ctx: &IngestionContext, error: &RowError) {
        log::warn!("[ingest][skip] path={} {}", ctx.path.display(), error);
    }

    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        log::info!(
            "[ingest][ok] path={} delimiter={:?} rows={} skipped={}",
            ctx.path.display(),
            ctx.delimiter as char,
            stats.rows,
            stats.skipped
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SalesError) {
        log::error!(
            "[ingest][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SalesError) {
        log::error!(
            "[ALERT][ingest][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}
