//! Full analysis run over one ingested snapshot.

use serde::Serialize;

use crate::ingestion::IngestionOutcome;
use crate::processing::{aggregate, overview, summarize_periods, summarize_segments, trend};
use crate::types::{Dimension, Overview, PeriodSummary, SalesRecord, SegmentSummary, TrendSummary};

/// Every ordered result of one run, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub overview: Overview,
    /// Ranked by amount descending, then product name.
    pub by_product: Vec<SegmentSummary>,
    /// Ranked by amount descending, then region name.
    pub by_region: Vec<SegmentSummary>,
    /// Chronological by date token.
    pub by_date: Vec<PeriodSummary>,
    pub trend: TrendSummary,
    /// Malformed rows skipped during ingestion.
    pub skipped_rows: usize,
}

impl SalesReport {
    /// Aggregate each dimension independently and derive every metric.
    pub fn from_records(records: &[SalesRecord], skipped_rows: usize) -> Self {
        let by_product = summarize_segments(&aggregate(records, Dimension::Product));
        let by_region = summarize_segments(&aggregate(records, Dimension::Region));
        let by_date = summarize_periods(&aggregate(records, Dimension::Date));
        let trend = trend(&by_date);

        Self {
            overview: overview(records),
            by_product,
            by_region,
            by_date,
            trend,
            skipped_rows,
        }
    }

    /// Build a report from an ingestion result, carrying its skip count.
    pub fn from_outcome(outcome: &IngestionOutcome) -> Self {
        Self::from_records(&outcome.records, outcome.skipped())
    }

    /// Highest-grossing product, if any.
    pub fn top_product(&self) -> Option<&SegmentSummary> {
        self.by_product.first()
    }

    /// Highest-grossing region, if any.
    pub fn top_region(&self) -> Option<&SegmentSummary> {
        self.by_region.first()
    }

    /// Summaries for a cross-sectional dimension; `None` for [`Dimension::Date`].
    pub fn segments(&self, dimension: Dimension) -> Option<&[SegmentSummary]> {
        match dimension {
            Dimension::Product => Some(self.by_product.as_slice()),
            Dimension::Region => Some(self.by_region.as_slice()),
            Dimension::Date => None,
        }
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
