//! Core data model types.
//!
//! Ingestion produces [`SalesRecord`]s. Aggregation folds them into [`Bucket`]s keyed along a
//! [`Dimension`], and the metrics layer turns buckets into [`SegmentSummary`] and
//! [`PeriodSummary`] rows.

use std::fmt;

use serde::Serialize;

use crate::error::MetricsError;

/// The five fixed input columns, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Product,
    Quantity,
    Amount,
    Region,
}

impl Column {
    /// Number of columns every data row must have.
    pub const COUNT: usize = 5;

    /// All columns in file order.
    pub const ALL: [Column; Column::COUNT] = [
        Column::Date,
        Column::Product,
        Column::Quantity,
        Column::Amount,
        Column::Region,
    ];

    /// Zero-based position of the column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase column name used in messages and exports.
    pub fn name(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Product => "product",
            Column::Quantity => "quantity",
            Column::Amount => "amount",
            Column::Region => "region",
        }
    }
}

/// One validated transaction row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    /// Opaque date token. Ordered lexicographically, never parsed.
    pub date: String,
    pub product: String,
    pub quantity: u64,
    pub amount: f64,
    pub region: String,
}

impl SalesRecord {
    /// Create a record.
    pub fn new(
        date: impl Into<String>,
        product: impl Into<String>,
        quantity: u64,
        amount: f64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            product: product.into(),
            quantity,
            amount,
            region: region.into(),
        }
    }
}

/// Axis along which records are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Product,
    Region,
    Date,
}

impl Dimension {
    /// Cross-sectional dimensions carry a market share; the date dimension carries growth.
    pub fn is_time_series(self) -> bool {
        matches!(self, Dimension::Date)
    }

    /// Returns the key `record` is grouped under for this dimension.
    pub fn key_of(self, record: &SalesRecord) -> &str {
        match self {
            Dimension::Product => &record.product,
            Dimension::Region => &record.region,
            Dimension::Date => &record.date,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dimension::Product => "product",
            Dimension::Region => "region",
            Dimension::Date => "date",
        };
        f.write_str(s)
    }
}

/// Running totals for one key within one dimension.
///
/// Buckets are only created by [`Bucket::from_record`], so `record_count` is never zero.
/// Quantities are summed as `u128`, which cannot overflow for any number of `u64` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub total_quantity: u128,
    pub total_amount: f64,
    pub record_count: usize,
}

impl Bucket {
    /// Start a bucket from its first matching record.
    pub fn from_record(record: &SalesRecord) -> Self {
        Self {
            total_quantity: u128::from(record.quantity),
            total_amount: record.amount,
            record_count: 1,
        }
    }

    /// Fold another matching record into the totals.
    pub fn add(&mut self, record: &SalesRecord) {
        self.total_quantity += u128::from(record.quantity);
        self.total_amount += record.amount;
        self.record_count += 1;
    }

    /// Mean amount per record.
    pub fn average_amount(&self) -> f64 {
        self.total_amount / self.record_count as f64
    }
}

/// Enriched product or region row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    pub key: String,
    pub total_quantity: u128,
    pub total_amount: f64,
    pub record_count: usize,
    pub average_amount: f64,
    /// Percentage of the dimension's grand total amount.
    pub market_share: f64,
}

/// Enriched date row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub key: String,
    pub total_quantity: u128,
    pub total_amount: f64,
    pub record_count: usize,
    pub average_amount: f64,
    /// Change against the chronologically previous period.
    pub growth: Growth,
}

/// Period-over-period change in amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Growth {
    /// First period in chronological order; there is nothing to compare against.
    Baseline,
    /// Percentage change against the previous period.
    Percent(f64),
    /// The previous period's amount was zero.
    Undefined,
}

impl Growth {
    /// Numeric percentage, if one exists.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Growth::Percent(p) => Some(*p),
            Growth::Baseline | Growth::Undefined => None,
        }
    }

    /// The underlying computation result, or `None` for the baseline entry.
    pub fn as_result(&self) -> Option<Result<f64, MetricsError>> {
        match self {
            Growth::Baseline => None,
            Growth::Percent(p) => Some(Ok(*p)),
            Growth::Undefined => Some(Err(MetricsError::UndefinedGrowth)),
        }
    }
}

impl From<Result<f64, MetricsError>> for Growth {
    fn from(result: Result<f64, MetricsError>) -> Self {
        match result {
            Ok(p) => Growth::Percent(p),
            Err(MetricsError::UndefinedGrowth) => Growth::Undefined,
        }
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Growth::Baseline => f.write_str("-"),
            Growth::Undefined => f.write_str("n/a"),
            Growth::Percent(p) => {
                // Sign follows the displayed (rounded) value.
                let rounded = (p * 10.0).round() / 10.0;
                if rounded > 0.0 {
                    write!(f, "+{rounded:.1}%")
                } else if rounded < 0.0 {
                    write!(f, "{rounded:.1}%")
                } else {
                    f.write_str("0.0%")
                }
            }
        }
    }
}

/// A single period picked out by the trend summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodExtreme {
    pub key: String,
    pub total_amount: f64,
}

/// Whole-run view over the date dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Growth from the first to the last period; `None` with fewer than two periods.
    pub overall_growth: Option<Growth>,
    pub best_period: Option<PeriodExtreme>,
    pub worst_period: Option<PeriodExtreme>,
}

/// Grand totals across every valid record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_amount: f64,
    pub total_quantity: u128,
    pub record_count: usize,
    /// Zero when there are no records.
    pub average_order_amount: f64,
}
