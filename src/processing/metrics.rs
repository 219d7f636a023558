//! Derived metrics over aggregated buckets.

use std::collections::HashMap;

use crate::error::MetricsError;
use crate::types::{Bucket, Growth, Overview, PeriodExtreme, PeriodSummary, SalesRecord, SegmentSummary, TrendSummary};

use super::rank;

/// Relative change from `previous` to `current`, in percent.
///
/// Fails with [`MetricsError::UndefinedGrowth`] when `previous` is zero or the change is not
/// finite, which happens once summed amounts overflow to infinity.
///
/// ```rust
/// use sales_analytics::processing::growth_rate;
///
/// assert_eq!(growth_rate(100.0, 150.0), Ok(50.0));
/// assert!(growth_rate(0.0, 150.0).is_err());
/// ```
pub fn growth_rate(previous: f64, current: f64) -> Result<f64, MetricsError> {
    if previous == 0.0 {
        return Err(MetricsError::UndefinedGrowth);
    }
    let rate = (current - previous) / previous * 100.0;
    if !rate.is_finite() {
        return Err(MetricsError::UndefinedGrowth);
    }
    Ok(rate)
}

/// `amount` as a percentage of `grand_total`.
///
/// Zero when `grand_total` is zero or the share is not finite (an overflowed total).
pub fn market_share(amount: f64, grand_total: f64) -> f64 {
    if grand_total == 0.0 {
        return 0.0;
    }
    let share = amount / grand_total * 100.0;
    if share.is_finite() {
        share
    } else {
        0.0
    }
}

/// Build product or region summaries, ranked by amount.
pub fn summarize_segments(buckets: &HashMap<String, Bucket>) -> Vec<SegmentSummary> {
    let grand_total: f64 = buckets.values().map(|b| b.total_amount).sum();

    let mut out: Vec<SegmentSummary> = buckets
        .iter()
        .map(|(key, b)| SegmentSummary {
            key: key.clone(),
            total_quantity: b.total_quantity,
            total_amount: b.total_amount,
            record_count: b.record_count,
            average_amount: b.average_amount(),
            market_share: market_share(b.total_amount, grand_total),
        })
        .collect();

    rank::rank_by_amount(&mut out);
    out
}

/// Build date summaries in chronological order, each with growth against its predecessor.
pub fn summarize_periods(buckets: &HashMap<String, Bucket>) -> Vec<PeriodSummary> {
    let mut out: Vec<PeriodSummary> = buckets
        .iter()
        .map(|(key, b)| PeriodSummary {
            key: key.clone(),
            total_quantity: b.total_quantity,
            total_amount: b.total_amount,
            record_count: b.record_count,
            average_amount: b.average_amount(),
            growth: Growth::Baseline,
        })
        .collect();

    rank::rank_chronologically(&mut out);

    for i in 1..out.len() {
        let previous = out[i - 1].total_amount;
        out[i].growth = growth_rate(previous, out[i].total_amount).into();
    }
    out
}

/// Trend over chronologically ordered periods.
///
/// Best and worst periods keep the earliest period on ties.
pub fn trend(periods: &[PeriodSummary]) -> TrendSummary {
    let overall_growth: Option<Growth> = match periods {
        [first, .., last] => Some(growth_rate(first.total_amount, last.total_amount).into()),
        _ => None,
    };

    let mut best: Option<&PeriodSummary> = None;
    let mut worst: Option<&PeriodSummary> = None;
    for p in periods {
        if best.is_none_or(|b| p.total_amount > b.total_amount) {
            best = Some(p);
        }
        if worst.is_none_or(|w| p.total_amount < w.total_amount) {
            worst = Some(p);
        }
    }

    let extreme = |p: &PeriodSummary| PeriodExtreme {
        key: p.key.clone(),
        total_amount: p.total_amount,
    };

    TrendSummary {
        overall_growth,
        best_period: best.map(extreme),
        worst_period: worst.map(extreme),
    }
}

/// Grand totals across all records.
pub fn overview(records: &[SalesRecord]) -> Overview {
    let total_amount: f64 = records.iter().map(|r| r.amount).sum();
    let total_quantity: u128 = records.iter().map(|r| u128::from(r.quantity)).sum();
    let record_count = records.len();
    let average_order_amount = if record_count == 0 {
        0.0
    } else {
        total_amount / record_count as f64
    };

    Overview {
        total_amount,
        total_quantity,
        record_count,
        average_order_amount,
    }
}
