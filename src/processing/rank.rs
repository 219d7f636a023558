//! Deterministic ordering of summaries.
//!
//! Aggregation returns unordered maps, so every ordering here has an explicit tie-break.

use std::cmp::Ordering;

use crate::types::{PeriodSummary, SegmentSummary};

/// A summary row that can be ranked.
pub trait Ranked {
    /// Dimension key (product, region or date token).
    fn key(&self) -> &str;
    /// Total amount for the key.
    fn total_amount(&self) -> f64;
}

impl Ranked for SegmentSummary {
    fn key(&self) -> &str {
        &self.key
    }

    fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

impl Ranked for PeriodSummary {
    fn key(&self) -> &str {
        &self.key
    }

    fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

/// Amount descending, then key ascending.
pub fn compare_by_amount<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.total_amount()
        .total_cmp(&a.total_amount())
        .then_with(|| a.key().cmp(b.key()))
}

/// Order product or region summaries for presentation.
pub fn rank_by_amount<T: Ranked>(summaries: &mut [T]) {
    summaries.sort_by(compare_by_amount);
}

/// Order date summaries by their token.
///
/// Tokens are compared as plain strings, so only formats whose lexicographic order matches
/// chronological order (such as ISO `YYYY-MM-DD`) sort correctly.
pub fn rank_chronologically<T: Ranked>(summaries: &mut [T]) {
    summaries.sort_by(|a, b| a.key().cmp(b.key()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(key: &str, amount: f64) -> SegmentSummary {
        SegmentSummary {
            key: key.to_string(),
            total_quantity: 1,
            total_amount: amount,
            record_count: 1,
            average_amount: amount,
            market_share: 0.0,
        }
    }

    fn keys(s: &[SegmentSummary]) -> Vec<&str> {
        s.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn rank_by_amount_is_descending_with_key_tie_break() {
        let mut s = vec![seg("b", 10.0), seg("c", 50.0), seg("a", 10.0), seg("d", 0.0)];
        rank_by_amount(&mut s);
        assert_eq!(keys(&s), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn rank_by_amount_does_not_depend_on_input_order() {
        let mut x = vec![seg("n", 5.0), seg("m", 5.0), seg("o", 7.0)];
        let mut y = x.clone();
        y.reverse();
        rank_by_amount(&mut x);
        rank_by_amount(&mut y);
        assert_eq!(x, y);
    }

    #[test]
    fn chronological_order_is_lexicographic() {
        let mut s = vec![seg("2024-02-01", 1.0), seg("2023-12-31", 9.0), seg("2024-01-15", 5.0)];
        rank_chronologically(&mut s);
        assert_eq!(keys(&s), vec!["2023-12-31", "2024-01-15", "2024-02-01"]);

        // Non-ISO tokens sort as strings, not as calendar dates.
        let mut s = vec![seg("12/01/2023", 1.0), seg("01/15/2024", 1.0)];
        rank_chronologically(&mut s);
        assert_eq!(keys(&s), vec!["01/15/2024", "12/01/2023"]);
    }
}
