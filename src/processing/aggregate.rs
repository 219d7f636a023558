//! Dimensional aggregation of [`crate::types::SalesRecord`]s.

use std::collections::HashMap;

use crate::types::{Bucket, Dimension, SalesRecord};

/// Fold `records` into one [`Bucket`] per distinct key of `dimension`.
///
/// Iteration order of the returned map is unspecified; use [`super::rank`] to order results.
pub fn aggregate(records: &[SalesRecord], dimension: Dimension) -> HashMap<String, Bucket> {
    let mut buckets: HashMap<String, Bucket> = HashMap::new();
    for record in records {
        let key = dimension.key_of(record);
        match buckets.get_mut(key) {
            Some(bucket) => bucket.add(record),
            None => {
                buckets.insert(key.to_owned(), Bucket::from_record(record));
            }
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use crate::types::{Dimension, SalesRecord};

    fn sample_records() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new("2024-01-01", "Widget", 10, 100.0, "North"),
            SalesRecord::new("2024-01-01", "Gadget", 5, 50.0, "South"),
            SalesRecord::new("2024-01-02", "Widget", 20, 200.0, "North"),
        ]
    }

    #[test]
    fn aggregate_by_product_sums_matching_records() {
        let buckets = aggregate(&sample_records(), Dimension::Product);
        assert_eq!(buckets.len(), 2);

        let widget = &buckets["Widget"];
        assert_eq!(widget.total_quantity, 30);
        assert_eq!(widget.total_amount, 300.0);
        assert_eq!(widget.record_count, 2);

        let gadget = &buckets["Gadget"];
        assert_eq!(gadget.total_quantity, 5);
        assert_eq!(gadget.record_count, 1);
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket_per_dimension() {
        let records = sample_records();
        let amount: f64 = records.iter().map(|r| r.amount).sum();
        let quantity: u128 = records.iter().map(|r| u128::from(r.quantity)).sum();

        for dim in [Dimension::Product, Dimension::Region, Dimension::Date] {
            let buckets = aggregate(&records, dim);
            let count: usize = buckets.values().map(|b| b.record_count).sum();
            let q: u128 = buckets.values().map(|b| b.total_quantity).sum();
            let a: f64 = buckets.values().map(|b| b.total_amount).sum();
            assert_eq!(count, records.len(), "{dim}");
            assert_eq!(q, quantity, "{dim}");
            assert!((a - amount).abs() < 1e-9, "{dim}");
        }
    }

    #[test]
    fn aggregation_is_order_independent() {
        let records = sample_records();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(
            aggregate(&records, Dimension::Date),
            aggregate(&reversed, Dimension::Date)
        );
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(aggregate(&[], Dimension::Region).is_empty());
    }
}
