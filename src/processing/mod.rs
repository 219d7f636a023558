//! Aggregation, metrics and ranking over ingested records.
//!
//! The processing layer operates on [`crate::types::SalesRecord`] slices produced by ingestion.
//! It is purely in-memory and single-threaded.
//!
//! - [`aggregate()`]: fold records into per-key buckets along one [`crate::types::Dimension`]
//! - [`metrics`]: averages, market share, growth, trend and overview
//! - [`rank`]: deterministic ordering (amount descending, or date token ascending)
//!
//! ## Example: aggregate → summarize
//!
//! ```rust
//! use sales_analytics::processing::{aggregate, summarize_periods, summarize_segments};
//! use sales_analytics::types::{Dimension, Growth, SalesRecord};
//!
//! let records = vec![
//!     SalesRecord::new("2024-01-01", "Widget", 10, 100.0, "North"),
//!     SalesRecord::new("2024-01-01", "Gadget", 5, 50.0, "South"),
//!     SalesRecord::new("2024-01-02", "Widget", 20, 200.0, "North"),
//! ];
//!
//! let products = summarize_segments(&aggregate(&records, Dimension::Product));
//! assert_eq!(products[0].key, "Widget");
//! assert_eq!(products[0].average_amount, 150.0);
//!
//! let days = summarize_periods(&aggregate(&records, Dimension::Date));
//! assert_eq!(days[0].growth, Growth::Baseline);
//! assert_eq!(days[1].growth.to_string(), "+33.3%");
//! ```

pub mod aggregate;
pub mod metrics;
pub mod rank;

pub use aggregate::aggregate;
pub use metrics::{growth_rate, market_share, overview, summarize_periods, summarize_segments, trend};
pub use rank::{rank_by_amount, rank_chronologically, Ranked};
