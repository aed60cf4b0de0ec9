//! Aggregation of parsed traces into buckets, rankings and comparisons.
//!
//! This module turns a `TraceAggregate` into:
//! - Name-based buckets (configuration / json / string)
//! - Top-N rankings and bucket totals
//! - A v2 vs v3 comparison

pub mod categories;
pub mod comparison;
pub mod metrics;

// Re-export main types and functions
pub use categories::{classify, categorize, CategorizedFunctions, Category};
pub use comparison::{compare_versions, relative_improvement, VersionComparison};
pub use metrics::{bucket_stats, percentage_of, top_by_calls, top_by_time, BucketStats};
