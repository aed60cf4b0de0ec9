//! Cross-version comparison of two trace aggregates.

use super::metrics::bucket_stats;
use crate::parser::schema::TraceAggregate;

/// Headline numbers comparing a v2 trace against a v3 trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionComparison {
    pub v2_config_percentage: f64,
    pub v3_config_percentage: f64,

    /// Relative drop in configuration share, `None` if either share is 0
    pub config_improvement: Option<f64>,

    pub v2_total_time: u64,
    pub v3_total_time: u64,

    /// Relative drop in total cost, `None` if either total is 0
    pub total_improvement: Option<f64>,
}

/// `(before - after) / before * 100`, positive when `after` is smaller
///
/// Returns `None` unless both values are positive.
pub fn relative_improvement(before: f64, after: f64) -> Option<f64> {
    if before > 0.0 && after > 0.0 {
        Some((before - after) / before * 100.0)
    } else {
        None
    }
}

/// Compare configuration share and total cost between versions
pub fn compare_versions(v2: &TraceAggregate, v3: &TraceAggregate) -> VersionComparison {
    let v2_config = bucket_stats(&v2.categorize().configuration, v2.total_time());
    let v3_config = bucket_stats(&v3.categorize().configuration, v3.total_time());

    VersionComparison {
        v2_config_percentage: v2_config.percentage,
        v3_config_percentage: v3_config.percentage,
        config_improvement: relative_improvement(v2_config.percentage, v3_config.percentage),
        v2_total_time: v2.total_time(),
        v3_total_time: v3.total_time(),
        total_improvement: relative_improvement(v2.total_time() as f64, v3.total_time() as f64),
    }
}
