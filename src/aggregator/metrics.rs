//! Summary statistics over function records.
//!
//! All rankings use a stable sort so equal values keep first-seen order.

use crate::parser::schema::FunctionRecord;

/// `part` as a percentage of `total`, 0.0 when `total` is 0
pub fn percentage_of(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Top `n` records by time, descending
pub fn top_by_time<'a>(records: &[&'a FunctionRecord], n: usize) -> Vec<&'a FunctionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.time.cmp(&a.time));
    sorted.truncate(n);
    sorted
}

/// Top `n` records by call count, descending
pub fn top_by_calls<'a>(records: &[&'a FunctionRecord], n: usize) -> Vec<&'a FunctionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.calls.cmp(&a.calls));
    sorted.truncate(n);
    sorted
}

/// Totals for a group of functions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BucketStats {
    /// Sum of time over the group
    pub total_time: u64,

    /// Sum of calls over the group
    pub total_calls: u64,

    /// Group time as a share of the trace total
    pub percentage: f64,
}

/// Sum a group of records against the trace's total time
pub fn bucket_stats(records: &[&FunctionRecord], trace_total: u64) -> BucketStats {
    let total_time = records.iter().map(|r| r.time).sum();
    let total_calls = records.iter().map(|r| r.calls).sum();

    BucketStats {
        total_time,
        total_calls,
        percentage: percentage_of(total_time, trace_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, calls: u64, time: u64) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            calls,
            time,
            percentage: 0.0,
        }
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(25, 100), 25.0);
        assert_eq!(percentage_of(25, 0), 0.0);
        assert_eq!(percentage_of(0, 0), 0.0);
    }

    #[test]
    fn test_top_by_time_stable_ties() {
        let a = record("a", 0, 10);
        let b = record("b", 0, 30);
        let c = record("c", 0, 10);
        let top = top_by_time(&[&a, &b, &c], 3);

        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_by_calls_truncates() {
        let a = record("a", 1, 0);
        let b = record("b", 9, 0);
        let c = record("c", 5, 0);
        let top = top_by_calls(&[&a, &b, &c], 2);

        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_bucket_stats() {
        let a = record("a", 3, 20);
        let b = record("b", 4, 30);
        let stats = bucket_stats(&[&a, &b], 200);

        assert_eq!(stats.total_time, 50);
        assert_eq!(stats.total_calls, 7);
        assert_eq!(stats.percentage, 25.0);
    }

    #[test]
    fn test_bucket_stats_empty() {
        assert_eq!(bucket_stats(&[], 100), BucketStats::default());
    }
}
