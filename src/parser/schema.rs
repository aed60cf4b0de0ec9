//! Data model for a parsed trace.
//!
//! A `TraceAggregate` is built once per trace file by the parser and is
//! read-only afterwards. Records keep the order in which their `fn=` line
//! first appeared, which is what breaks ties in every ranking query.

use crate::aggregator::categories::{categorize, CategorizedFunctions};
use crate::aggregator::metrics::{percentage_of, top_by_time};
use std::collections::HashMap;

/// Accumulated cost for one function
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionRecord {
    /// Function name as written after `fn=`
    pub name: String,

    /// Sum of all `calls=` counts seen in this function's context
    pub calls: u64,

    /// Sum of all cost lines seen in this function's context
    pub time: u64,

    /// Share of the trace's total time (0.0 when the trace total is 0)
    pub percentage: f64,
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: 0,
            time: 0,
            percentage: 0.0,
        }
    }
}

/// Per-function cost of a single trace file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraceAggregate {
    functions: Vec<FunctionRecord>,
    index: HashMap<String, usize>,
    total_time: u64,
}

impl TraceAggregate {
    /// All records in first-seen order
    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    /// Look up a record by function name
    pub fn get(&self, name: &str) -> Option<&FunctionRecord> {
        self.index.get(name).map(|&i| &self.functions[i])
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Sum of every cost line attributed to a function
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    pub fn total_calls(&self) -> u64 {
        self.functions.iter().map(|f| f.calls).sum()
    }

    /// Top `limit` functions by time, descending, ties in first-seen order
    ///
    /// Returns every function when `limit` exceeds the function count.
    pub fn top_functions(&self, limit: usize) -> Vec<&FunctionRecord> {
        let all: Vec<&FunctionRecord> = self.functions.iter().collect();
        top_by_time(&all, limit)
    }

    /// Split functions into the configuration / json / string buckets
    pub fn categorize(&self) -> CategorizedFunctions<'_> {
        categorize(&self.functions)
    }
}

/// Mutable builder used by the parser while scanning a file
///
/// **Crate-internal** - only the parser creates aggregates.
#[derive(Debug, Default)]
pub(crate) struct AggregateBuilder {
    inner: TraceAggregate,
}

impl AggregateBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Activate a function context, creating an empty record on first sight.
    /// Returns the record's slot for subsequent cost/call lines.
    pub(crate) fn enter_function(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.inner.index.get(name) {
            return slot;
        }
        let slot = self.inner.functions.len();
        self.inner.functions.push(FunctionRecord::new(name));
        self.inner.index.insert(name.to_string(), slot);
        slot
    }

    pub(crate) fn add_cost(&mut self, slot: usize, cost: u64) {
        let record = &mut self.inner.functions[slot];
        record.time = record.time.saturating_add(cost);
        self.inner.total_time = self.inner.total_time.saturating_add(cost);
    }

    pub(crate) fn add_calls(&mut self, slot: usize, calls: u64) {
        let record = &mut self.inner.functions[slot];
        record.calls = record.calls.saturating_add(calls);
    }

    /// Derive percentages and hand out the finished aggregate
    pub(crate) fn finish(mut self) -> TraceAggregate {
        let total = self.inner.total_time;
        for record in &mut self.inner.functions {
            record.percentage = percentage_of(record.time, total);
        }
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TraceAggregate {
        let mut builder = AggregateBuilder::new();
        let a = builder.enter_function("alpha");
        builder.add_cost(a, 30);
        builder.add_calls(a, 2);
        let b = builder.enter_function("beta");
        builder.add_cost(b, 70);
        let again = builder.enter_function("alpha");
        builder.add_cost(again, 0);
        builder.finish()
    }

    #[test]
    fn test_reentering_function_reuses_record() {
        let trace = sample();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get("alpha").unwrap().time, 30);
        assert_eq!(trace.get("alpha").unwrap().calls, 2);
    }

    #[test]
    fn test_percentages_derived_on_finish() {
        let trace = sample();
        assert_eq!(trace.total_time(), 100);
        assert_eq!(trace.get("alpha").unwrap().percentage, 30.0);
        assert_eq!(trace.get("beta").unwrap().percentage, 70.0);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let mut builder = AggregateBuilder::new();
        builder.enter_function("idle");
        let trace = builder.finish();
        assert_eq!(trace.total_time(), 0);
        assert_eq!(trace.get("idle").unwrap().percentage, 0.0);
    }

    #[test]
    fn test_top_functions_orders_by_time() {
        let trace = sample();
        let top = trace.top_functions(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "beta");
    }
}
