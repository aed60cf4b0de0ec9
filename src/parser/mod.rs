//! Trace parsing and data model.
//!
//! This module handles:
//! - Locating trace files in profiler output directories
//! - Scanning cachegrind traces into per-function aggregates
//! - Defining the aggregate data model

pub mod cachegrind;
pub mod discovery;
pub mod schema;

// Re-export main types
pub use cachegrind::{parse_trace, parse_trace_file};
pub use discovery::{find_trace_files, latest_trace_file};
pub use schema::{FunctionRecord, TraceAggregate};
