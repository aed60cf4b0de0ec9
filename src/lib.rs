//! Cachegrind Compare
//!
//! Parses cachegrind trace files into per-function cost aggregates and
//! renders a side-by-side report for two SDK versions ("v2" and "v3").
//!
//! This crate provides the core implementation for the
//! `cachegrind-compare` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install cachegrind-compare
//! cachegrind-compare --v2-dir v2/profiler_output --v3-dir v3/profiler_output
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
