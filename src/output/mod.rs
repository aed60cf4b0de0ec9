//! Text output for analysis reports.
//!
//! This module renders:
//! - Per-version bucket breakdowns
//! - Top-N hotspot listings
//! - The v2 vs v3 comparison

pub mod report;

// Re-export main functions
pub use report::{
    format_thousands, render_comparison, render_top_functions, render_version_analysis,
};
