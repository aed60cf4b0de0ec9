//! Compare command implementation.
//!
//! The compare command:
//! 1. Locates trace files in both directories
//! 2. Parses the latest trace of each version
//! 3. Prints a bucket breakdown per version
//! 4. Prints the v2 vs v3 comparison

use crate::aggregator::compare_versions;
use crate::output::{render_comparison, render_top_functions, render_version_analysis};
use crate::parser::{find_trace_files, latest_trace_file, parse_trace_file, TraceAggregate};
use crate::utils::config::{DEFAULT_V2_DIR, DEFAULT_V3_DIR, TITLE_RULE_WIDTH};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Directory with v2 profiler output
    pub v2_dir: PathBuf,

    /// Directory with v3 profiler output
    pub v3_dir: PathBuf,

    /// Also list the overall top N functions per version
    pub top_functions: Option<usize>,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            v2_dir: PathBuf::from(DEFAULT_V2_DIR),
            v3_dir: PathBuf::from(DEFAULT_V3_DIR),
            top_functions: None,
        }
    }
}

/// Validate compare arguments
///
/// **Public** - called before execution
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.v2_dir.as_os_str().is_empty() {
        bail!("v2 directory cannot be empty");
    }

    if args.v3_dir.as_os_str().is_empty() {
        bail!("v3 directory cannot be empty");
    }

    if args.top_functions == Some(0) {
        bail!("--top must be at least 1");
    }

    Ok(())
}

/// Execute the compare command, writing the report to `out`
///
/// **Public** - main entry point called from main.rs
///
/// Missing trace files are reported in the output and are not an error.
///
/// # Errors
/// * Directory listing failures
/// * Trace file open/read failures
/// * Malformed cost or call fields
/// * Write failures on `out`
pub fn execute_compare<W: Write>(args: &CompareArgs, out: &mut W) -> Result<()> {
    writeln!(out, "🔍 Cloudinary SDK Performance Analysis")?;
    writeln!(out, "{}", "=".repeat(TITLE_RULE_WIDTH))?;

    // v3 is only searched once v2 is known to have traces
    let v2_files = find_trace_files(&args.v2_dir)
        .with_context(|| format!("Failed to search {}", args.v2_dir.display()))?;
    let Some(v2_latest) = latest_trace_file(&v2_files) else {
        return write_no_traces(out, &args.v2_dir);
    };

    let v3_files = find_trace_files(&args.v3_dir)
        .with_context(|| format!("Failed to search {}", args.v3_dir.display()))?;
    let Some(v3_latest) = latest_trace_file(&v3_files) else {
        return write_no_traces(out, &args.v3_dir);
    };

    writeln!(
        out,
        "📊 Analyzing {} v2 files and {} v3 files",
        v2_files.len(),
        v3_files.len()
    )?;
    writeln!(out)?;

    let v2_trace = load_trace(v2_latest, "v2")?;
    let v3_trace = load_trace(v3_latest, "v3")?;

    write_version_section(out, &v2_trace, "v2", args.top_functions, false)?;
    write_version_section(out, &v3_trace, "v3", args.top_functions, true)?;

    writeln!(out, "\n📊 **COMPARATIVE ANALYSIS**")?;
    writeln!(out, "{}", "-".repeat(40))?;
    let comparison = compare_versions(&v2_trace, &v3_trace);
    write!(out, "{}", render_comparison(&comparison))?;

    Ok(())
}

fn write_no_traces<W: Write>(out: &mut W, dir: &Path) -> Result<()> {
    writeln!(out, "❌ No cachegrind files found in {}", dir.display())?;
    Ok(())
}

/// Parse one version's latest trace
///
/// **Private** - logs which file was picked
fn load_trace(path: &Path, label: &str) -> Result<TraceAggregate> {
    info!(
        "Analyzing latest {} trace: {} ({})",
        label,
        path.display(),
        describe_modified(path)
    );

    let trace = parse_trace_file(path)
        .with_context(|| format!("Failed to parse {} trace {}", label, path.display()))?;

    debug!(
        "{}: {} functions, {} total cost, {} total calls",
        label,
        trace.len(),
        trace.total_time(),
        trace.total_calls()
    );

    Ok(trace)
}

fn write_version_section<W: Write>(
    out: &mut W,
    trace: &TraceAggregate,
    label: &str,
    top_functions: Option<usize>,
    leading_blank: bool,
) -> Result<()> {
    if leading_blank {
        writeln!(out)?;
    }
    writeln!(out, "🚀 **{} SDK ANALYSIS**", label.to_uppercase())?;
    writeln!(out, "{}", "-".repeat(30))?;
    write!(out, "{}", render_version_analysis(trace, label))?;

    if let Some(limit) = top_functions {
        write!(out, "{}", render_top_functions(trace, label, limit))?;
    }

    Ok(())
}

/// Human-readable modification time, for logging only
fn describe_modified(path: &Path) -> String {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => {
            let time: DateTime<Local> = time.into();
            format!("modified {}", time.format("%Y-%m-%d %H:%M:%S"))
        }
        Err(_) => "modification time unknown".to_string(),
    }
}
