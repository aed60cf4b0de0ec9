//! Configuration and constants for the CLI.

/// Default directory holding v2 profiler output
pub const DEFAULT_V2_DIR: &str = "v2/profiler_output";

/// Default directory holding v3 profiler output
pub const DEFAULT_V3_DIR: &str = "v3/profiler_output";

/// Every trace file name starts with this prefix (glob `cachegrind.out.*`)
pub const TRACE_FILE_PREFIX: &str = "cachegrind.out.";

// Line markers in the trace format
pub const FUNCTION_MARKER: &str = "fn=";
pub const CALLS_MARKER: &str = "calls=";

/// Default number of entries returned by a top-functions query
pub const DEFAULT_TOP_FUNCTIONS: usize = 20;

// Per-bucket report limits
pub const CONFIG_REPORT_LIMIT: usize = 5;
pub const JSON_REPORT_LIMIT: usize = 3;
pub const STRING_REPORT_LIMIT: usize = 3;

// Bucket keywords. The configuration marker is matched case-sensitively,
// the keyword lists against the lowercased name.
pub const CONFIGURATION_MARKER: &str = "Configuration";
pub const JSON_KEYWORDS: &[&str] = &["json", "serialize"];
pub const STRING_KEYWORDS: &[&str] = &["string", "case", "camel", "snake"];

/// Width of the `=` rule under the report title
pub const TITLE_RULE_WIDTH: usize = 50;
