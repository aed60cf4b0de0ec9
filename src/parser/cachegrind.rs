//! Cachegrind trace parser.
//!
//! Single sequential scan over the trace lines. The only state carried
//! between lines is the active function context:
//! - `fn=<name>` activates (and on first sight creates) a function record
//! - a line starting with a digit is a cost line; field 1 is the cost
//! - `calls=<count> ...` adds to the active function's call count
//!
//! Everything else is ignored, as are cost/call lines seen before the
//! first `fn=` line.

use super::schema::{AggregateBuilder, TraceAggregate};
use crate::utils::config::{CALLS_MARKER, FUNCTION_MARKER};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Classified trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceLine<'a> {
    Function(&'a str),
    Cost(&'a str),
    Calls(&'a str),
    Other,
}

/// Parse a trace file from disk
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::Open` - File missing or unreadable
/// * `ParseError::Read` - I/O failure mid-file (including invalid UTF-8)
/// * `ParseError::InvalidCost` / `ParseError::InvalidCalls` - Non-numeric field
pub fn parse_trace_file(path: impl AsRef<Path>) -> Result<TraceAggregate, ParseError> {
    let path = path.as_ref();
    debug!("Parsing trace file: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_trace(BufReader::new(file))
}

/// Parse trace data from any buffered reader
///
/// **Public** - used by `parse_trace_file` and handy for in-memory data
pub fn parse_trace<R: BufRead>(reader: R) -> Result<TraceAggregate, ParseError> {
    let mut builder = AggregateBuilder::new();
    let mut current: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        match classify_line(line.trim()) {
            TraceLine::Function(name) => {
                // An empty name still gets a record but is not an active context
                let slot = builder.enter_function(name);
                current = (!name.is_empty()).then_some(slot);
            }
            TraceLine::Cost(rest) => {
                let Some(slot) = current else { continue };
                if let Some(cost) = parse_cost(rest, line_no)? {
                    builder.add_cost(slot, cost);
                }
            }
            TraceLine::Calls(rest) => {
                let Some(slot) = current else { continue };
                builder.add_calls(slot, parse_calls(rest, line_no)?);
            }
            TraceLine::Other => {}
        }
    }

    let trace = builder.finish();
    debug!(
        "Parsed {} functions, total cost {}",
        trace.len(),
        trace.total_time()
    );

    Ok(trace)
}

/// Decide what a trimmed line is
///
/// **Private** - `fn=` wins over the digit test, which wins over `calls=`
fn classify_line(line: &str) -> TraceLine<'_> {
    if let Some(name) = line.strip_prefix(FUNCTION_MARKER) {
        TraceLine::Function(name)
    } else if line.starts_with(|c: char| c.is_ascii_digit()) {
        TraceLine::Cost(line)
    } else if let Some(rest) = line.strip_prefix(CALLS_MARKER) {
        TraceLine::Calls(rest)
    } else {
        TraceLine::Other
    }
}

/// Cost is the second whitespace field. Lines with fewer fields carry no cost.
fn parse_cost(line: &str, line_no: usize) -> Result<Option<u64>, ParseError> {
    let Some(field) = line.split_whitespace().nth(1) else {
        return Ok(None);
    };

    field
        .parse::<u64>()
        .map(Some)
        .map_err(|source| ParseError::InvalidCost {
            line: line_no,
            value: field.to_string(),
            source,
        })
}

/// Count is the first token after `calls=`; callgrind appends a target position.
fn parse_calls(rest: &str, line_no: usize) -> Result<u64, ParseError> {
    let field = rest.split_whitespace().next().unwrap_or("");

    field.parse::<u64>().map_err(|source| ParseError::InvalidCalls {
        line: line_no,
        value: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("fn=main"), TraceLine::Function("main"));
        assert_eq!(classify_line("fn="), TraceLine::Function(""));
        assert_eq!(classify_line("12 400"), TraceLine::Cost("12 400"));
        assert_eq!(classify_line("calls=3 18"), TraceLine::Calls("3 18"));
        assert_eq!(classify_line("cfn=callee"), TraceLine::Other);
        assert_eq!(classify_line("events: Time"), TraceLine::Other);
        assert_eq!(classify_line(""), TraceLine::Other);
    }

    #[test]
    fn test_parse_cost_short_line() {
        assert_eq!(parse_cost("42", 1).unwrap(), None);
        assert_eq!(parse_cost("42 7 9", 1).unwrap(), Some(7));
    }

    #[test]
    fn test_parse_cost_invalid() {
        let err = parse_cost("42 abc", 9).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCost { line: 9, .. }));
    }

    #[test]
    fn test_parse_calls() {
        assert_eq!(parse_calls("5", 1).unwrap(), 5);
        assert_eq!(parse_calls("5 16", 1).unwrap(), 5);
        assert!(matches!(
            parse_calls("", 4),
            Err(ParseError::InvalidCalls { line: 4, .. })
        ));
    }

    #[test]
    fn test_lines_before_first_function_ignored() {
        let data = "1 500\ncalls=3\nfn=main\n2 10\n";
        let trace = parse_trace(data.as_bytes()).unwrap();
        assert_eq!(trace.total_time(), 10);
        assert_eq!(trace.get("main").unwrap().calls, 0);
    }

    #[test]
    fn test_empty_function_name_is_not_a_context() {
        let data = "fn=main\n1 10\nfn=\ncalls=4\n1 90\n";
        let trace = parse_trace(data.as_bytes()).unwrap();

        assert_eq!(trace.total_time(), 10);
        assert_eq!(trace.get("main").unwrap().percentage, 100.0);

        let unnamed = trace.get("").unwrap();
        assert_eq!(unnamed.calls, 0);
        assert_eq!(unnamed.time, 0);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let data = "  fn=padded  \n   3 25\n\tcalls=2\n";
        let trace = parse_trace(data.as_bytes()).unwrap();
        let record = trace.get("padded").unwrap();
        assert_eq!(record.time, 25);
        assert_eq!(record.calls, 2);
    }
}
