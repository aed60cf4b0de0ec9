//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a trace file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open trace file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read trace data: {0}")]
    Read(#[from] std::io::Error),

    #[error("Line {line}: invalid cost value '{value}': {source}")]
    InvalidCost {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Line {line}: invalid call count '{value}': {source}")]
    InvalidCalls {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors that can occur while locating trace files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
