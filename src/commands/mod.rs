//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;

// Re-export main command functions
pub use compare::{execute_compare, validate_args, CompareArgs};
