//! Errors surfaced to callers of the display shell.
//!
//! Host-capability faults and degenerate geometry are absorbed where they
//! happen; only caller-supplied configuration errors propagate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A `start` configuration field is missing or out of range.
    #[error("invalid configuration: {field} must be a positive integer (got {value})")]
    InvalidConfiguration { field: &'static str, value: u32 },
}

pub type Result<T> = std::result::Result<T, ShellError>;
