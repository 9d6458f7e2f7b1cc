//! Cross-cutting error types.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors raised while validating caller-supplied data.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A field holds a value outside its allowed range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// Two fields hold values that contradict each other.
    #[error("Validation error: {0}")]
    Validation(String),
}
