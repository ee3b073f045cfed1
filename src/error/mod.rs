//! Error types for bufsplit.

use thiserror::Error;

/// Errors that can occur while partitioning, splitting or tokenizing.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred in one of the `io` helpers.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A count or other argument was out of range.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A quoted field was still open when the line ended (strict policy only).
    #[error("malformed record: unterminated quote opened at byte {position}")]
    MalformedRecord {
        /// Offset of the opening quote within the line.
        position: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
