//! Shared error type.
//!
//! Sub-crates define their own error enums for failure modes of their own
//! (`SmokersError`, `SimError`, …); settings validation everywhere returns
//! `SyncError`.

use thiserror::Error;

/// The error type for settings validation and value parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what:  &'static str,
        value: u64,
        min:   u64,
        max:   u64,
    },

    #[error("invalid {what}: {value}")]
    InvalidValue {
        what:  &'static str,
        value: String,
    },
}

/// Shorthand result type for settings operations.
pub type SyncResult<T> = Result<T, SyncError>;
