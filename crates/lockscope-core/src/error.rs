//! Shared error type across lockscope crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, LockScopeError>;

/// Unified error type used by core and collector.
#[derive(Debug, Error)]
pub enum LockScopeError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("query failed: {0}")]
    Query(String),
    #[error("metrics already bound")]
    AlreadyBound,
    #[error("internal: {0}")]
    Internal(String),
}

impl LockScopeError {
    /// Stable short code, usable as a log field or metric tag.
    pub fn code(&self) -> &'static str {
        match self {
            LockScopeError::BadConfig(_) => "BAD_CONFIG",
            LockScopeError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            LockScopeError::Query(_) => "QUERY_FAILED",
            LockScopeError::AlreadyBound => "ALREADY_BOUND",
            LockScopeError::Internal(_) => "INTERNAL",
        }
    }
}
