//! Error types for pagination operations

use thiserror::Error;

/// Error type for pagination operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// An argument was outside its documented domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be parsed or failed validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Output could not be encoded for the host
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl PaginationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;
