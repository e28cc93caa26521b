//! Error handling for hashing operations

use thiserror::Error;

/// Hashing-specific errors
///
/// Every fallible hashing operation reports one of these instead of returning a
/// partial hash value.
#[derive(Debug, Error)]
pub enum HashError {
    /// The requested algorithm is unknown or cannot be used in this role
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A caller-supplied parameter is out of its valid domain
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The `offset`/`length` pair does not lie inside the input buffer
    #[error("Invalid range: offset {offset} + length {length} exceeds {available} available bytes")]
    InvalidRange {
        /// Requested start of the range
        offset: usize,
        /// Requested number of bytes
        length: usize,
        /// Size of the buffer the range was applied to
        available: usize,
    },

    /// Input bytes could not be decoded as text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The key-derivation provider rejected its inputs
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Reading the input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
