//! Error handling for unique value generation

use thiserror::Error;

/// Unique-generation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UniqueError {
    /// Generated values must have a positive length
    #[error("Invalid length: {0} (must be positive)")]
    InvalidLength(usize),

    /// The bounded retry loop gave up
    #[error("No unique value found after {attempts} attempts")]
    Exhausted {
        /// Number of candidates generated and rejected
        attempts: u64,
    },
}

/// Result type for unique generation
pub type Result<T> = std::result::Result<T, UniqueError>;
