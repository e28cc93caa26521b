//! Uniform, swappable cryptographic hashing
//!
//! One-shot digests, incremental digests and salted iterative hashes all
//! produce comparable, persistable hash values:
//!
//! ```
//! use hashkit_hashing::{HashBuilder, HashMasterBuilder};
//!
//! let mut sha = HashMasterBuilder.sha256();
//! let a = sha.hash_str("hello").unwrap();
//! let b = sha.hash_str("hello").unwrap();
//! assert_eq!(a, b);
//! assert_ne!(a, sha.hash_str("hullo").unwrap());
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod async_result;
pub mod config;
pub mod error;
pub mod hash_result;
pub mod record;

// Re-export error types
pub use error::{HashError, Result};

pub use algorithm::HashAlgorithm;
pub use api::{
    generate_salt, generate_salt_with, AlgorithmIdentity, DigestHashBuilder, HashBuilder,
    HashPasses, Pbkdf2HashBuilder, SecureHashBuilder, StreamHashBuilder, DEFAULT_ITERATIONS,
    DEFAULT_SALT_LEN,
};
pub use async_result::{AsyncHashResult, AsyncHashResultWithHandler};
pub use config::SecureHashConfig;
pub use hash_result::{Hash, HashValue, SecureHash};
pub use record::HashRecord;

/// Master builder for hash operations
#[derive(Debug, Clone, Copy, Default)]
pub struct HashMasterBuilder;

impl HashMasterBuilder {
    /// Use SHA-256 hashing
    #[must_use]
    pub fn sha256(self) -> DigestHashBuilder {
        DigestHashBuilder::sha256()
    }

    /// Use SHA-384 hashing
    #[must_use]
    pub fn sha384(self) -> DigestHashBuilder {
        DigestHashBuilder::sha384()
    }

    /// Use SHA-512 hashing
    #[must_use]
    pub fn sha512(self) -> DigestHashBuilder {
        DigestHashBuilder::sha512()
    }

    /// Use SHA3-256 hashing
    #[must_use]
    pub fn sha3_256(self) -> DigestHashBuilder {
        DigestHashBuilder::sha3_256()
    }

    /// Use SHA3-512 hashing
    #[must_use]
    pub fn sha3_512(self) -> DigestHashBuilder {
        DigestHashBuilder::sha3_512()
    }

    /// Use `BLAKE2b`-512 hashing
    #[must_use]
    pub fn blake2b(self) -> DigestHashBuilder {
        DigestHashBuilder::blake2b()
    }

    /// Use a streaming digest chosen by name, e.g. from configuration
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if the name is unknown or
    /// salted.
    pub fn algorithm(self, name: &str) -> Result<DigestHashBuilder> {
        DigestHashBuilder::from_name(name)
    }

    /// Use PBKDF2-HMAC-SHA-256 with the given salt and iterations
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` for an empty salt or zero
    /// iterations.
    pub fn pbkdf2(self, salt: impl Into<Vec<u8>>, iterations: u32) -> Result<Pbkdf2HashBuilder> {
        Pbkdf2HashBuilder::new(salt, iterations)
    }

    /// Use PBKDF2-HMAC-SHA-256 with a fresh salt and default iterations
    ///
    /// # Errors
    ///
    /// Never fails with the built-in defaults.
    pub fn pbkdf2_random_salt(self) -> Result<Pbkdf2HashBuilder> {
        Pbkdf2HashBuilder::with_random_salt()
    }
}
