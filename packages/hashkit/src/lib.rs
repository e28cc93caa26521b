//! # Hashkit
//!
//! Comparable hash values, swappable hash builders, salted iterative password
//! hashing and random values that are unique in a caller-defined context.
//!
//! ## Features
//!
//! - `hashing` - digest and PBKDF2 builders, hash values and records
//! - `unique` - retry-until-unique token and identifier generators
//!
//! Both are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use hashkit::{HashBuilder, Hashkit, RandomUniqueGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut sha = Hashkit::hash().sha256();
//! assert_eq!(sha.hash_str("hello")?, sha.hash_str("hello")?);
//!
//! let mut passwords = Hashkit::hash().pbkdf2_random_salt()?;
//! let stored = passwords.hash_str("correct horse")?;
//! assert!(stored.verify("correct horse")?);
//! assert!(!stored.verify("battery staple")?);
//!
//! let session = Hashkit::unique().token(24, |t: &str| !t.starts_with('-'))?.compute();
//! assert_eq!(session.len(), 24);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(any(feature = "hashing", feature = "unique"))]
mod master;

#[cfg(any(feature = "hashing", feature = "unique"))]
pub use master::Hashkit;

// === Core Re-exports ===

pub use hashkit_common::*;

// === Hashing Re-exports ===

#[cfg(feature = "hashing")]
#[cfg_attr(docsrs, doc(cfg(feature = "hashing")))]
pub use hashkit_hashing::{
    generate_salt, generate_salt_with, AlgorithmIdentity, AsyncHashResult, DigestHashBuilder,
    Hash, HashAlgorithm, HashBuilder, HashError, HashMasterBuilder, HashPasses, HashRecord,
    HashValue, Pbkdf2HashBuilder, SecureHash, SecureHashBuilder, SecureHashConfig,
    StreamHashBuilder,
};

#[cfg(feature = "hashing")]
#[cfg_attr(docsrs, doc(cfg(feature = "hashing")))]
pub use hashkit_hashing as hashing;

// === Unique Re-exports ===

#[cfg(feature = "unique")]
#[cfg_attr(docsrs, doc(cfg(feature = "unique")))]
pub use hashkit_unique::{
    generate_unique, generate_unique_bounded, NumericIdGenerator, RandomUniqueGenerator,
    TokenGenerator, UniqueError, UniqueMasterBuilder, UniquenessPredicate,
};

#[cfg(feature = "unique")]
#[cfg_attr(docsrs, doc(cfg(feature = "unique")))]
pub use hashkit_unique as unique;
