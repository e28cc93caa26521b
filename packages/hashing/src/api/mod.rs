//! Hash builders
//!
//! Capabilities live in [`builder`]; concrete builders are
//! [`DigestHashBuilder`] for streaming digests and [`Pbkdf2HashBuilder`] for
//! salted iterative hashes.

pub mod builder;
pub mod digest_builder;
pub mod passes;
pub mod pbkdf2_builder;

pub use builder::{
    generate_salt, generate_salt_with, AlgorithmIdentity, HashBuilder, SecureHashBuilder,
    StreamHashBuilder,
};
pub use digest_builder::DigestHashBuilder;
pub use passes::HashPasses;
pub use pbkdf2_builder::{Pbkdf2HashBuilder, DEFAULT_ITERATIONS, DEFAULT_SALT_LEN};
