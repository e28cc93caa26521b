//! Master builder
//!
//! Entry point for every hashkit operation

#[cfg(feature = "hashing")]
use hashkit_hashing::HashMasterBuilder;

#[cfg(feature = "unique")]
use hashkit_unique::UniqueMasterBuilder;

/// Unified entry point for hashing and unique value generation
#[derive(Debug, Clone, Copy)]
pub struct Hashkit;

impl Hashkit {
    /// Entry point for hashing operations
    /// Example: `Hashkit::hash().sha256().hash_str("hello")`
    #[cfg(feature = "hashing")]
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }

    /// Entry point for unique value generators
    /// Example: `Hashkit::unique().token(16, |t: &str| !taken(t))?.compute()`
    #[cfg(feature = "unique")]
    #[must_use]
    pub fn unique() -> UniqueMasterBuilder {
        UniqueMasterBuilder
    }
}
