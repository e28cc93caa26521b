//! Random values that are unique within a caller-defined context
//!
//! A generator creates random candidates and keeps the first one a
//! [`UniquenessPredicate`] accepts. What "unique" means is up to the caller:
//! a database lookup, an in-memory registry, a reserved-word list.
//!
//! ```
//! use hashkit_unique::{RandomUniqueGenerator, UniqueMasterBuilder};
//! use std::collections::HashSet;
//! use std::sync::Mutex;
//!
//! let issued = Mutex::new(HashSet::new());
//! let ids = UniqueMasterBuilder.numeric(|id: &u64| {
//!     !issued.lock().map(|set| set.contains(id)).unwrap_or(true)
//! });
//!
//! let id = ids.compute();
//! issued.lock().unwrap().insert(id);
//! assert_ne!(ids.compute(), id);
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod numeric;
pub mod predicate;
pub mod token;

pub use engine::{
    generate_unique, generate_unique_bounded, generate_unique_counted, Generated,
    RandomUniqueGenerator,
};
pub use error::{Result, UniqueError};
pub use numeric::NumericIdGenerator;
pub use predicate::{AcceptAll, UniquenessPredicate};
pub use token::TokenGenerator;

/// Master builder for unique value generators
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueMasterBuilder;

impl UniqueMasterBuilder {
    /// Random URL-safe tokens of `length` characters
    ///
    /// # Errors
    ///
    /// Returns `UniqueError::InvalidLength` if `length` is zero.
    pub fn token<P>(self, length: usize, predicate: P) -> Result<TokenGenerator<P>>
    where
        P: UniquenessPredicate<str>,
    {
        TokenGenerator::new(length, predicate)
    }

    /// Random 64-bit identifiers
    #[must_use]
    pub fn numeric<P>(self, predicate: P) -> NumericIdGenerator<P>
    where
        P: UniquenessPredicate<u64>,
    {
        NumericIdGenerator::new(predicate)
    }
}
