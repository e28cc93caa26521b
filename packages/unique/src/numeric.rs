//! Unique 64-bit identifiers

use crate::engine::RandomUniqueGenerator;
use crate::predicate::UniquenessPredicate;
use hashkit_common::{RandomSource, SecureRandom};
use std::fmt;
use std::sync::Arc;

/// Generates random `u64` values that satisfy a predicate
///
/// Candidates are raw draws from the random source; every `u64` is possible.
pub struct NumericIdGenerator<P> {
    predicate: P,
    random: Arc<dyn RandomSource>,
}

impl<P> NumericIdGenerator<P>
where
    P: UniquenessPredicate<u64>,
{
    /// Identifier generator drawing from the process-wide secure random source
    pub fn new(predicate: P) -> Self {
        Self::with_source(predicate, SecureRandom::shared_source())
    }

    /// Identifier generator drawing from `random`
    pub fn with_source(predicate: P, random: Arc<dyn RandomSource>) -> Self {
        Self { predicate, random }
    }

    /// The configured predicate
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<P> RandomUniqueGenerator for NumericIdGenerator<P>
where
    P: UniquenessPredicate<u64>,
{
    type Output = u64;

    fn create_random(&self) -> u64 {
        self.random.next_u64()
    }

    fn is_unique(&self, candidate: &u64) -> bool {
        self.predicate.is_unique(candidate)
    }
}

impl<P> fmt::Debug for NumericIdGenerator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericIdGenerator").finish_non_exhaustive()
    }
}
