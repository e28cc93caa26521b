//! Retry-until-unique engine
//!
//! The loop is kept apart from candidate creation so one skeleton serves every
//! output type. It is unbounded: callers are responsible for a candidate space
//! large enough that rejections stay rare. [`generate_unique_bounded`] is an
//! opt-in escape valve on top of the same loop.

use crate::predicate::UniquenessPredicate;
use crate::{Result, UniqueError};
use std::num::NonZeroU64;
use tracing::{debug, trace};

/// A generated value and the number of candidates it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    /// The accepted candidate
    pub value: T,
    /// Candidates created, including the accepted one
    pub attempts: u64,
}

/// Produces random candidates and keeps the first unique one
pub trait RandomUniqueGenerator {
    /// Type of the generated values
    type Output;

    /// Create one random candidate
    ///
    /// Must not consult the uniqueness predicate.
    fn create_random(&self) -> Self::Output;

    /// Ask the configured predicate about `candidate`
    fn is_unique(&self, candidate: &Self::Output) -> bool;

    /// Generate candidates until one is unique
    ///
    /// Does not return until the predicate accepts a candidate.
    fn compute(&self) -> Self::Output {
        self.compute_counted().value
    }

    /// Like [`compute`](RandomUniqueGenerator::compute), also reporting the
    /// number of attempts
    fn compute_counted(&self) -> Generated<Self::Output> {
        generate_unique_counted(
            || self.create_random(),
            &|candidate: &Self::Output| self.is_unique(candidate),
        )
    }

    /// Generate candidates until one is unique, giving up after `max_attempts`
    ///
    /// # Errors
    ///
    /// Returns `UniqueError::Exhausted` if every attempt was rejected.
    fn try_compute(&self, max_attempts: NonZeroU64) -> Result<Self::Output> {
        generate_unique_bounded(
            || self.create_random(),
            &|candidate: &Self::Output| self.is_unique(candidate),
            max_attempts,
        )
        .map(|generated| generated.value)
    }
}

/// Call `create` until `predicate` accepts a candidate and return it
pub fn generate_unique<T, C, P>(create: C, predicate: &P) -> T
where
    C: FnMut() -> T,
    P: UniquenessPredicate<T> + ?Sized,
{
    generate_unique_counted(create, predicate).value
}

/// Like [`generate_unique`], also reporting the number of attempts
pub fn generate_unique_counted<T, C, P>(mut create: C, predicate: &P) -> Generated<T>
where
    C: FnMut() -> T,
    P: UniquenessPredicate<T> + ?Sized,
{
    let mut attempts: u64 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        let candidate = create();
        if predicate.is_unique(&candidate) {
            if attempts > 1 {
                debug!(attempts, "unique value found after retries");
            }
            return Generated {
                value: candidate,
                attempts,
            };
        }
        trace!(attempt = attempts, "candidate rejected");
    }
}

/// Like [`generate_unique_counted`], but stops after `max_attempts` rejections
///
/// # Errors
///
/// Returns `UniqueError::Exhausted` if every attempt was rejected.
pub fn generate_unique_bounded<T, C, P>(
    mut create: C,
    predicate: &P,
    max_attempts: NonZeroU64,
) -> Result<Generated<T>>
where
    C: FnMut() -> T,
    P: UniquenessPredicate<T> + ?Sized,
{
    for attempts in 1..=max_attempts.get() {
        let candidate = create();
        if predicate.is_unique(&candidate) {
            if attempts > 1 {
                debug!(attempts, "unique value found after retries");
            }
            return Ok(Generated {
                value: candidate,
                attempts,
            });
        }
        trace!(attempt = attempts, "candidate rejected");
    }

    debug!(attempts = max_attempts.get(), "giving up on unique value");
    Err(UniqueError::Exhausted {
        attempts: max_attempts.get(),
    })
}
