//! Fixed-length URL-safe random tokens

use crate::engine::RandomUniqueGenerator;
use crate::predicate::UniquenessPredicate;
use crate::{Result, UniqueError};
use hashkit_common::{RandomSource, SecureRandom};
use std::fmt;
use std::sync::Arc;

/// Generates random strings of a fixed length that satisfy a predicate
///
/// Each candidate is `length` random bytes, encoded as URL-safe base64
/// without padding and cut to `length` characters. Every character is drawn
/// from `A-Z a-z 0-9 - _`.
///
/// ```
/// use hashkit_unique::{RandomUniqueGenerator, TokenGenerator};
///
/// let generator = TokenGenerator::new(8, |token: &str| token != "AAAAAAAA")?;
/// let token = generator.compute();
/// assert_eq!(token.len(), 8);
/// # Ok::<(), hashkit_unique::UniqueError>(())
/// ```
pub struct TokenGenerator<P> {
    length: usize,
    predicate: P,
    random: Arc<dyn RandomSource>,
}

impl<P> TokenGenerator<P>
where
    P: UniquenessPredicate<str>,
{
    /// Token generator drawing from the process-wide secure random source
    ///
    /// # Errors
    ///
    /// Returns `UniqueError::InvalidLength` if `length` is zero.
    pub fn new(length: usize, predicate: P) -> Result<Self> {
        Self::with_source(length, predicate, SecureRandom::shared_source())
    }

    /// Token generator drawing from `random`
    ///
    /// # Errors
    ///
    /// Returns `UniqueError::InvalidLength` if `length` is zero.
    pub fn with_source(length: usize, predicate: P, random: Arc<dyn RandomSource>) -> Result<Self> {
        check_length(length)?;
        Ok(Self {
            length,
            predicate,
            random,
        })
    }

    /// Length in characters of generated tokens
    pub fn length(&self) -> usize {
        self.length
    }

    /// Change the length of subsequently generated tokens
    ///
    /// # Errors
    ///
    /// Returns `UniqueError::InvalidLength` if `length` is zero.
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        check_length(length)?;
        self.length = length;
        Ok(())
    }

    /// The configured predicate
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<P> RandomUniqueGenerator for TokenGenerator<P>
where
    P: UniquenessPredicate<str>,
{
    type Output = String;

    fn create_random(&self) -> String {
        let bytes = self.random.random_bytes(self.length);
        // 4 characters per 3 bytes, so there are always enough to cut from
        let mut token = base64_url::encode(&bytes);
        token.truncate(self.length);
        token
    }

    fn is_unique(&self, candidate: &String) -> bool {
        self.predicate.is_unique(candidate.as_str())
    }
}

impl<P> fmt::Debug for TokenGenerator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGenerator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(UniqueError::InvalidLength(length));
    }
    Ok(())
}
