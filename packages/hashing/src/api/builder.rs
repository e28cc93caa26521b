//! Builder capabilities
//!
//! Builders are expressed as small capability traits rather than a class chain:
//! - [`AlgorithmIdentity`] names the scheme
//! - [`HashBuilder`] computes one-shot hashes
//! - [`StreamHashBuilder`] absorbs data incrementally; every streaming builder
//!   is a [`HashBuilder`] through a blanket impl
//! - [`SecureHashBuilder`] holds salt and iteration state

use crate::{Hash, HashAlgorithm, HashError, HashValue, Result, SecureHash};
use hashkit_common::{RandomSource, SecureRandom};

/// Identity of the hashing scheme a builder implements
pub trait AlgorithmIdentity {
    /// The algorithm this builder computes
    fn algorithm(&self) -> HashAlgorithm;

    /// Stable identifier of the algorithm
    fn algorithm_name(&self) -> &'static str {
        self.algorithm().name()
    }
}

/// One-shot hashing
pub trait HashBuilder: AlgorithmIdentity {
    /// The value type this builder produces
    type Output: HashValue;

    /// Hash `length` bytes of `data` starting at `offset`
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidRange` if the range does not fit in `data`,
    /// or the provider's error if the computation fails.
    fn hash_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<Self::Output>;

    /// Hash the whole buffer
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the computation fails.
    fn hash(&mut self, data: &[u8]) -> Result<Self::Output> {
        self.hash_range(data, 0, data.len())
    }

    /// Hash text as UTF-8 bytes
    ///
    /// Builders may override this when the provider consumes character data.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the computation fails.
    fn hash_str(&mut self, text: &str) -> Result<Self::Output> {
        self.hash(text.as_bytes())
    }
}

/// Incremental hashing
///
/// A streaming builder is either idle (fresh, reset, or just finalized) or
/// accumulating. [`finalize`](StreamHashBuilder::finalize) returns the digest
/// and leaves the builder idle. Instances are not meant to be shared between
/// threads without external synchronization.
pub trait StreamHashBuilder: AlgorithmIdentity {
    /// Absorb the whole buffer
    fn update(&mut self, data: &[u8]);

    /// Discard accumulated state
    fn reset(&mut self);

    /// Finish the computation and reset the builder
    fn finalize(&mut self) -> Hash;

    /// Absorb `length` bytes of `data` starting at `offset`
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidRange` if the range does not fit in `data`;
    /// nothing is absorbed in that case.
    fn update_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<()> {
        let chunk = checked_range(data, offset, length)?;
        self.update(chunk);
        Ok(())
    }
}

impl<B: StreamHashBuilder> HashBuilder for B {
    type Output = Hash;

    // Always reset first so leftover state from earlier updates cannot leak in.
    fn hash_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<Hash> {
        let chunk = checked_range(data, offset, length)?;
        self.reset();
        self.update(chunk);
        Ok(self.finalize())
    }
}

/// Salted iterative hashing
///
/// Construct one builder per secret with a freshly generated salt (see
/// [`generate_salt`]). Reusing a builder, and therefore its salt, for unrelated
/// secrets defeats the purpose of salting.
pub trait SecureHashBuilder: HashBuilder<Output = SecureHash> {
    /// The salt the next hash will be derived with
    fn salt(&self) -> &[u8];

    /// Replace the salt
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `salt` is empty.
    fn set_salt(&mut self, salt: Vec<u8>) -> Result<()>;

    /// The iteration count the next hash will use
    fn iterations(&self) -> u32;

    /// Replace the iteration count
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `iterations` is zero.
    fn set_iterations(&mut self, iterations: u32) -> Result<()>;
}

/// Draw a salt of `length` bytes from the shared secure random source
///
/// # Errors
///
/// Returns `HashError::InvalidParameters` if `length` is zero.
pub fn generate_salt(length: usize) -> Result<Vec<u8>> {
    generate_salt_with(&*SecureRandom::shared(), length)
}

/// Draw a salt of `length` bytes from `random`
///
/// # Errors
///
/// Returns `HashError::InvalidParameters` if `length` is zero.
pub fn generate_salt_with(random: &dyn RandomSource, length: usize) -> Result<Vec<u8>> {
    if length == 0 {
        return Err(HashError::invalid_parameters("salt length must be positive"));
    }
    Ok(random.random_bytes(length))
}

pub(crate) fn checked_range(data: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    offset
        .checked_add(length)
        .and_then(|end| data.get(offset..end))
        .ok_or(HashError::InvalidRange {
            offset,
            length,
            available: data.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_range_selects_subslice() {
        let data = b"0123456789";
        assert_eq!(checked_range(data, 2, 3).unwrap(), b"234");
        assert_eq!(checked_range(data, 10, 0).unwrap(), b"");
        assert_eq!(checked_range(data, 0, 10).unwrap(), data);
    }

    #[test]
    fn test_checked_range_rejects_out_of_bounds() {
        let data = [0u8; 4];
        assert!(matches!(
            checked_range(&data, 3, 2),
            Err(HashError::InvalidRange {
                offset: 3,
                length: 2,
                available: 4
            })
        ));
        assert!(checked_range(&data, 5, 0).is_err());
        assert!(checked_range(&data, usize::MAX, 2).is_err());
    }
}
