//! PBKDF2 salted iterative hash builder

use super::builder::{
    checked_range, generate_salt, generate_salt_with, AlgorithmIdentity, HashBuilder,
    SecureHashBuilder,
};
use super::passes::HashPasses;
use crate::config::SecureHashConfig;
use crate::{AsyncHashResult, Hash, HashAlgorithm, HashError, Result, SecureHash};
use hashkit_common::RandomSource;
use hmac::Hmac;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::num::NonZeroU32;
use tokio::sync::oneshot;
use tracing::trace;
use zeroize::Zeroizing;

/// Default salt length in bytes for salts generated by this builder
pub const DEFAULT_SALT_LEN: usize = 64;

/// Default iteration count for salted hashes
pub const DEFAULT_ITERATIONS: u32 = 5_000;

/// Builder for PBKDF2 hashes
///
/// Holds the salt and iteration count the next hash is derived with. Build one
/// instance per secret:
///
/// ```
/// use hashkit_hashing::{HashBuilder, Pbkdf2HashBuilder};
///
/// let mut builder = Pbkdf2HashBuilder::with_random_salt().unwrap();
/// let stored = builder.hash_str("correct horse").unwrap();
/// assert!(stored.verify("correct horse").unwrap());
/// assert!(!stored.verify("battery staple").unwrap());
/// ```
#[derive(Clone)]
pub struct Pbkdf2HashBuilder {
    algorithm: HashAlgorithm,
    salt: Vec<u8>,
    iterations: NonZeroU32,
}

impl Pbkdf2HashBuilder {
    /// PBKDF2 with HMAC-SHA-256
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `salt` is empty or
    /// `iterations` is zero.
    pub fn new(salt: impl Into<Vec<u8>>, iterations: u32) -> Result<Self> {
        Self::for_algorithm(HashAlgorithm::Pbkdf2HmacSha256, salt, iterations)
    }

    /// PBKDF2 with HMAC-SHA-512
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `salt` is empty or
    /// `iterations` is zero.
    pub fn sha512(salt: impl Into<Vec<u8>>, iterations: u32) -> Result<Self> {
        Self::for_algorithm(HashAlgorithm::Pbkdf2HmacSha512, salt, iterations)
    }

    /// PBKDF2 for any salted algorithm
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for unsalted algorithms and
    /// `HashError::InvalidParameters` for an empty salt or zero iterations.
    pub fn for_algorithm(
        algorithm: HashAlgorithm,
        salt: impl Into<Vec<u8>>,
        iterations: u32,
    ) -> Result<Self> {
        if !algorithm.is_salted() {
            return Err(HashError::UnsupportedAlgorithm(format!(
                "{algorithm} is not a key-derivation algorithm"
            )));
        }
        Ok(Self {
            algorithm,
            salt: non_empty_salt(salt.into())?,
            iterations: positive_iterations(iterations)?,
        })
    }

    /// PBKDF2-HMAC-SHA-256 with an iteration preset
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `salt` is empty.
    pub fn with_passes(salt: impl Into<Vec<u8>>, passes: HashPasses) -> Result<Self> {
        Self::new(salt, passes.iterations())
    }

    /// PBKDF2-HMAC-SHA-256 with a fresh default-length salt and default iterations
    ///
    /// # Errors
    ///
    /// Never fails with the built-in defaults; the `Result` mirrors the other
    /// constructors.
    pub fn with_random_salt() -> Result<Self> {
        Self::new(generate_salt(DEFAULT_SALT_LEN)?, DEFAULT_ITERATIONS)
    }

    /// Builder with a fresh salt drawn from the shared secure random source
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn from_config(config: &SecureHashConfig) -> Result<Self> {
        config.validate()?;
        Self::for_algorithm(
            config.algorithm,
            generate_salt(config.salt_length)?,
            config.iterations,
        )
    }

    /// Builder with a fresh salt drawn from `random`
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn from_config_with(config: &SecureHashConfig, random: &dyn RandomSource) -> Result<Self> {
        config.validate()?;
        Self::for_algorithm(
            config.algorithm,
            generate_salt_with(random, config.salt_length)?,
            config.iterations,
        )
    }

    /// One-shot PBKDF2-HMAC-SHA-256 of `secret` with the given parameters
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` for an empty salt or zero
    /// iterations.
    pub fn derive(secret: &str, salt: impl Into<Vec<u8>>, iterations: u32) -> Result<SecureHash> {
        Self::new(salt, iterations)?.hash_str(secret)
    }

    /// One-shot PBKDF2-HMAC-SHA-256 of `secret` with a fresh salt and defaults
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the derivation fails.
    pub fn derive_with_defaults(secret: &str) -> Result<SecureHash> {
        Self::with_random_salt()?.hash_str(secret)
    }

    /// Derive on tokio's blocking pool
    ///
    /// High iteration counts keep a core busy for a long time; this moves the
    /// work off the async executor. Resolves to `HashError::Internal` when no
    /// runtime is available.
    pub fn hash_async(self, secret: impl Into<String>) -> AsyncHashResult<SecureHash> {
        let secret = Zeroizing::new(secret.into());
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                return AsyncHashResult::error(HashError::internal(format!(
                    "No tokio runtime for async hashing: {e}"
                )));
            }
        };

        let (tx, rx) = oneshot::channel();
        let mut builder = self;
        handle.spawn_blocking(move || {
            let result = builder.hash_str(&secret);
            let _ = tx.send(result);
        });

        AsyncHashResult::new(rx)
    }

    fn derive_key(&self, secret: &[u8]) -> Result<SecureHash> {
        trace!(
            algorithm = %self.algorithm,
            iterations = self.iterations.get(),
            salt_len = self.salt.len(),
            "deriving salted hash"
        );

        let mut key = Zeroizing::new(vec![0u8; self.algorithm.output_len()]);
        let rounds = self.iterations.get();
        let derived = match self.algorithm {
            HashAlgorithm::Pbkdf2HmacSha256 => {
                pbkdf2::pbkdf2::<Hmac<Sha256>>(secret, &self.salt, rounds, &mut key)
            }
            HashAlgorithm::Pbkdf2HmacSha512 => {
                pbkdf2::pbkdf2::<Hmac<Sha512>>(secret, &self.salt, rounds, &mut key)
            }
            other => {
                return Err(HashError::UnsupportedAlgorithm(format!(
                    "{other} is not a key-derivation algorithm"
                )));
            }
        };
        derived.map_err(|e| HashError::KeyDerivation(format!("{} failed: {e}", self.algorithm)))?;

        Ok(SecureHash::new(
            Hash::new(key.to_vec(), self.algorithm),
            self.salt.clone(),
            self.iterations,
        ))
    }
}

impl AlgorithmIdentity for Pbkdf2HashBuilder {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl HashBuilder for Pbkdf2HashBuilder {
    type Output = SecureHash;

    /// Passwords are character data, so the bytes must be valid UTF-8
    fn hash_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<SecureHash> {
        let chunk = checked_range(data, offset, length)?;
        let text = std::str::from_utf8(chunk)
            .map_err(|e| HashError::Encoding(format!("secret is not valid UTF-8: {e}")))?;
        self.hash_str(text)
    }

    fn hash_str(&mut self, text: &str) -> Result<SecureHash> {
        self.derive_key(text.as_bytes())
    }
}

impl SecureHashBuilder for Pbkdf2HashBuilder {
    fn salt(&self) -> &[u8] {
        &self.salt
    }

    fn set_salt(&mut self, salt: Vec<u8>) -> Result<()> {
        self.salt = non_empty_salt(salt)?;
        Ok(())
    }

    fn iterations(&self) -> u32 {
        self.iterations.get()
    }

    fn set_iterations(&mut self, iterations: u32) -> Result<()> {
        self.iterations = positive_iterations(iterations)?;
        Ok(())
    }
}

impl fmt::Debug for Pbkdf2HashBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pbkdf2HashBuilder")
            .field("algorithm", &self.algorithm)
            .field("salt_len", &self.salt.len())
            .field("iterations", &self.iterations)
            .finish()
    }
}

fn non_empty_salt(salt: Vec<u8>) -> Result<Vec<u8>> {
    if salt.is_empty() {
        Err(HashError::invalid_parameters("salt must not be empty"))
    } else {
        Ok(salt)
    }
}

fn positive_iterations(iterations: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(iterations)
        .ok_or_else(|| HashError::invalid_parameters("iterations must be positive"))
}
