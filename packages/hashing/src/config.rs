//! Configuration for salted hashing

use crate::api::passes::HashPasses;
use crate::api::pbkdf2_builder::{DEFAULT_ITERATIONS, DEFAULT_SALT_LEN};
use crate::{HashAlgorithm, HashError, Result};
use serde::{Deserialize, Serialize};

/// Parameters for newly created salted hashes
///
/// Missing fields fall back to their defaults when deserializing, so a config
/// file only has to mention what it changes:
///
/// ```
/// use hashkit_hashing::SecureHashConfig;
///
/// let config = SecureHashConfig::from_json(r#"{ "iterations": 20000 }"#).unwrap();
/// assert_eq!(config.iterations, 20_000);
/// assert_eq!(config.salt_length, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecureHashConfig {
    /// Salted algorithm to derive with
    pub algorithm: HashAlgorithm,
    /// Length in bytes of generated salts
    pub salt_length: usize,
    /// Iteration count
    pub iterations: u32,
}

impl Default for SecureHashConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Pbkdf2HmacSha256,
            salt_length: DEFAULT_SALT_LEN,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl SecureHashConfig {
    /// Default config with the iteration count of `passes`
    #[must_use]
    pub fn with_passes(passes: HashPasses) -> Self {
        Self {
            iterations: passes.iterations(),
            ..Self::default()
        }
    }

    /// Check that the parameters can produce a salted hash
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for an unsalted algorithm and
    /// `HashError::InvalidParameters` for a zero salt length or iteration count.
    pub fn validate(&self) -> Result<()> {
        if !self.algorithm.is_salted() {
            return Err(HashError::UnsupportedAlgorithm(format!(
                "{} is not a salted algorithm",
                self.algorithm
            )));
        }
        if self.salt_length == 0 {
            return Err(HashError::invalid_parameters("salt_length must be positive"));
        }
        if self.iterations == 0 {
            return Err(HashError::invalid_parameters("iterations must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` for malformed JSON, or the
    /// validation error.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HashError::invalid_parameters(format!("Invalid hash config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
