//! Algorithm descriptors shared by builders and hash values

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a hashing scheme
///
/// The first six variants are plain streaming digests; the PBKDF2 variants are
/// salted iterative key-derivation hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4)
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-384 (FIPS 180-4)
    #[serde(rename = "SHA-384")]
    Sha384,
    /// SHA-512 (FIPS 180-4)
    #[serde(rename = "SHA-512")]
    Sha512,
    /// SHA3-256 (FIPS 202)
    #[serde(rename = "SHA3-256")]
    Sha3_256,
    /// SHA3-512 (FIPS 202)
    #[serde(rename = "SHA3-512")]
    Sha3_512,
    /// `BLAKE2b` with a 512-bit output
    #[serde(rename = "BLAKE2b-512")]
    Blake2b512,
    /// PBKDF2 with HMAC-SHA-256, 256-bit derived key
    #[serde(rename = "PBKDF2WithHmacSHA256")]
    Pbkdf2HmacSha256,
    /// PBKDF2 with HMAC-SHA-512, 512-bit derived key
    #[serde(rename = "PBKDF2WithHmacSHA512")]
    Pbkdf2HmacSha512,
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [HashAlgorithm; 8] = [
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_512,
        Self::Blake2b512,
        Self::Pbkdf2HmacSha256,
        Self::Pbkdf2HmacSha512,
    ];

    /// Stable identifier of the scheme
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b512 => "BLAKE2b-512",
            Self::Pbkdf2HmacSha256 => "PBKDF2WithHmacSHA256",
            Self::Pbkdf2HmacSha512 => "PBKDF2WithHmacSHA512",
        }
    }

    /// Length in bytes of the raw hash this algorithm produces
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 | Self::Sha3_256 | Self::Pbkdf2HmacSha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 | Self::Pbkdf2HmacSha512 => 64,
        }
    }

    /// Whether hashes of this algorithm carry a salt and an iteration count
    #[must_use]
    pub const fn is_salted(self) -> bool {
        matches!(self, Self::Pbkdf2HmacSha256 | Self::Pbkdf2HmacSha512)
    }

    /// Look an algorithm up by its identifier, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if no algorithm has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| HashError::UnsupportedAlgorithm(name.to_string()))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
