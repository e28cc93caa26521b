//! Immutable hash values
//!
//! A [`Hash`] pairs raw digest bytes with the algorithm that produced them. A
//! [`SecureHash`] additionally carries the salt and iteration count, and both
//! are part of its identity.

use crate::api::{DigestHashBuilder, HashBuilder, Pbkdf2HashBuilder};
use crate::{HashAlgorithm, HashError, HashRecord, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash as StdHash, Hasher};
use std::num::NonZeroU32;
use subtle::ConstantTimeEq;

/// Read access shared by every kind of hash value
pub trait HashValue: Clone + Eq + fmt::Debug + fmt::Display + Send + Sync {
    /// The raw digest bytes
    fn raw_bytes(&self) -> &[u8];

    /// The algorithm that produced this value
    fn algorithm(&self) -> HashAlgorithm;

    /// Convert into the persistable tagged form
    fn into_record(self) -> HashRecord;
}

/// A digest computed by some [`HashAlgorithm`]
///
/// Two hashes are equal iff their raw bytes are equal. The comparison runs in
/// constant time for equal-length inputs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "HashFields", try_from = "HashFields")]
pub struct Hash {
    raw: Vec<u8>,
    algorithm: HashAlgorithm,
}

#[derive(Serialize, Deserialize)]
struct HashFields {
    algorithm: HashAlgorithm,
    #[serde(with = "hex::serde")]
    raw: Vec<u8>,
}

impl Hash {
    pub(crate) fn new(raw: Vec<u8>, algorithm: HashAlgorithm) -> Self {
        debug_assert_eq!(raw.len(), algorithm.output_len());
        Self { raw, algorithm }
    }

    /// The raw digest bytes
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// The algorithm that produced this hash
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Identifier of the algorithm, e.g. `"SHA-256"`
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// A fresh builder for the same algorithm
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` when the algorithm is salted;
    /// use [`SecureHash::builder`] for those.
    pub fn builder(&self) -> Result<DigestHashBuilder> {
        DigestHashBuilder::new(self.algorithm)
    }

    /// Length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Consume the hash and keep its raw bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }

    /// Get the hash as a hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.raw)
    }

    /// Get the hash as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.raw)
    }

    /// Get the hash as a base64url string (URL-safe)
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.raw)
    }
}

impl HashValue for Hash {
    fn raw_bytes(&self) -> &[u8] {
        Hash::raw_bytes(self)
    }

    fn algorithm(&self) -> HashAlgorithm {
        Hash::algorithm(self)
    }

    fn into_record(self) -> HashRecord {
        HashRecord::Plain(self)
    }
}

impl PartialEq for Hash {
    fn eq(&self, other: &Self) -> bool {
        self.raw.as_slice().ct_eq(other.raw.as_slice()).into()
    }
}

impl Eq for Hash {}

impl PartialEq<[u8]> for Hash {
    fn eq(&self, other: &[u8]) -> bool {
        self.raw.as_slice().ct_eq(other).into()
    }
}

impl PartialEq<&[u8]> for Hash {
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl StdHash for Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for Hash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl From<Hash> for Vec<u8> {
    fn from(hash: Hash) -> Self {
        hash.raw
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hash")
            .field("algorithm", &self.algorithm)
            .field("raw", &self.to_hex())
            .finish()
    }
}

impl From<Hash> for HashFields {
    fn from(hash: Hash) -> Self {
        Self {
            algorithm: hash.algorithm,
            raw: hash.raw,
        }
    }
}

impl TryFrom<HashFields> for Hash {
    type Error = HashError;

    fn try_from(fields: HashFields) -> Result<Self> {
        check_raw_len(fields.algorithm, &fields.raw)?;
        Ok(Self::new(fields.raw, fields.algorithm))
    }
}

fn check_raw_len(algorithm: HashAlgorithm, raw: &[u8]) -> Result<()> {
    if raw.len() == algorithm.output_len() {
        Ok(())
    } else {
        Err(HashError::invalid_parameters(format!(
            "{algorithm} hashes are {} bytes, got {}",
            algorithm.output_len(),
            raw.len()
        )))
    }
}

/// A hash derived with a salt over a number of iterations
///
/// Equality requires equal raw bytes, equal salts and equal iteration counts:
/// the same secret hashed under two salts never compares equal.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "SecureHashFields", try_from = "SecureHashFields")]
pub struct SecureHash {
    hash: Hash,
    salt: Vec<u8>,
    iterations: NonZeroU32,
}

#[derive(Serialize, Deserialize)]
struct SecureHashFields {
    algorithm: HashAlgorithm,
    #[serde(with = "hex::serde")]
    raw: Vec<u8>,
    #[serde(with = "hex::serde")]
    salt: Vec<u8>,
    iterations: NonZeroU32,
}

impl SecureHash {
    pub(crate) fn new(hash: Hash, salt: Vec<u8>, iterations: NonZeroU32) -> Self {
        Self {
            hash,
            salt,
            iterations,
        }
    }

    /// The raw derived bytes
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        self.hash.raw_bytes()
    }

    /// The algorithm that produced this hash
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.hash.algorithm()
    }

    /// Identifier of the algorithm, e.g. `"PBKDF2WithHmacSHA256"`
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.hash.algorithm_name()
    }

    /// The salt the hash was derived with
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// How many iterations the derivation ran
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations.get()
    }

    /// The digest part without salt and iterations
    #[must_use]
    pub fn as_hash(&self) -> &Hash {
        &self.hash
    }

    /// A builder holding this hash's salt and iteration count
    ///
    /// # Errors
    ///
    /// Only fails if the stored parameters were rejected by the builder, which
    /// cannot happen for values produced by this crate.
    pub fn builder(&self) -> Result<Pbkdf2HashBuilder> {
        Pbkdf2HashBuilder::for_algorithm(self.algorithm(), self.salt.clone(), self.iterations())
    }

    /// Check a secret against this hash
    ///
    /// Re-derives with the stored salt and iterations and compares in constant
    /// time.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivation itself fails.
    pub fn verify(&self, secret: &str) -> Result<bool> {
        let candidate = self.builder()?.hash_str(secret)?;
        Ok(candidate == *self)
    }

    /// Check a UTF-8 encoded secret against this hash
    ///
    /// # Errors
    ///
    /// Returns `HashError::Encoding` if `secret` is not valid UTF-8.
    pub fn verify_bytes(&self, secret: &[u8]) -> Result<bool> {
        let candidate = self.builder()?.hash(secret)?;
        Ok(candidate == *self)
    }

    /// Get the derived bytes as a hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.hash.to_hex()
    }
}

impl HashValue for SecureHash {
    fn raw_bytes(&self) -> &[u8] {
        SecureHash::raw_bytes(self)
    }

    fn algorithm(&self) -> HashAlgorithm {
        SecureHash::algorithm(self)
    }

    fn into_record(self) -> HashRecord {
        HashRecord::Salted(self)
    }
}

impl PartialEq for SecureHash {
    fn eq(&self, other: &Self) -> bool {
        let same_params = self.iterations.get().ct_eq(&other.iterations.get())
            & self.salt.as_slice().ct_eq(other.salt.as_slice());
        bool::from(same_params) && self.hash == other.hash
    }
}

impl Eq for SecureHash {}

impl StdHash for SecureHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
        self.salt.hash(state);
        self.iterations.hash(state);
    }
}

impl AsRef<[u8]> for SecureHash {
    fn as_ref(&self) -> &[u8] {
        self.hash.as_ref()
    }
}

impl fmt::Display for SecureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hash, f)
    }
}

impl fmt::Debug for SecureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureHash")
            .field("algorithm", &self.algorithm())
            .field("raw", &self.hash.to_hex())
            .field("salt", &hex::encode(&self.salt))
            .field("iterations", &self.iterations)
            .finish()
    }
}

impl From<SecureHash> for SecureHashFields {
    fn from(secure: SecureHash) -> Self {
        Self {
            algorithm: secure.hash.algorithm,
            raw: secure.hash.raw,
            salt: secure.salt,
            iterations: secure.iterations,
        }
    }
}

impl TryFrom<SecureHashFields> for SecureHash {
    type Error = HashError;

    fn try_from(fields: SecureHashFields) -> Result<Self> {
        if !fields.algorithm.is_salted() {
            return Err(HashError::UnsupportedAlgorithm(format!(
                "{} is not a salted algorithm",
                fields.algorithm
            )));
        }
        if fields.salt.is_empty() {
            return Err(HashError::invalid_parameters("salt must not be empty"));
        }
        check_raw_len(fields.algorithm, &fields.raw)?;
        Ok(Self::new(
            Hash::new(fields.raw, fields.algorithm),
            fields.salt,
            fields.iterations,
        ))
    }
}
