//! Persistable form of any hash value

use crate::{HashAlgorithm, HashError, HashValue, Result, SecureHash};
use crate::hash_result::Hash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A plain or salted hash, tagged with its kind
///
/// This is what callers store, e.g. next to a user record. It keeps the
/// algorithm, the raw bytes and, for salted hashes, salt and iteration count.
/// Byte fields are serialized as hex strings. A plain and a salted record are
/// never equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HashRecord {
    /// An unsalted digest
    Plain(Hash),
    /// A salted iterative hash
    Salted(SecureHash),
}

impl HashRecord {
    /// The raw digest bytes
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            Self::Plain(hash) => hash.raw_bytes(),
            Self::Salted(hash) => hash.raw_bytes(),
        }
    }

    /// The algorithm that produced the hash
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Plain(hash) => hash.algorithm(),
            Self::Salted(hash) => hash.algorithm(),
        }
    }

    /// The salt, for salted records
    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        match self {
            Self::Plain(_) => None,
            Self::Salted(hash) => Some(hash.salt()),
        }
    }

    /// The iteration count, for salted records
    #[must_use]
    pub fn iterations(&self) -> Option<u32> {
        match self {
            Self::Plain(_) => None,
            Self::Salted(hash) => Some(hash.iterations()),
        }
    }

    /// Serialize to a JSON string
    ///
    /// # Errors
    ///
    /// Returns `HashError::Internal` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| HashError::internal(format!("Hash record serialization failed: {e}")))
    }

    /// Parse a record previously written by [`HashRecord::to_json`]
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` for malformed JSON, an unknown
    /// algorithm, or a raw length that does not match the algorithm.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HashError::invalid_parameters(format!("Invalid hash record: {e}")))
    }
}

impl From<Hash> for HashRecord {
    fn from(hash: Hash) -> Self {
        hash.into_record()
    }
}

impl From<SecureHash> for HashRecord {
    fn from(hash: SecureHash) -> Self {
        hash.into_record()
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(hash) => write!(f, "{}:{hash}", hash.algorithm()),
            Self::Salted(hash) => write!(
                f,
                "{}:{}:{}:{hash}",
                hash.algorithm(),
                hash.iterations(),
                hex::encode(hash.salt())
            ),
        }
    }
}
