//! Streaming digest builder over the `sha2`, `sha3` and `blake2` providers

use super::builder::{AlgorithmIdentity, HashBuilder, StreamHashBuilder};
use crate::{Hash, HashAlgorithm, HashError, Result};
use blake2::Blake2b512;
use digest::Digest;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};
use std::fmt;
use std::io::{self, Read, Write};

/// Internal hasher state for the supported digests
#[derive(Clone)]
enum DigestState {
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha3_256(Sha3_256),
    Sha3_512(Sha3_512),
    Blake2b512(Blake2b512),
}

impl DigestState {
    fn new(algorithm: HashAlgorithm) -> Result<Self> {
        let state = match algorithm {
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
            HashAlgorithm::Sha3_256 => Self::Sha3_256(Sha3_256::new()),
            HashAlgorithm::Sha3_512 => Self::Sha3_512(Sha3_512::new()),
            HashAlgorithm::Blake2b512 => Self::Blake2b512(Blake2b512::new()),
            HashAlgorithm::Pbkdf2HmacSha256 | HashAlgorithm::Pbkdf2HmacSha512 => {
                return Err(HashError::UnsupportedAlgorithm(format!(
                    "{algorithm} is salted and has no streaming digest"
                )));
            }
        };
        Ok(state)
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(hasher) => Digest::update(hasher, data),
            Self::Sha384(hasher) => Digest::update(hasher, data),
            Self::Sha512(hasher) => Digest::update(hasher, data),
            Self::Sha3_256(hasher) => Digest::update(hasher, data),
            Self::Sha3_512(hasher) => Digest::update(hasher, data),
            Self::Blake2b512(hasher) => Digest::update(hasher, data),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Sha256(hasher) => Digest::reset(hasher),
            Self::Sha384(hasher) => Digest::reset(hasher),
            Self::Sha512(hasher) => Digest::reset(hasher),
            Self::Sha3_256(hasher) => Digest::reset(hasher),
            Self::Sha3_512(hasher) => Digest::reset(hasher),
            Self::Blake2b512(hasher) => Digest::reset(hasher),
        }
    }

    fn finalize_reset(&mut self) -> Vec<u8> {
        match self {
            Self::Sha256(hasher) => hasher.finalize_reset().to_vec(),
            Self::Sha384(hasher) => hasher.finalize_reset().to_vec(),
            Self::Sha512(hasher) => hasher.finalize_reset().to_vec(),
            Self::Sha3_256(hasher) => hasher.finalize_reset().to_vec(),
            Self::Sha3_512(hasher) => hasher.finalize_reset().to_vec(),
            Self::Blake2b512(hasher) => hasher.finalize_reset().to_vec(),
        }
    }
}

/// Incremental digest builder
///
/// ```
/// use hashkit_hashing::{DigestHashBuilder, HashBuilder, StreamHashBuilder};
///
/// let mut builder = DigestHashBuilder::sha256();
/// builder.update(b"hel");
/// builder.update(b"lo");
/// let streamed = builder.finalize();
///
/// let one_shot = builder.hash(b"hello").unwrap();
/// assert_eq!(streamed, one_shot);
/// ```
#[derive(Clone)]
pub struct DigestHashBuilder {
    algorithm: HashAlgorithm,
    state: DigestState,
    pending: u64,
}

impl DigestHashBuilder {
    /// Create a builder for a streaming digest algorithm
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for salted algorithms.
    pub fn new(algorithm: HashAlgorithm) -> Result<Self> {
        Ok(Self {
            algorithm,
            state: DigestState::new(algorithm)?,
            pending: 0,
        })
    }

    /// Create a builder from an algorithm identifier such as `"SHA-256"`
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if the name is unknown or
    /// names a salted algorithm.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::new(HashAlgorithm::from_name(name)?)
    }

    fn with_state(algorithm: HashAlgorithm, state: DigestState) -> Self {
        Self {
            algorithm,
            state,
            pending: 0,
        }
    }

    /// SHA-256 builder
    #[must_use]
    pub fn sha256() -> Self {
        Self::with_state(HashAlgorithm::Sha256, DigestState::Sha256(Sha256::new()))
    }

    /// SHA-384 builder
    #[must_use]
    pub fn sha384() -> Self {
        Self::with_state(HashAlgorithm::Sha384, DigestState::Sha384(Sha384::new()))
    }

    /// SHA-512 builder
    #[must_use]
    pub fn sha512() -> Self {
        Self::with_state(HashAlgorithm::Sha512, DigestState::Sha512(Sha512::new()))
    }

    /// SHA3-256 builder
    #[must_use]
    pub fn sha3_256() -> Self {
        Self::with_state(
            HashAlgorithm::Sha3_256,
            DigestState::Sha3_256(Sha3_256::new()),
        )
    }

    /// SHA3-512 builder
    #[must_use]
    pub fn sha3_512() -> Self {
        Self::with_state(
            HashAlgorithm::Sha3_512,
            DigestState::Sha3_512(Sha3_512::new()),
        )
    }

    /// `BLAKE2b`-512 builder
    #[must_use]
    pub fn blake2b() -> Self {
        Self::with_state(
            HashAlgorithm::Blake2b512,
            DigestState::Blake2b512(Blake2b512::new()),
        )
    }

    /// Number of bytes absorbed since the builder was last idle
    #[must_use]
    pub fn bytes_pending(&self) -> u64 {
        self.pending
    }

    /// Hash everything `reader` yields
    ///
    /// Starts from a reset state and leaves the builder idle.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if reading fails; accumulated state is
    /// discarded in that case.
    pub fn hash_reader<R: Read>(&mut self, mut reader: R) -> Result<Hash> {
        self.reset();
        if let Err(e) = io::copy(&mut reader, &mut *self) {
            self.reset();
            return Err(HashError::Io(e));
        }
        Ok(self.finalize())
    }

    /// Hash every chunk of an async stream
    ///
    /// Starts from a reset state and leaves the builder idle.
    pub async fn hash_stream<S>(&mut self, stream: S) -> Hash
    where
        S: futures::Stream<Item = Vec<u8>>,
    {
        use futures::StreamExt;

        self.reset();
        let mut stream = std::pin::pin!(stream);
        while let Some(chunk) = stream.next().await {
            self.update(&chunk);
        }
        self.finalize()
    }

    /// One-shot digest of `data`
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for salted algorithms.
    pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Result<Hash> {
        Self::new(algorithm)?.hash(data)
    }

    /// One-shot SHA-256 digest of `data`
    #[must_use]
    pub fn sha256_digest(data: &[u8]) -> Hash {
        let mut builder = Self::sha256();
        builder.update(data);
        builder.finalize()
    }
}

impl AlgorithmIdentity for DigestHashBuilder {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl StreamHashBuilder for DigestHashBuilder {
    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
        self.pending = self.pending.saturating_add(data.len() as u64);
    }

    fn reset(&mut self) {
        self.state.reset();
        self.pending = 0;
    }

    fn finalize(&mut self) -> Hash {
        let raw = self.state.finalize_reset();
        self.pending = 0;
        Hash::new(raw, self.algorithm)
    }
}

impl Write for DigestHashBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        StreamHashBuilder::update(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for DigestHashBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestHashBuilder")
            .field("algorithm", &self.algorithm)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
