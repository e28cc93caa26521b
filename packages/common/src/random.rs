//! Secure random sources
//!
//! [`SecureRandom::shared`] hands out the process-wide CSPRNG used for salts and
//! default generator randomness. It is created on first use, seeded from the OS,
//! and warmed up on a background thread so the first real caller never waits for
//! the whole warm-up. Components take an `Arc<dyn RandomSource>` so tests can
//! inject a [`SeededRandom`] instead.

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use tracing::{debug, warn};

/// Upper bound (exclusive) for the number of discarded warm-up draws
pub const WARM_UP_MAX_ROUNDS: u32 = 1_000;

const WARM_UP_THREAD_NAME: &str = "hashkit-secure-random-warmup";

static SHARED: OnceCell<Arc<SecureRandom>> = OnceCell::new();

/// A source of random bytes that can be shared between threads
///
/// Implementations synchronize internally: every method takes `&self` and one
/// instance may be drawn from by many threads at once.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with random bytes
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Draw a single random 64-bit value
    fn next_u64(&self) -> u64;

    /// Draw `len` random bytes into a new buffer
    fn random_bytes(&self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn fill_bytes(&self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }

    fn next_u64(&self) -> u64 {
        (**self).next_u64()
    }
}

/// Cryptographically secure random source seeded from the operating system
pub struct SecureRandom {
    rng: Mutex<StdRng>,
}

impl SecureRandom {
    /// Create an independent instance seeded from the OS entropy pool
    ///
    /// No warm-up is performed; prefer [`SecureRandom::shared`] unless an
    /// isolated instance is really needed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// The process-wide instance
    ///
    /// Initialized exactly once. The first call also starts the background
    /// warm-up, which never blocks callers for longer than a single draw.
    #[must_use]
    pub fn shared() -> Arc<SecureRandom> {
        Arc::clone(SHARED.get_or_init(|| {
            let random = Arc::new(SecureRandom::new());
            spawn_warm_up(Arc::clone(&random));
            random
        }))
    }

    /// The process-wide instance as a trait object
    #[must_use]
    pub fn shared_source() -> Arc<dyn RandomSource> {
        Self::shared()
    }

    // A panic while holding the lock leaves the generator state intact, so a
    // poisoned mutex is still safe to draw from.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandom").finish_non_exhaustive()
    }
}

impl RandomSource for SecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest);
    }

    fn next_u64(&self) -> u64 {
        self.lock().next_u64()
    }
}

fn spawn_warm_up(random: Arc<SecureRandom>) {
    let spawned = thread::Builder::new()
        .name(WARM_UP_THREAD_NAME.to_string())
        .spawn(move || {
            let rounds = random.lock().random_range(0..WARM_UP_MAX_ROUNDS);
            debug!(rounds, "warming up shared secure random");
            // One lock per draw so concurrent callers interleave with the warm-up.
            for _ in 0..rounds {
                let _ = random.next_u64();
            }
            debug!("shared secure random warm-up finished");
        });

    if let Err(e) = spawned {
        warn!(error = %e, "secure random warm-up thread could not be spawned");
    }
}

/// Deterministic random source for tests and reproducible runs
///
/// The same seed always yields the same byte stream. Never use it for salts or
/// tokens that must be unpredictable.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source whose output is fully determined by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom").finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest);
    }

    fn next_u64(&self) -> u64 {
        self.lock().next_u64()
    }
}
