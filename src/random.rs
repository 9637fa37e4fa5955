//! The process-wide secure random source.

use std::sync::{Mutex, OnceLock};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

static SHARED: OnceLock<Mutex<ChaCha20Rng>> = OnceLock::new();

fn shared() -> &'static Mutex<ChaCha20Rng> {
    SHARED.get_or_init(|| {
        tracing::debug!("seeding shared ChaCha20 generator from OS entropy");
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Mutex::new(ChaCha20Rng::from_seed(seed))
    })
}

/// A handle onto a single ChaCha20 CSPRNG shared by the whole process.
///
/// The generator is seeded from the operating system the first time any handle draws from it, and
/// is never reseeded or seeded deterministically. Every draw takes a lock, so handles may be used
/// from any number of threads at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecureRandom;

impl SecureRandom {
    pub fn new() -> SecureRandom {
        SecureRandom
    }

    fn with<T>(&mut self, f: impl FnOnce(&mut ChaCha20Rng) -> T) -> T {
        // ChaCha's state is valid after any partial draw, so a poisoned lock is still usable.
        let mut rng = shared().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *rng)
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        self.with(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.with(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.with(|rng| rng.try_fill_bytes(dest))
    }
}

impl CryptoRng for SecureRandom {}
