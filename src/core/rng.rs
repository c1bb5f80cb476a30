//! RNG construction and small probability helpers.
//!
//! Domain functions take `rng: &mut impl Rng` so both the seeded simulator
//! RNG and thread-local RNGs work everywhere.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a reproducible RNG from a fixed seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create an RNG seeded from OS entropy.
pub fn from_entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Returns true with probability `p`.
///
/// `p <= 0.0` never fires, `p >= 1.0` always fires.
pub fn chance(p: f64, rng: &mut impl Rng) -> bool {
    if p <= 0.0 {
        return false;
    }
    if p >= 1.0 {
        return true;
    }
    rng.gen::<f64>() < p
}
