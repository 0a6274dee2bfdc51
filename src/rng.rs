//! Seeded random source construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded RNG.
///
/// The runner owns one RNG built here and threads it through every
/// operator call, so a run is fully reproducible from its seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
