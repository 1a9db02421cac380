//! Seedable RNG construction.
//!
//! Every stochastic draw in the crate goes through an explicit
//! `&mut impl Rng` handle created here, so seeded runs replay exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Runners call this with `config.seed` when set, or with
/// `rand::random()` for an entropy-derived seed otherwise.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
