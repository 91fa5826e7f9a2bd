//! Seeded random stream helpers for maze generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform index in `0..len` using a widening multiply on one 64-bit draw.
///
/// `len` must be non-zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    ((u128::from(rng.next_u64()) * len as u128) >> 64) as usize
}
