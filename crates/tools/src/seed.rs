use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use maze_core::maze::rng_from_seed;
use rand_chacha::rand_core::Rng;

/// Where the seed for a run came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Config(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Config(seed) | Self::Generated(seed) => seed,
        }
    }

    /// Command line wins over the config file; a fresh seed fills the gap.
    pub fn resolve(cli: Option<u64>, config: Option<u64>) -> Self {
        match (cli, config) {
            (Some(seed), _) => Self::Cli(seed),
            (None, Some(seed)) => Self::Config(seed),
            (None, None) => Self::Generated(runtime_seed()),
        }
    }
}

static RUNTIME_SEED_CALLS: AtomicU64 = AtomicU64::new(0);

/// Fresh seed from the clock, the process id, and a per-process call count, whitened by
/// one draw from the maze RNG.
pub fn runtime_seed() -> u64 {
    let clock =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |since| since.as_nanos() as u64);
    let call = RUNTIME_SEED_CALLS.fetch_add(1, Ordering::Relaxed);
    let entropy =
        clock ^ (u64::from(process::id()) << 32) ^ call.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    rng_from_seed(entropy).next_u64()
}
