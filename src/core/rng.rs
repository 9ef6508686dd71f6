//! Deterministic random number generation for shuffling and cutting.
//!
//! Every source of randomness in a game is an explicit `GameRng` handed in
//! by the caller, so a seed fully determines a deal.
//!
//! ```
//! use tablic::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Each round draws from its own stream
//! let mut first = rng.for_round(1);
//! let mut again = GameRng::new(42).for_round(1);
//! assert_eq!(first.cut_point(52), again.cut_point(52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive the independent stream used for round `round`.
    ///
    /// Depends only on the seed, not on how far this stream has advanced.
    #[must_use]
    pub fn for_round(&self, round: u64) -> Self {
        Self::new(self.seed ^ round.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a cut position in `0..len`. Returns 0 for an empty deck.
    pub fn cut_point(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
