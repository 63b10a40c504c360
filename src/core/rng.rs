//! Deterministic random number generation for deck dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks, level after level
//! - **Injectable**: Hosts pick the seed; tests pin it
//!
//! ## Usage
//!
//! ```
//! use flip_a_pair::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used by the deck generator.
///
/// Uses ChaCha8 so a seed gives the same sequence on every platform.
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct elements without replacement.
    ///
    /// Returns fewer elements when the slice is shorter than `amount`;
    /// callers that need exactly `amount` must check the length first.
    /// Output order is not itself uniformly permuted.
    pub fn sample_distinct<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice
            .choose_multiple(&mut self.inner, amount)
            .cloned()
            .collect()
    }
}
