//! Seedable random number generation for word shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Uniform**: Shuffles are Fisher-Yates, every permutation equally likely
//! - **Context streams**: Independent sequences per puzzle from one seed
//!
//! ```
//! use puzzle_arcade::core::GameRng;
//!
//! let mut a = GameRng::new(42).for_context("connections");
//! let mut b = GameRng::new(42).for_context("connections");
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread derived seeds.
const SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable RNG used wherever a puzzle needs randomness.
///
/// Uses ChaCha8 so a seed reproduces the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into a new stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(self.seed.wrapping_add(self.fork_counter.wrapping_mul(SEED_STEP)))
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// Contexts are mixed with FNV-1a, so derived seeds do not depend on the
    /// toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in context.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        Self::new(self.seed.wrapping_mul(SEED_STEP) ^ hash)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("connections");
        let mut ctx2 = rng.for_context("strands");

        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();
        ctx1.shuffle(&mut a);
        ctx2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_fork_streams_differ_but_repeat() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let (first, second) = (a.fork(), a.fork());
        assert_ne!(first.seed(), second.seed());
        assert_eq!(b.fork().seed(), first.seed());
        assert_eq!(b.fork().seed(), second.seed());
    }

    #[test]
    fn test_context_seed_is_stable() {
        // Pinned so that a toolchain upgrade cannot change saved deals.
        let hash = "connections".bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
        });
        assert_eq!(GameRng::new(7).for_context("connections").seed(), 7u64.wrapping_mul(SEED_STEP) ^ hash);
        assert_eq!(GameRng::new(0).for_context("").seed(), 0xcbf2_9ce4_8422_2325);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(7);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_covers_every_position() {
        // Every element should be able to land first; a biased comparator
        // shuffle tends to leave elements near their start.
        let mut rng = GameRng::new(1);
        let mut seen_first = [false; 4];
        for _ in 0..200 {
            let mut data = [0usize, 1, 2, 3];
            rng.shuffle(&mut data);
            seen_first[data[0]] = true;
        }
        assert!(seen_first.iter().all(|&seen| seen));
    }
}
