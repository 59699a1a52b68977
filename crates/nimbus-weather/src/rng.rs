//! Per-frame deterministic random source.
//!
//! Every random decision of a splash frame (column choice, jitter, spark
//! rolls, reservoir replacement, sound throttle) draws from one stream seeded
//! from the frame counter. The same counter always replays the same frame.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Large odd multiplier spreading consecutive frame counters across seed space.
pub const SEED_MULTIPLIER: u64 = 312_987_231;

/// Seeded random source for one splash frame.
#[derive(Clone, Debug)]
pub struct SplashRng {
    inner: ChaCha8Rng,
}

impl SplashRng {
    /// Creates a source seeded directly with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates the source for frame `frame_counter`.
    pub fn for_frame(frame_counter: u64) -> Self {
        Self::new(frame_seed(frame_counter))
    }

    /// Restarts the stream at `seed`.
    pub fn seed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Uniform integer in `[0, bound)`. `bound` must be positive.
    #[inline]
    pub fn next_int(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_int bound must be positive");
        self.inner.random_range(0..bound)
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        self.inner.random::<f32>()
    }
}

/// Seed used for frame `frame_counter`.
#[inline]
pub fn frame_seed(frame_counter: u64) -> u64 {
    frame_counter.wrapping_mul(SEED_MULTIPLIER)
}
