//! Deterministic random source for a single render.
//!
//! Every render owns exactly one [`StarRng`], seeded from the request seed
//! and threaded by `&mut` through every feature pass. Identical seeds and
//! identical call order produce identical images on every platform, since
//! ChaCha8 output does not depend on the host.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded pseudo-random stream.
#[derive(Debug, Clone)]
pub struct StarRng {
    inner: ChaCha8Rng,
}

impl StarRng {
    /// Create a stream from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `lo..=hi`. Reversed bounds are swapped.
    pub fn int(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.inner.random_range(lo..=hi)
    }

    /// Whole-degree angle in `0..=360`, returned in radians.
    pub fn angle(&mut self) -> f64 {
        self.int(0, 360) as f64 * PI / 180.0
    }

    /// True with probability `1 / n`.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.int(0, n - 1) == 0
    }

    /// Integer noise in `-amplitude..=amplitude`.
    pub fn noise(&mut self, amplitude: i32) -> i32 {
        self.int(-amplitude, amplitude)
    }
}
