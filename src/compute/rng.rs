//! Shared random stream from which every star is sampled.
//!
//! Each star construction (and respawn) first takes one `u64` from this stream
//! to seed the star's private generator, then draws its document permutation
//! from the same stream. Reproducing a run requires preserving that call order.

use rand::prelude::*;

/// Seeded top-level random stream.
pub struct StreamFactory {
    rng: StdRng,
}

impl StreamFactory {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate next u64 for seeding a star's private stream.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.r#gen()
    }

    /// Derive a private stream for one star. Consumes exactly one value.
    pub fn spawn_stream(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.next_seed())
    }

    /// Uniformly shuffled indices `0..n`.
    pub fn shuffled_indices(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}
