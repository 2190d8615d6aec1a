use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies the random pan offsets tried while probing.
pub trait OffsetSource {
    /// A value in `[lo, hi]`, both inclusive. Returns `lo` when `lo >= hi`.
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Offsets from a seedable PCG generator; equal seeds give equal runs.
#[derive(Debug, Clone)]
pub struct SeededOffsets {
    rng: Pcg32,
}

impl SeededOffsets {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seeded from the thread-local generator, for unrepeatable runs.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl OffsetSource for SeededOffsets {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

impl<O: OffsetSource + ?Sized> OffsetSource for &mut O {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).next_in_range(lo, hi)
    }
}
