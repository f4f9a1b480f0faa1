//! RNG module - seeded randomness for deck shuffling
//!
//! A small xorshift32 generator with a Fisher-Yates shuffle. The deck layout
//! must be an unbiased permutation, so range reduction uses the
//! multiply-shift method (draws from the high bits) instead of a modulo.
//! Deterministic per seed, which the test suites rely on.

/// Seeded xorshift32 generator
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // xorshift has a single fixed point at 0; remap to a nonzero state.
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Generate a random value in `[0, max)` without modulo bias
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Shuffle a slice in place with Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
