//! Seeded session randomness.
//!
//! Shareable sessions (e.g. a seed passed through a URL) require the shuffle
//! to replay identically everywhere, so this is a fixed 32-bit mixing
//! generator rather than a library RNG whose stream could change between
//! versions or platforms.

/// mulberry32: a 32-bit state updated with fixed mixing constants, emitting
/// values in `[0, 1)`.
///
/// All arithmetic wraps on 32-bit overflow; that wrapping is part of the
/// sequence contract, not an accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Uniform index in `0..bound`.
    ///
    /// Returns 0 when `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_unit() * bound as f64) as usize
    }
}
