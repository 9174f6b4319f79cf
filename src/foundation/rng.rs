//! Reproducible pseudo-randomness.
//!
//! Frame sequences are cached and compared by exact output, so every "random" choice in the
//! engine comes from this generator with a fixed seed. Nothing reads ambient entropy.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0; // 2^32

/// Linear congruential generator: `state = state * 1664525 + 1013904223 (mod 2^32)`.
#[derive(Clone, Copy, Debug)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Seed a new generator. The seed itself is never returned; the first draw advances once.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the raw 32-bit state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Advance and return `state / 2^32`, in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / MODULUS
    }

    /// Uniform integer in `[0, bound)`; `bound == 0` yields 0.
    pub fn next_below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Closure form of [`Lcg`]: every call returns the next draw in `[0, 1)`.
pub fn seeded_random(seed: u32) -> impl FnMut() -> f64 {
    let mut rng = Lcg::new(seed);
    move || rng.next_f64()
}

/// In-place Fisher–Yates shuffle driven by `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut Lcg) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
