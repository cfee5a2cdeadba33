//! Deterministic random numbers for the simulation.
//!
//! A simple LCG keeps mission runs reproducible from a seed, which the
//! tests lean on heavily. Not suitable for anything security-adjacent.

// Numerical Recipes parameters, modulus 2^32 through wrapping arithmetic.
const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// Seedable linear congruential generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. A zero seed is remapped to 1; the all-zero
    /// state would never leave itself under a plain multiply.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform-ish value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a value in [min, max], both ends inclusive.
    pub fn between(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        min + self.next_range((max - min + 1) as u32) as i32
    }

    /// One-in-`n` event roll.
    pub fn one_in(&mut self, n: u32) -> bool {
        self.next_range(n) == 0
    }
}
