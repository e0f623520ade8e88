//! RNG module - uniform random shape generation
//!
//! Every freshly generated piece picks one of the seven shapes with equal
//! probability, independent of the previous ones (no bag, no history).
//!
//! The generator is a simple LCG so that a seed fully determines a game,
//! which keeps engine tests reproducible.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would still advance, but keep seed 0 distinct from 1.
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Source of shapes for newly generated pieces
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    rng: SimpleRng,
}

impl ShapeGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape
    pub fn next_shape(&mut self) -> ShapeKind {
        let n = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[n]
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
