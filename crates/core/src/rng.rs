//! RNG module - deterministic spawn placement
//!
//! A small LCG is enough for placing tokens on the board, and keeps every
//! session reproducible from its seed (`CHASE_SEED`).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::board::Board;
use crate::types::Position;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed derived from the wall clock, for sessions without a configured seed.
    pub fn seed_from_clock() -> u32 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(1);
        // Fold the 128-bit count so both the seconds and sub-second parts contribute.
        (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    /// `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Uniformly random cell of `board`.
    pub fn next_position(&mut self, board: &Board) -> Position {
        let x = self.next_range(u32::from(board.width()));
        let y = self.next_range(u32::from(board.height()));
        Position::new(x as i32, y as i32)
    }
}
