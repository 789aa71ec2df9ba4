//! Drone entity.

use crate::types::Position;

/// A pursuing drone. Its identity is its index in the session's drone array.
///
/// Once destroyed a drone stays on the board as an inert wreck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Drone {
    pub position: Position,
    pub alive: bool,
}

impl Drone {
    /// A live drone at `position`.
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            alive: true,
        }
    }

    /// A destroyed drone resting at `position`.
    pub const fn wreck(position: Position) -> Self {
        Self {
            position,
            alive: false,
        }
    }

    /// Shift a live drone by `(dx, dy)`. Wrecks never move.
    pub fn step(&mut self, dx: i32, dy: i32) {
        if self.alive {
            self.position = self.position.offset(dx, dy);
        }
    }
}
