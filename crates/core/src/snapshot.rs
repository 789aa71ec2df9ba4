use crate::drone::Drone;
use crate::types::{Overlay, Position, DRONE_COUNT};

/// Read-only copy of the game handed to renderers.
///
/// Snapshots are only taken between turns, so collisions are always resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub player: Position,
    pub drones: [Drone; DRONE_COUNT],
    pub overlay: Overlay,
    pub turn: u32,
}

impl GameSnapshot {
    pub fn alive_count(&self) -> usize {
        self.drones.iter().filter(|d| d.alive).count()
    }

    /// Whether every token lies inside `width x height`.
    pub fn in_bounds(&self) -> bool {
        let inside = |p: Position| {
            p.x >= 0 && p.y >= 0 && p.x < i32::from(self.width) && p.y < i32::from(self.height)
        };
        inside(self.player) && self.drones.iter().all(|d| inside(d.position))
    }
}
