//! Pursuit AI - greedy single-step chase
//!
//! Each axis is handled independently, so a drone that is off in both axes moves
//! diagonally. There is no lookahead and no obstacle avoidance.

use crate::drone::Drone;
use crate::types::Position;

/// Step `(dx, dy)` a drone takes toward `target`, each component in `-1..=1`.
///
/// Wrecks always answer `(0, 0)`.
pub fn compute_step(drone: &Drone, target: Position) -> (i32, i32) {
    if !drone.alive {
        return (0, 0);
    }
    (
        (target.x - drone.position.x).signum(),
        (target.y - drone.position.y).signum(),
    )
}

/// Cell `drone` would occupy after one step toward `target`.
pub fn predicted_position(drone: &Drone, target: Position) -> Position {
    let (dx, dy) = compute_step(drone, target);
    drone.position.offset(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_along_one_axis() {
        let drone = Drone::new(Position::new(7, 5));
        assert_eq!(compute_step(&drone, Position::new(5, 5)), (-1, 0));
        assert_eq!(predicted_position(&drone, Position::new(5, 5)), Position::new(6, 5));
    }

    #[test]
    fn test_step_is_diagonal_when_off_in_both_axes() {
        let drone = Drone::new(Position::new(2, 9));
        assert_eq!(compute_step(&drone, Position::new(40, 0)), (1, -1));
    }

    #[test]
    fn test_step_is_zero_on_target() {
        let drone = Drone::new(Position::new(3, 3));
        assert_eq!(compute_step(&drone, Position::new(3, 3)), (0, 0));
    }

    #[test]
    fn test_wreck_never_steps() {
        let wreck = Drone::wreck(Position::new(0, 0));
        assert_eq!(compute_step(&wreck, Position::new(9, 9)), (0, 0));
        assert_eq!(predicted_position(&wreck, Position::new(9, 9)), Position::new(0, 0));
    }
}
