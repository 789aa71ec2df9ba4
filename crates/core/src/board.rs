//! Board module - the bounds of the playfield
//!
//! The board is as large as the terminal was at startup and never changes
//! afterwards. It holds no cells of its own: the player and the drones carry
//! their positions, the board only answers bounds questions.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom)

use crate::game_state::SpawnError;
use crate::types::Position;

/// Immutable playfield bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: u16,
    height: u16,
}

impl Board {
    /// Create a board. Both dimensions must be non-zero.
    pub fn new(width: u16, height: u16) -> Result<Self, SpawnError> {
        if width == 0 || height == 0 {
            return Err(SpawnError::EmptyBoard { width, height });
        }
        Ok(Self { width, height })
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Check if position lies on the board
    #[inline(always)]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.x < i32::from(self.width) && p.y >= 0 && p.y < i32::from(self.height)
    }

    /// Largest Manhattan distance between two cells (corner to corner).
    pub fn diameter(&self) -> i32 {
        i32::from(self.width) - 1 + i32::from(self.height) - 1
    }

    /// Largest Manhattan distance from `p` to any cell of the board.
    pub fn max_distance_from(&self, p: Position) -> i32 {
        let far_x = p.x.max(i32::from(self.width) - 1 - p.x);
        let far_y = p.y.max(i32::from(self.height) - 1 - p.y);
        far_x + far_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rejects_zero_dimensions() {
        assert!(matches!(
            Board::new(0, 24),
            Err(SpawnError::EmptyBoard { width: 0, height: 24 })
        ));
        assert!(Board::new(80, 0).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_board_contains_edges() {
        let board = Board::new(10, 5).unwrap();
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(9, 4)));
        assert!(!board.contains(Position::new(10, 0)));
        assert!(!board.contains(Position::new(0, 5)));
        assert!(!board.contains(Position::new(-1, 2)));
        assert!(!board.contains(Position::new(3, -1)));
    }

    #[test]
    fn test_max_distance_from_picks_farthest_corner() {
        let board = Board::new(10, 10).unwrap();
        assert_eq!(board.max_distance_from(Position::new(0, 0)), 18);
        assert_eq!(board.max_distance_from(Position::new(5, 5)), 10);
        let tiny = Board::new(3, 3).unwrap();
        assert_eq!(tiny.max_distance_from(Position::new(1, 1)), 2);
    }

    #[test]
    fn test_diameter_spans_opposite_corners() {
        assert_eq!(Board::new(80, 24).unwrap().diameter(), 102);
        assert_eq!(Board::new(4, 3).unwrap().diameter(), 5);
        assert_eq!(Board::new(1, 1).unwrap().diameter(), 0);
    }
}
