//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, usable from the game core, the
//! renderer and the session controller alike.
//!
//! # Coordinates
//!
//! Positions are 0-based `(x, y)` cells with `x` growing to the right and `y`
//! growing downwards, mirroring terminal columns and rows. The board is exactly
//! as large as the terminal at startup.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DRONE_COUNT` | 25 | Drones spawned per session |
//! | `SPAWN_MIN_DISTANCE` | 5 | Minimum Manhattan distance from player at spawn |
//! | `RENDER_TICK_MS` | 50 | Render cadence |
//!
//! # Examples
//!
//! ```
//! use tui_chase_types::{Command, Position};
//!
//! let cmd = Command::from_char('a').unwrap();
//! assert_eq!(cmd.delta(), (-1, 0));
//!
//! let p = Position::new(3, 4).offset(-1, 0);
//! assert_eq!(p, Position::new(2, 4));
//! assert_eq!(p.manhattan(Position::new(0, 0)), 6);
//! ```

use serde::Serialize;

/// Number of drones in every session. The drone sequence never grows or shrinks.
pub const DRONE_COUNT: usize = 25;

/// Minimum Manhattan distance between a freshly spawned drone and the player.
pub const SPAWN_MIN_DISTANCE: i32 = 5;

/// Render cadence in milliseconds.
pub const RENDER_TICK_MS: u64 = 50;

/// Title of the dialog shown once every drone is destroyed.
pub const WIN_TITLE: &str = "You win!";

/// Title of the dialog forced by an external interrupt.
pub const GAME_OVER_TITLE: &str = "Game over";

/// Printed (outside the alternate screen) when there is no room to play.
pub const TOO_SMALL_MESSAGE: &str = "Terminal size is too small";

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`. No bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Sum of absolute coordinate differences.
    pub const fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// A recognized player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    Up,
    Left,
    Down,
    Right,
    /// Stay in place; drones still advance.
    Wait,
}

impl Command {
    /// Parse one raw input character. Anything outside `w a s d <space>` is `None`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Self::Up),
            'a' => Some(Self::Left),
            's' => Some(Self::Down),
            'd' => Some(Self::Right),
            ' ' => Some(Self::Wait),
            _ => None,
        }
    }

    /// Movement delta `(dx, dy)` for this command.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
            Self::Wait => (0, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
            Self::Right => "right",
            Self::Wait => "wait",
        }
    }
}

/// Geometry and title of a bordered dialog box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dialog {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub title: &'static str,
}

impl Dialog {
    pub const fn new(x: u16, y: u16, width: u16, height: u16, title: &'static str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            title,
        }
    }

    /// The dialog shown when all drones are destroyed.
    pub const fn win() -> Self {
        Self::new(10, 10, 10, 10, WIN_TITLE)
    }

    /// The dialog forced by an interrupt.
    pub const fn game_over() -> Self {
        Self::new(10, 10, 11, 10, GAME_OVER_TITLE)
    }
}

/// Banner drawn on top of the board every render tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overlay {
    #[default]
    None,
    Win(Dialog),
    GameOver(Dialog),
}

impl Overlay {
    pub fn dialog(&self) -> Option<&Dialog> {
        match self {
            Self::None => None,
            Self::Win(d) | Self::GameOver(d) => Some(d),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver(_))
    }
}

/// Result of submitting one character to the turn orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TurnOutcome {
    /// Unrecognized character, or the game already ended. Nothing changed.
    Ignored,
    /// A full turn ran. `moved` reports whether the player position changed.
    Continue { moved: bool },
    /// A full turn ran and the last live drone was destroyed on it.
    Won { moved: bool },
}

impl TurnOutcome {
    pub fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }

    pub fn ran_turn(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_alphabet_maps_to_deltas() {
        assert_eq!(Command::from_char('w').map(Command::delta), Some((0, -1)));
        assert_eq!(Command::from_char('a').map(Command::delta), Some((-1, 0)));
        assert_eq!(Command::from_char('s').map(Command::delta), Some((0, 1)));
        assert_eq!(Command::from_char('d').map(Command::delta), Some((1, 0)));
        assert_eq!(Command::from_char(' ').map(Command::delta), Some((0, 0)));
    }

    #[test]
    fn unrecognized_characters_are_rejected() {
        for ch in ['q', 'W', 'x', '\n', '\r', '1'] {
            assert_eq!(Command::from_char(ch), None, "{ch:?}");
        }
    }

    #[test]
    fn overlay_dialog_dispatch() {
        assert!(Overlay::None.dialog().is_none());
        assert_eq!(Overlay::Win(Dialog::win()).dialog().unwrap().title, WIN_TITLE);
        assert_eq!(
            Overlay::GameOver(Dialog::game_over()).dialog().unwrap().title,
            GAME_OVER_TITLE
        );
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 2);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
    }
}
