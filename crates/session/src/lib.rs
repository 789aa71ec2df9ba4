//! Session module - runs one game against a terminal
//!
//! This crate wires the pure game core to the outside world: it owns the
//! [`GameState`](crate::core::GameState) inside a single tokio task and runs the
//! render loop, the blocking input loop and the Ctrl-C handler around it.
//! See [`controller`] for the concurrency model.
//!
//! # Environment Variables
//!
//! - `CHASE_SEED`: spawn seed (default: derived from the clock)
//! - `CHASE_TURN_LOG_PATH`: append one JSON line per turn to this file
//! - `CHASE_LOG_DIR`: directory for `chase.log`
//! - `CHASE_DISABLE_SIGNAL`: set to "1" or "true" to skip the OS Ctrl-C handler
//!
//! # Turn log format
//!
//! ```text
//! {"event":"turn","turn":1,"command":"up","outcome":{"kind":"continue","moved":true},"player":{"x":5,"y":4},"alive":25}
//! {"event":"interrupt","turn":1,"player":{"x":5,"y":4},"alive":25}
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod turn_log;

pub use tui_chase_core as core;
pub use tui_chase_input as input;
pub use tui_chase_term as term;
pub use tui_chase_types as types;

pub use config::ChaseConfig;
pub use controller::{Session, SessionCommand, SessionExit, SessionReport};
pub use error::SessionError;
pub use turn_log::{TurnEvent, TurnLog, TurnRecord};

use crate::core::{Board, GameState};

/// Lay out a new game on a board the size of the terminal.
///
/// Fails with [`SessionError::TerminalTooSmall`] when either dimension is zero
/// or no cell is far enough from the player to spawn a drone.
pub fn create_game(size: (u16, u16), seed: u32) -> Result<GameState, SessionError> {
    let (width, height) = size;
    Board::new(width, height)
        .and_then(|board| GameState::new(board, seed))
        .map_err(|cause| SessionError::TerminalTooSmall {
            width,
            height,
            cause,
        })
}
