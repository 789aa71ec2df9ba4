//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or async runtime, making it:
//!
//! - **Deterministic**: Same seed and board produce the same spawn layout
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: The session controller, benches and tests all drive the same code
//!
//! # Module Structure
//!
//! - [`board`]: playfield bounds, fixed at startup
//! - [`drone`]: the drone entity and its liveness flag
//! - [`pursuit`]: greedy per-axis step toward the player
//! - [`game_state`]: player movement, drone advance, collisions, win check, turns
//! - [`rng`]: LCG used for spawn placement
//! - [`snapshot`]: render-side copy of the state
//!
//! # Game Rules
//!
//! - **Spawn**: player on a random cell, 25 drones at Manhattan distance ≥ 5 from it
//! - **Turn**: player move (or wait) → every live drone steps toward the player →
//!   drones sharing a cell are destroyed → win if none are left alive
//! - **Wrecks**: destroyed drones stay put and destroy anything that lands on them
//! - **Capture**: a drone reaching the player has no effect
//!
//! # Example
//!
//! ```
//! use tui_chase_core::{Board, Drone, GameState};
//! use tui_chase_types::{Command, Position, TurnOutcome, DRONE_COUNT};
//!
//! let board = Board::new(10, 10).unwrap();
//! let mut drones = [Drone::wreck(Position::new(0, 0)); DRONE_COUNT];
//! drones[0] = Drone::new(Position::new(7, 5));
//! let mut game = GameState::with_layout(board, Position::new(5, 5), drones).unwrap();
//!
//! assert_eq!(game.apply_command(Command::Wait), TurnOutcome::Continue { moved: false });
//! assert_eq!(game.drones()[0].position, Position::new(6, 5));
//! ```

pub mod board;
pub mod drone;
pub mod game_state;
pub mod pursuit;
pub mod rng;
pub mod snapshot;

pub use tui_chase_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use drone::Drone;
pub use game_state::{GameState, SpawnError};
pub use pursuit::{compute_step, predicted_position};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
