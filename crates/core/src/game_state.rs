//! Game state module - manages the complete game state
//!
//! This module ties together the board, the player, the drones and the overlay.
//! It owns the turn sequence: player move, drone advance, collision resolution,
//! win check. Every mutation of the game goes through here.

use crate::board::Board;
use crate::drone::Drone;
use crate::pursuit::{compute_step, predicted_position};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Command, Dialog, Overlay, Position, TurnOutcome, DRONE_COUNT, SPAWN_MIN_DISTANCE,
};

/// Reasons a session cannot be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("board {width}x{height} has no cells")]
    EmptyBoard { width: u16, height: u16 },

    #[error("no cell of the {width}x{height} board is {min_distance} steps from the player")]
    NoFarCell {
        width: u16,
        height: u16,
        min_distance: i32,
    },

    #[error("position {0:?} lies outside the board")]
    OutOfBounds(Position),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Position,
    drones: [Drone; DRONE_COUNT],
    overlay: Overlay,
    /// Number of turns resolved so far.
    turn: u32,
    seed: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The player lands on a random cell with room for drones around it; each
    /// drone is re-sampled until it is at least [`SPAWN_MIN_DISTANCE`] from the
    /// player. Drones may share a cell.
    ///
    /// Whether a board is playable depends on its size only, never on the seed.
    pub fn new(board: Board, seed: u32) -> Result<Self, SpawnError> {
        if board.diameter() < SPAWN_MIN_DISTANCE {
            return Err(SpawnError::NoFarCell {
                width: board.width(),
                height: board.height(),
                min_distance: SPAWN_MIN_DISTANCE,
            });
        }

        // Corner cells always qualify, so this terminates.
        let mut rng = SimpleRng::new(seed);
        let mut player = rng.next_position(&board);
        while board.max_distance_from(player) < SPAWN_MIN_DISTANCE {
            player = rng.next_position(&board);
        }

        let drones = std::array::from_fn(|_| {
            let mut pos = rng.next_position(&board);
            while pos.manhattan(player) < SPAWN_MIN_DISTANCE {
                pos = rng.next_position(&board);
            }
            Drone::new(pos)
        });

        Ok(Self {
            board,
            player,
            drones,
            overlay: Overlay::None,
            turn: 0,
            seed,
        })
    }

    /// Create a game from an explicit layout.
    ///
    /// Every position must lie on the board. No distance rules are applied.
    pub fn with_layout(
        board: Board,
        player: Position,
        drones: [Drone; DRONE_COUNT],
    ) -> Result<Self, SpawnError> {
        if !board.contains(player) {
            return Err(SpawnError::OutOfBounds(player));
        }
        if let Some(d) = drones.iter().find(|d| !board.contains(d.position)) {
            return Err(SpawnError::OutOfBounds(d.position));
        }
        Ok(Self {
            board,
            player,
            drones,
            overlay: Overlay::None,
            turn: 0,
            seed: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn drones(&self) -> &[Drone; DRONE_COUNT] {
        &self.drones
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn alive_count(&self) -> usize {
        self.drones.iter().filter(|d| d.alive).count()
    }

    /// Whether commands are still accepted.
    pub fn accepting_input(&self) -> bool {
        self.overlay.is_none()
    }

    /// Attempt to move the player by `(dx, dy)`.
    ///
    /// The move is rejected when the target cell is off the board, or when any
    /// drone's predicted step toward the target lands on the cell whose
    /// absolute coordinates equal the raw delta `(dx, dy)`. The second rule is
    /// kept exactly as the game has always played; see DESIGN.md.
    ///
    /// Returns true if the player moved.
    pub fn try_move_player(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.player.offset(dx, dy);
        if !self.board.contains(candidate) {
            return false;
        }

        let delta_cell = Position::new(dx, dy);
        if self
            .drones
            .iter()
            .any(|d| predicted_position(d, candidate) == delta_cell)
        {
            return false;
        }

        self.player = candidate;
        true
    }

    /// Step every live drone toward the player's current position.
    pub fn advance_drones(&mut self) {
        let target = self.player;
        for drone in self.drones.iter_mut().filter(|d| d.alive) {
            let (dx, dy) = compute_step(drone, target);
            drone.step(dx, dy);
        }
    }

    /// Destroy every drone that shares a cell with another drone.
    ///
    /// Wrecks take part too: a live drone landing on a wreck is destroyed with it.
    pub fn resolve_collisions(&mut self) {
        let n = self.drones.len();
        for i in 0..n {
            for j in 0..n {
                if i != j && self.drones[i].position == self.drones[j].position {
                    self.drones[i].alive = false;
                    self.drones[j].alive = false;
                }
            }
        }
    }

    /// True iff every drone is destroyed.
    pub fn is_win(&self) -> bool {
        self.drones.iter().all(|d| !d.alive)
    }

    /// Run one full turn for `command`.
    ///
    /// Nothing happens once an overlay is showing.
    pub fn apply_command(&mut self, command: Command) -> TurnOutcome {
        if !self.accepting_input() {
            return TurnOutcome::Ignored;
        }

        let moved = match command {
            Command::Wait => false,
            _ => {
                let (dx, dy) = command.delta();
                self.try_move_player(dx, dy)
            }
        };

        self.advance_drones();
        self.resolve_collisions();
        self.turn = self.turn.wrapping_add(1);

        if self.is_win() {
            self.overlay = Overlay::Win(Dialog::win());
            return TurnOutcome::Won { moved };
        }
        TurnOutcome::Continue { moved }
    }

    /// Parse `ch` through the input alphabet and run a turn if it is recognized.
    pub fn submit_char(&mut self, ch: char) -> TurnOutcome {
        match Command::from_char(ch) {
            Some(command) => self.apply_command(command),
            None => TurnOutcome::Ignored,
        }
    }

    /// Force the game-over banner. Overrides any earlier overlay.
    pub fn force_game_over(&mut self) {
        self.overlay = Overlay::GameOver(Dialog::game_over());
    }

    /// Copy of everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            player: self.player,
            drones: self.drones,
            overlay: self.overlay,
            turn: self.turn,
        }
    }

    #[cfg(test)]
    pub(crate) fn drones_mut(&mut self) -> &mut [Drone; DRONE_COUNT] {
        &mut self.drones
    }
}
