//! JSON-lines record of every resolved turn.
//!
//! Records are handed to a background task over an unbounded channel, so the
//! game task never waits on disk. Failing to open or write the file disables
//! the log and leaves the game untouched.

use std::path::PathBuf;

use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::core::GameState;
use crate::types::{Command, Position, TurnOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnEvent {
    Turn,
    Interrupt,
}

/// One line of the turn log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    pub event: TurnEvent,
    pub turn: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<TurnOutcome>,
    pub player: Position,
    pub alive: usize,
}

impl TurnRecord {
    pub fn turn(game: &GameState, command: Command, outcome: TurnOutcome) -> Self {
        Self {
            event: TurnEvent::Turn,
            turn: game.turn(),
            command: Some(command),
            outcome: Some(outcome),
            player: game.player(),
            alive: game.alive_count(),
        }
    }

    pub fn interrupt(game: &GameState) -> Self {
        Self {
            event: TurnEvent::Interrupt,
            turn: game.turn(),
            command: None,
            outcome: None,
            player: game.player(),
            alive: game.alive_count(),
        }
    }
}

/// Sending half of the turn log. Cheap to call when disabled.
#[derive(Debug, Clone, Default)]
pub struct TurnLog {
    tx: Option<mpsc::UnboundedSender<TurnRecord>>,
}

impl TurnLog {
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Start the writer task appending to `path`.
    ///
    /// The task finishes, flushing the file, once every `TurnLog` clone is dropped.
    /// Must be called from within a tokio runtime.
    pub fn spawn(path: PathBuf) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<TurnRecord>();
        let handle = tokio::spawn(async move {
            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "turn log disabled: open failed");
                    return;
                }
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &rec).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if let Err(e) = file.write_all(&buf).await {
                    warn!(path = %path.display(), error = %e, "turn log disabled: write failed");
                    break;
                }
            }

            let _ = file.flush().await;
        });
        (Self { tx: Some(tx) }, handle)
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, rec: TurnRecord) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(rec);
        }
    }
}
