use thiserror::Error;

use crate::core::SpawnError;

/// Failures that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The terminal cannot hold a playable board. Not a crash: the binary
    /// prints the message and exits successfully.
    #[error("Terminal size is too small")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        #[source]
        cause: SpawnError,
    },

    #[error("input failed: {0:#}")]
    Input(anyhow::Error),

    #[error("render failed: {0:#}")]
    Render(anyhow::Error),

    #[error("session task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
