//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend, diffed against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the drawing primitives (print-at, bordered dialog) free of I/O
//! - Let the session drive any [`Surface`], real terminal or in-memory

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_chase_core as core;
pub use tui_chase_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use surface::{MemorySurface, Surface};
