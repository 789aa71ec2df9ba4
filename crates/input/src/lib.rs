//! Terminal input: key mapping and character sources for the session.
//!
//! This crate is independent of the renderer. It turns raw `crossterm` key
//! events into [`InputEvent`]s, one character at a time, and defines the
//! [`CharSource`] seam the session controller reads from.

pub mod map;
pub mod source;

pub use tui_chase_types as types;

pub use map::{is_interrupt, map_key_event, InputEvent};
pub use source::{CharSource, ScriptedInput, TtyInput};
